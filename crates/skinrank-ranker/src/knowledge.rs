//! Condition knowledge table.
//!
//! The built-in table is compiled-in reference data: five skin conditions,
//! each with its symptom list, a static severity weight in [0, 1] and a
//! recommended next step. It is built once on first use and only ever read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// One condition the ranker can score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub name: String,
    /// Normalised (lowercase) symptom phrases, in display order.
    pub symptoms: Vec<String>,
    /// Static severity weight, expected in [0, 1]. Not validated.
    pub severity: f64,
    pub next_steps: String,
}

impl ConditionEntry {
    pub fn new(
        name: impl Into<String>,
        symptoms: &[&str],
        severity: f64,
        next_steps: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            severity,
            next_steps: next_steps.into(),
        }
    }

    /// Distinct symptoms, the set the match fraction is computed over.
    pub fn symptom_set(&self) -> BTreeSet<&str> {
        self.symptoms.iter().map(String::as_str).collect()
    }
}

/// Ordered collection of conditions, keyed by unique name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeTable {
    entries: Vec<ConditionEntry>,
}

impl KnowledgeTable {
    pub fn new(entries: Vec<ConditionEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ConditionEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConditionEntry> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ConditionEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a KnowledgeTable {
    type Item = &'a ConditionEntry;
    type IntoIter = std::slice::Iter<'a, ConditionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

static BUILTIN_TABLE: LazyLock<KnowledgeTable> = LazyLock::new(|| {
    KnowledgeTable::new(vec![
        ConditionEntry::new(
            "Psoriasis",
            &["redness", "scaling", "itching", "thick patches"],
            0.9,
            "Use topical steroids, moisturizers, avoid triggers. See dermatologist for chronic cases.",
        ),
        ConditionEntry::new(
            "Eczema",
            &["itching", "dryness", "red patches", "flaking"],
            0.7,
            "Moisturize regularly, use mild soaps, avoid allergens. Consult dermatologist if severe.",
        ),
        ConditionEntry::new(
            "Fungal Infection",
            &["redness", "itching", "ring-shaped rash", "peeling"],
            0.65,
            "Use antifungal creams, keep skin dry. Seek medical care if spreading rapidly.",
        ),
        ConditionEntry::new(
            "Contact Dermatitis",
            &["rash", "redness", "itching", "burning"],
            0.5,
            "Avoid irritants, use soothing creams. Visit doctor if symptoms persist.",
        ),
        ConditionEntry::new(
            "Rosacea",
            &["facial redness", "bumps", "sensitivity", "burning"],
            0.6,
            "Avoid spicy foods/sun exposure, use gentle skin care. Dermatologist may prescribe medication.",
        ),
    ])
});

/// The process-wide built-in condition table.
pub fn builtin_table() -> &'static KnowledgeTable {
    &BUILTIN_TABLE
}
