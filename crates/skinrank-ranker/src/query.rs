//! Reported-symptom normalisation.

use serde::Serialize;
use std::collections::BTreeSet;

/// Set of trimmed, lowercased symptom tokens from one submission.
/// Tokens are not checked against any vocabulary; unknown ones just never match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymptomQuery {
    tokens: BTreeSet<String>,
}

impl SymptomQuery {
    /// Parse a comma-separated symptom string.
    /// Empty tokens (e.g. from `"a,,b"` or a trailing comma) are dropped.
    pub fn parse(input: &str) -> Self {
        Self::from_tokens(input.split(','))
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { tokens }
    }

    /// Whether raw input carries nothing to rank. Callers show a prompt instead.
    pub fn is_blank(input: &str) -> bool {
        input.trim().is_empty()
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.tokens.contains(symptom)
    }

    pub fn insert(&mut self, symptom: &str) -> bool {
        let token = symptom.trim().to_lowercase();
        !token.is_empty() && self.tokens.insert(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SymptomQuery {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}
