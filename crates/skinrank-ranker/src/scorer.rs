//! Condition scoring and ranking.
//!
//! Every condition in the table is scored independently with
//! [`heuristic`](crate::weights::heuristic) and the full list is sorted by
//! descending score. Nothing is filtered out: the output always has one
//! result per table entry.

use crate::knowledge::{builtin_table, ConditionEntry, KnowledgeTable};
use crate::query::SymptomQuery;
use crate::weights::{heuristic, match_fraction};

/// One condition paired with its score for a given query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult<'a> {
    pub entry: &'a ConditionEntry,
    pub score: f64,
    pub match_count: usize,
}

impl<'a> ScoredResult<'a> {
    pub fn name(&self) -> &'a str {
        &self.entry.name
    }

    pub fn match_fraction(&self) -> f64 {
        match_fraction(self.match_count, self.entry.symptom_set().len())
    }

    /// Score as a rounded percentage, `round(score * 100)`.
    /// Halves round to the even neighbour, so 44.5 shows as 44.
    pub fn percent(&self) -> i64 {
        (self.score * 100.0).round_ties_even() as i64
    }
}

/// Score a single condition against the query.
pub fn score_entry<'a>(query: &SymptomQuery, entry: &'a ConditionEntry) -> ScoredResult<'a> {
    let symptoms = entry.symptom_set();
    let match_count = symptoms.iter().filter(|s| query.contains(s)).count();
    let score = heuristic(match_count, symptoms.len(), entry.severity);

    ScoredResult { entry, score, match_count }
}

/// Rank every condition in `table` by descending score.
///
/// Equal scores are ordered by ascending condition name, so the output is
/// fully deterministic for a given query and table.
pub fn rank<'a>(query: &SymptomQuery, table: &'a KnowledgeTable) -> Vec<ScoredResult<'a>> {
    let mut results: Vec<ScoredResult<'a>> =
        table.iter().map(|entry| score_entry(query, entry)).collect();

    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.entry.name.cmp(&b.entry.name))
    });

    if let Some(top) = results.first() {
        tracing::debug!(
            query_size = query.len(),
            conditions = results.len(),
            top = top.name(),
            top_score = top.score,
            "ranked conditions"
        );
    }

    results
}

/// Rank against the built-in condition table.
pub fn rank_builtin(query: &SymptomQuery) -> Vec<ScoredResult<'static>> {
    rank(query, builtin_table())
}
