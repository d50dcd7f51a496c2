//! skinrank-ranker — Symptom scoring and ranking engine.
//!
//! Scores every condition in a knowledge table against a set of reported
//! symptoms and returns all of them ordered by descending score. This is a
//! single score-and-sort pass; there is no search involved.

pub mod knowledge;
pub mod query;
pub mod scorer;
pub mod weights;

pub use knowledge::{builtin_table, ConditionEntry, KnowledgeTable};
pub use query::SymptomQuery;
pub use scorer::{rank, rank_builtin, ScoredResult};
pub use weights::{heuristic, ScoreWeights, HEURISTIC_WEIGHTS};
