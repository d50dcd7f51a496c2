//! skinrank-web — HTTP front end for the SkinRank condition ranker.
//! Provides:
//!   - Symptom form page with ranked condition cards
//!   - JSON ranking API
//!   - Condition table listing

pub mod router;
pub mod handlers;
pub mod state;
