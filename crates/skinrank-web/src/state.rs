//! Shared application state for the web server.

use std::sync::Arc;
use skinrank_ranker::{builtin_table, KnowledgeTable};

/// Shared state injected into every Axum handler.
/// The condition table is read-only; requests never coordinate.
#[derive(Debug, Clone)]
pub struct AppState {
    pub table: Arc<KnowledgeTable>,
}

impl AppState {
    pub fn new(table: KnowledgeTable) -> Self {
        Self { table: Arc::new(table) }
    }

    /// State backed by the compiled-in condition table.
    pub fn builtin() -> Self {
        Self::new(builtin_table().clone())
    }
}

pub type SharedState = Arc<AppState>;
