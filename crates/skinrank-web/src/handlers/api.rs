//! Ranking API — scores the condition table against reported symptoms.

use axum::{
    extract::State,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use crate::state::SharedState;
use skinrank_common::error::ApiError;
use skinrank_ranker::{rank, ConditionEntry, ScoredResult, SymptomQuery};

/// Symptoms as a comma-separated string or as a pre-split list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SymptomInput {
    Text(String),
    List(Vec<String>),
}

impl SymptomInput {
    pub fn is_blank(&self) -> bool {
        match self {
            SymptomInput::Text(text) => SymptomQuery::is_blank(text),
            SymptomInput::List(items) => items.iter().all(|s| SymptomQuery::is_blank(s)),
        }
    }

    pub fn to_query(&self) -> SymptomQuery {
        match self {
            SymptomInput::Text(text) => SymptomQuery::parse(text),
            SymptomInput::List(items) => SymptomQuery::from_tokens(items),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub symptoms: SymptomInput,
}

#[derive(Debug, Serialize)]
pub struct RankedCondition {
    pub rank: usize,
    pub condition: String,
    pub score: f64,
    pub percent: i64,
    pub match_count: usize,
    pub symptoms: Vec<String>,
    pub next_steps: String,
}

impl RankedCondition {
    pub fn from_result(rank: usize, result: &ScoredResult<'_>) -> Self {
        Self {
            rank,
            condition: result.name().to_string(),
            score: result.score,
            percent: result.percent(),
            match_count: result.match_count,
            symptoms: result.entry.symptoms.clone(),
            next_steps: result.entry.next_steps.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub query: SymptomQuery,
    pub results: Vec<RankedCondition>,
}

/// POST /api/rank — Rank all conditions for the submitted symptoms
pub async fn api_rank(
    State(state): State<SharedState>,
    Json(req): Json<RankRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.symptoms.is_blank() {
        tracing::warn!("rejected ranking request with no symptoms");
        return Err(ApiError::BadRequest(
            "Enter at least one symptom, separated by commas".to_string(),
        ));
    }

    let query = req.symptoms.to_query();
    let results = rank(&query, &state.table)
        .iter()
        .enumerate()
        .map(|(i, r)| RankedCondition::from_result(i + 1, r))
        .collect();

    Ok(Json(RankResponse { query, results }))
}

/// GET /api/conditions — The condition table the ranker scores against
pub async fn api_conditions(State(state): State<SharedState>) -> Json<Vec<ConditionEntry>> {
    Json(state.table.entries().to_vec())
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
