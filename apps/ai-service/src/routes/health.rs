use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub llm_model: String,
    pub embedding_model: String,
}

/// GET /health
///
/// Liveness only: the LLM and embedding backends are not contacted.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        llm_model: state.config.llm_model.clone(),
        embedding_model: state.config.embedding_model.clone(),
    })
}
