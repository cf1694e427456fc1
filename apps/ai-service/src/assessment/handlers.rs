//! Axum route handlers for the Assessment API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assessment::quiz::{QuizGenerator, QuizQuestion};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub quiz: Vec<QuizQuestion>,
}

/// POST /api/v1/assessment/quiz
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let quiz = QuizGenerator::new(state.llm.clone(), &state.config.llm_model)
        .generate(&request.skills)
        .await?;
    Ok(Json(QuizResponse { quiz }))
}
