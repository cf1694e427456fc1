//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::analyzer::{JobAnalysis, JobAnalyzer};
use crate::matching::scorer::{JobMatchScorer, MatchResult};
use crate::resume::models::StructuredProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScoreRequest {
    pub profile: StructuredProfile,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysisRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// POST /api/v1/matching/score
///
/// Embedding-based similarity between the profile and the job description.
pub async fn handle_match_score(
    State(state): State<AppState>,
    Json(request): Json<MatchScoreRequest>,
) -> Result<Json<MatchResult>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::EmptyInput(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let result = JobMatchScorer::new(state.embedder.clone())
        .score(&request.profile, &request.job_description)
        .await?;
    Ok(Json(result))
}

/// POST /api/v1/matching/analyze
///
/// LLM comparison of a resume with a job description.
pub async fn handle_job_analysis(
    State(state): State<AppState>,
    Json(request): Json<JobAnalysisRequest>,
) -> Result<Json<JobAnalysis>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::EmptyInput("resumeText cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::EmptyInput(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let analysis = JobAnalyzer::new(state.llm.clone(), &state.config.llm_model)
        .analyze(&request.resume_text, &request.job_description)
        .await?;
    Ok(Json(analysis))
}
