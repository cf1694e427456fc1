//! Axum route handlers for the Resume API.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::extraction::{extract, RawDocument};
use crate::resume::models::{SkillSuggestion, StructuredProfile};
use crate::resume::parser::ResumeParser;
use crate::resume::skills::SkillSuggester;
use crate::resume::summary::SummaryGenerator;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

struct Upload {
    file_name: String,
    bytes: Bytes,
}

/// POST /api/v1/resumes/parse
///
/// Multipart upload with a `file` field (.pdf or .docx). Returns the parsed
/// profile with `resumeText` holding the extracted text.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<StructuredProfile>, AppError> {
    let upload = read_upload(&mut multipart).await?;
    let document = RawDocument::from_upload(&upload.file_name, upload.bytes);

    let text = tokio::task::spawn_blocking(move || extract(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow!("extraction task failed: {e}")))??;

    let profile = ResumeParser::new(state.llm.clone(), &state.config.llm_model)
        .parse(&text)
        .await?;
    Ok(Json(profile))
}

/// POST /api/v1/resumes/suggest-skills
///
/// Uses `resumeText` and `skills` from the posted profile.
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(profile): Json<StructuredProfile>,
) -> Result<Json<SkillSuggestion>, AppError> {
    let resume_text = profile
        .resume_text
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::EmptyInput("resumeText is required".to_string()))?;
    let current_skills = profile.skills.clone().unwrap_or_default();

    let suggestion = SkillSuggester::new(state.llm.clone(), &state.config.llm_model)
        .suggest(resume_text, &current_skills)
        .await?;
    Ok(Json(suggestion))
}

/// POST /api/v1/resumes/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(profile): Json<StructuredProfile>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = SummaryGenerator::new(state.llm.clone(), &state.config.llm_model)
        .summarize(&profile)
        .await?;
    Ok(Json(SummaryResponse { summary }))
}

async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("file field has no file name".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        return Ok(Upload { file_name, bytes });
    }
    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}
