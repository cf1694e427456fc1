//! Job-Match Scorer: embedding cosine similarity between a candidate profile
//! and a job description, as a percentage.
//!
//! Independent of the LLM path: the score is computed here, never taken from
//! a model. Degenerate vectors (empty, zero-norm, or mismatched dimensions)
//! are reported as `AppError::Embedding` instead of producing NaN.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::embedding::Embedder;
use crate::errors::AppError;
use crate::resume::models::StructuredProfile;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Cosine similarity × 100, in [-100, 100].
    pub match_score: f64,
}

pub struct JobMatchScorer {
    embedder: Arc<dyn Embedder>,
}

impl JobMatchScorer {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    pub async fn score(
        &self,
        profile: &StructuredProfile,
        job_description: &str,
    ) -> Result<MatchResult, AppError> {
        let profile_vector = self.embedder.embed(&profile_text(profile)).await?;
        let job_vector = self.embedder.embed(job_description).await?;

        let similarity = cosine_similarity(&profile_vector, &job_vector)?;
        let match_score = similarity * 100.0;
        info!("Job match score: {match_score:.2}");
        Ok(MatchResult { match_score })
    }
}

/// Name, skills, experience and resume text, space-separated; absent parts are empty.
pub fn profile_text(profile: &StructuredProfile) -> String {
    let skills = profile
        .skills
        .as_ref()
        .map(|s| s.join(" "))
        .unwrap_or_default();
    [
        profile.full_name.as_deref().unwrap_or(""),
        skills.as_str(),
        profile.experience.as_deref().unwrap_or(""),
        profile.resume_text.as_deref().unwrap_or(""),
    ]
    .join(" ")
    .trim()
    .to_string()
}

/// `dot(a, b) / (|a| * |b|)`, accumulated in f64.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, AppError> {
    if a.is_empty() || b.is_empty() {
        return Err(AppError::Embedding("empty embedding vector".to_string()));
    }
    if a.len() != b.len() {
        return Err(AppError::Embedding(format!(
            "embedding dimensions differ: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return Err(AppError::Embedding(
            "zero-norm embedding vector; similarity is undefined".to_string(),
        ));
    }
    let similarity = dot / denom;
    if !similarity.is_finite() {
        return Err(AppError::Embedding("non-finite similarity".to_string()));
    }
    Ok(similarity)
}
