//! Resume-to-Job Analyzer: one LLM call comparing a resume with a job description.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, json_system_prompt};
use crate::llm_client::{complete_json, CompletionRequest, LlmBackend};
use crate::matching::prompts::{JOB_ANALYSIS_PROMPT, JOB_ANALYSIS_SYSTEM};

const ANALYSIS_TEMPERATURE: f32 = 0.5;
const ANALYSIS_MAX_TOKENS: u32 = 1000;

/// The model's verdict, taken as-is: the score is not recomputed or clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysis {
    pub match_score: f64,
    #[serde(default)]
    pub matching_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

pub struct JobAnalyzer {
    llm: Arc<dyn LlmBackend>,
    model: String,
}

impl JobAnalyzer {
    pub fn new(llm: Arc<dyn LlmBackend>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    pub async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<JobAnalysis, AppError> {
        let prompt = fill_template(
            JOB_ANALYSIS_PROMPT,
            &[
                ("resume_text", resume_text),
                ("job_description", job_description),
            ],
        );
        let request = CompletionRequest::new(
            &self.model,
            &json_system_prompt(JOB_ANALYSIS_SYSTEM),
            prompt,
            ANALYSIS_TEMPERATURE,
            ANALYSIS_MAX_TOKENS,
        );

        let analysis: JobAnalysis = complete_json(self.llm.as_ref(), &request).await?;
        info!(
            "Job analysis: score={}, {} matching, {} missing",
            analysis.match_score,
            analysis.matching_skills.len(),
            analysis.missing_skills.len()
        );
        Ok(analysis)
    }
}
