//! Structured Resume Parser: resume text in, `StructuredProfile` out.

use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::json_system_prompt;
use crate::llm_client::{complete_json, CompletionRequest, LlmBackend};
use crate::resume::models::StructuredProfile;
use crate::resume::prompts::RESUME_PARSE_SYSTEM;

const PARSE_TEMPERATURE: f32 = 0.3;
const PARSE_MAX_TOKENS: u32 = 1500;

pub struct ResumeParser {
    llm: Arc<dyn LlmBackend>,
    model: String,
}

impl ResumeParser {
    pub fn new(llm: Arc<dyn LlmBackend>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    /// Extracts a structured profile. The returned profile always carries the
    /// input text as `resume_text`; a non-JSON reply is an error, never an
    /// empty profile.
    pub async fn parse(&self, text: &str) -> Result<StructuredProfile, AppError> {
        let request = CompletionRequest::new(
            &self.model,
            &json_system_prompt(RESUME_PARSE_SYSTEM),
            text,
            PARSE_TEMPERATURE,
            PARSE_MAX_TOKENS,
        );

        let mut profile: StructuredProfile = complete_json(self.llm.as_ref(), &request).await?;
        profile.resume_text = Some(text.to_string());

        info!(
            "Parsed resume: {} skills, {} education entries, {} work entries",
            profile.skills.as_ref().map_or(0, Vec::len),
            profile.education.as_ref().map_or(0, Vec::len),
            profile.work_experience.as_ref().map_or(0, Vec::len),
        );
        Ok(profile)
    }
}
