//! Resume Summary Generator: a short first-person narrative from a parsed profile.

use std::sync::Arc;

use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{CompletionRequest, LlmBackend};
use crate::resume::models::StructuredProfile;
use crate::resume::prompts::{SUMMARY_PROMPT, SUMMARY_SYSTEM};

const SUMMARY_TEMPERATURE: f32 = 0.7;
const SUMMARY_MAX_TOKENS: u32 = 200;
const MISSING: &str = "N/A";

pub struct SummaryGenerator {
    llm: Arc<dyn LlmBackend>,
    model: String,
}

impl SummaryGenerator {
    pub fn new(llm: Arc<dyn LlmBackend>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    pub async fn summarize(&self, profile: &StructuredProfile) -> Result<String, AppError> {
        let request = CompletionRequest::new(
            &self.model,
            SUMMARY_SYSTEM,
            build_summary_prompt(profile),
            SUMMARY_TEMPERATURE,
            SUMMARY_MAX_TOKENS,
        );
        let text = self.llm.complete(&request).await?;
        Ok(text.trim().to_string())
    }
}

/// Renders the profile into the fixed summary prompt. Every line is always
/// present; absent values become `N/A` so the prompt shape never changes.
fn build_summary_prompt(profile: &StructuredProfile) -> String {
    let skills = profile.skills.as_ref().map(|s| s.join(", "));
    let education = profile.education.as_ref().map(|entries| {
        entries
            .iter()
            .map(|e| {
                format!(
                    "{} from {}",
                    e.degree.as_deref().unwrap_or(MISSING),
                    e.institution.as_deref().unwrap_or(MISSING)
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    });
    let work = profile.work_experience.as_ref().map(|entries| {
        entries
            .iter()
            .map(|w| {
                format!(
                    "{} at {}",
                    w.title.as_deref().unwrap_or(MISSING),
                    w.company.as_deref().unwrap_or(MISSING)
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    });

    fill_template(
        SUMMARY_PROMPT,
        &[
            ("name", or_missing(profile.full_name.as_deref())),
            ("experience", or_missing(profile.experience.as_deref())),
            ("skills", or_missing(skills.as_deref())),
            ("education", or_missing(education.as_deref())),
            ("work_experience", or_missing(work.as_deref())),
        ],
    )
}

fn or_missing(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => MISSING,
    }
}
