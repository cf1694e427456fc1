//! Skill Suggestion Engine: asks the LLM for skills the candidate lacks and
//! ranks them with a fixed confidence ladder.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, json_system_prompt};
use crate::llm_client::{complete_json, CompletionRequest, LlmBackend};
use crate::resume::models::SkillSuggestion;
use crate::resume::prompts::{SKILL_SUGGEST_PROMPT, SKILL_SUGGEST_SYSTEM};

const SUGGEST_TEMPERATURE: f32 = 0.5;
const SUGGEST_MAX_TOKENS: u32 = 500;

const TOP_CONFIDENCE: f64 = 0.9;
const CONFIDENCE_STEP: f64 = 0.05;
const MIN_CONFIDENCE: f64 = 0.5;

/// Confidence of the suggestion at 0-based `rank`: 0.9, 0.85, 0.8, ... floored at 0.5.
pub fn confidence_for_rank(rank: usize) -> f64 {
    (TOP_CONFIDENCE - CONFIDENCE_STEP * rank as f64).max(MIN_CONFIDENCE)
}

pub struct SkillSuggester {
    llm: Arc<dyn LlmBackend>,
    model: String,
}

impl SkillSuggester {
    pub fn new(llm: Arc<dyn LlmBackend>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    /// Suggests skills absent from `current_skills`.
    ///
    /// Precondition: `resume_text` is non-empty. Empty text fails with
    /// `EmptyInput` before the backend is called.
    pub async fn suggest(
        &self,
        resume_text: &str,
        current_skills: &[String],
    ) -> Result<SkillSuggestion, AppError> {
        if resume_text.trim().is_empty() {
            return Err(AppError::EmptyInput("resume text is required".to_string()));
        }

        let current = current_skills.join(", ");
        let prompt = fill_template(
            SKILL_SUGGEST_PROMPT,
            &[
                ("resume_text", resume_text),
                ("current_skills", current.as_str()),
            ],
        );
        let request = CompletionRequest::new(
            &self.model,
            &json_system_prompt(SKILL_SUGGEST_SYSTEM),
            prompt,
            SUGGEST_TEMPERATURE,
            SUGGEST_MAX_TOKENS,
        );

        let suggested: Vec<String> = complete_json(self.llm.as_ref(), &request).await?;
        let skills = exclude_current(suggested, current_skills);
        let confidence = (0..skills.len()).map(confidence_for_rank).collect();

        info!("Suggested {} new skills", skills.len());
        Ok(SkillSuggestion { skills, confidence })
    }
}

/// Drops blanks and anything matching a current skill (trimmed, case-insensitive),
/// keeping the model's order for the rest.
fn exclude_current(suggested: Vec<String>, current_skills: &[String]) -> Vec<String> {
    let current: HashSet<String> = current_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let before = suggested.len();
    let kept: Vec<String> = suggested
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && !current.contains(&s.to_lowercase()))
        .collect();

    if kept.len() < before {
        warn!(
            "Dropped {} suggestions that were blank or already held",
            before - kept.len()
        );
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubLlm;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn json_array(count: usize) -> String {
        let items: Vec<String> = (0..count).map(|i| format!("\"Skill{i}\"")).collect();
        format!("[{}]", items.join(","))
    }

    async fn suggest_n(count: usize) -> SkillSuggestion {
        let llm = Arc::new(StubLlm::replying(json_array(count)));
        SkillSuggester::new(llm, "gpt-4")
            .suggest("Backend developer", &[])
            .await
            .unwrap()
    }

    fn assert_ladder(result: &SkillSuggestion) {
        assert_eq!(result.skills.len(), result.confidence.len());
        for (i, c) in result.confidence.iter().enumerate() {
            assert_eq!(*c, (0.9 - 0.05 * i as f64).max(0.5), "index {i}");
            assert!((0.5..=0.9).contains(c));
        }
        assert!(result.confidence.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_example_three_suggestions() {
        let llm = Arc::new(StubLlm::replying(r#"["Docker","Kubernetes","AWS"]"#));
        let result = SkillSuggester::new(llm, "gpt-4")
            .suggest("Python developer", &skills(&["Python", "SQL"]))
            .await
            .unwrap();

        assert_eq!(result.skills, skills(&["Docker", "Kubernetes", "AWS"]));
        let expected = [0.9, 0.85, 0.8];
        for (got, want) in result.confidence.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        }
    }

    #[tokio::test]
    async fn test_single_suggestion_gets_top_confidence() {
        let result = suggest_n(1).await;
        assert_eq!(result.confidence, vec![0.9]);
        assert_ladder(&result);
    }

    #[tokio::test]
    async fn test_nine_suggestions_saturate_at_floor() {
        let result = suggest_n(9).await;
        assert_eq!(result.skills.len(), 9);
        assert_eq!(result.confidence[8], 0.5);
        assert_ladder(&result);
    }

    #[tokio::test]
    async fn test_twenty_suggestions_stay_at_floor() {
        let result = suggest_n(20).await;
        assert_eq!(result.skills.len(), 20);
        assert!(result.confidence[8..].iter().all(|c| *c == 0.5));
        assert_ladder(&result);
    }

    #[tokio::test]
    async fn test_current_skills_never_returned() {
        let llm = Arc::new(StubLlm::replying(r#"["Docker","python"," SQL ","Terraform",""]"#));
        let current = skills(&["Python", "SQL"]);
        let result = SkillSuggester::new(llm, "gpt-4")
            .suggest("Python developer", &current)
            .await
            .unwrap();

        assert_eq!(result.skills, skills(&["Docker", "Terraform"]));
        assert_eq!(result.confidence.len(), 2);
        assert!(result.skills.iter().all(|s| !current.contains(s)));
    }

    #[tokio::test]
    async fn test_empty_resume_text_makes_no_backend_call() {
        let llm = Arc::new(StubLlm::replying("[]"));
        let err = SkillSuggester::new(llm.clone(), "gpt-4")
            .suggest("", &skills(&["Python"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::EmptyInput(_)));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_object_reply_is_malformed() {
        let llm = Arc::new(StubLlm::replying(r#"{"skills": ["Docker"]}"#));
        let err = SkillSuggester::new(llm, "gpt-4")
            .suggest("Python developer", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_prompt_lists_current_skills() {
        let llm = Arc::new(StubLlm::replying("[]"));
        SkillSuggester::new(llm.clone(), "gpt-4")
            .suggest("Data engineer at Acme", &skills(&["Python", "SQL"]))
            .await
            .unwrap();

        let request = llm.last_request();
        assert_eq!(request.temperature, SUGGEST_TEMPERATURE);
        assert_eq!(request.max_tokens, SUGGEST_MAX_TOKENS);
        assert_eq!(
            request.messages[1].content,
            "Resume text: Data engineer at Acme\n\nCurrent skills: Python, SQL"
        );
    }

    #[tokio::test]
    async fn test_braces_in_resume_text_reach_the_model_unchanged() {
        let llm = Arc::new(StubLlm::replying("[]"));
        SkillSuggester::new(llm.clone(), "gpt-4")
            .suggest(
                "Templates like {current_skills} in Jinja",
                &skills(&["Python", "SQL"]),
            )
            .await
            .unwrap();

        assert_eq!(
            llm.last_request().messages[1].content,
            "Resume text: Templates like {current_skills} in Jinja\n\nCurrent skills: Python, SQL"
        );
    }

    #[test]
    fn test_confidence_for_rank_values() {
        assert_eq!(confidence_for_rank(0), 0.9);
        assert_eq!(confidence_for_rank(8), 0.5);
        assert_eq!(confidence_for_rank(100), 0.5);
    }
}
