//! Quiz generation: three multiple-choice questions per skill.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assessment::prompts::{QUIZ_PROMPT, QUIZ_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, json_system_prompt};
use crate::llm_client::{complete_json, CompletionRequest, LlmBackend};

const QUIZ_TEMPERATURE: f32 = 0.7;
const QUIZ_MAX_TOKENS: u32 = 2000;
const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub skill: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
    pub explanation: String,
}

pub struct QuizGenerator {
    llm: Arc<dyn LlmBackend>,
    model: String,
}

impl QuizGenerator {
    pub fn new(llm: Arc<dyn LlmBackend>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    pub async fn generate(&self, skills: &[String]) -> Result<Vec<QuizQuestion>, AppError> {
        let skills: Vec<&str> = skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if skills.is_empty() {
            return Err(AppError::EmptyInput(
                "at least one skill is required".to_string(),
            ));
        }

        let skill_list = skills.join(", ");
        let request = CompletionRequest::new(
            &self.model,
            &json_system_prompt(QUIZ_SYSTEM),
            fill_template(QUIZ_PROMPT, &[("skills", skill_list.as_str())]),
            QUIZ_TEMPERATURE,
            QUIZ_MAX_TOKENS,
        );

        let quiz: Vec<QuizQuestion> = complete_json(self.llm.as_ref(), &request).await?;
        for (i, q) in quiz.iter().enumerate() {
            validate_question(q).map_err(|reason| {
                AppError::MalformedResponse(format!("quiz question {i}: {reason}"))
            })?;
        }

        info!("Generated {} quiz questions for {} skills", quiz.len(), skills.len());
        Ok(quiz)
    }
}

fn validate_question(question: &QuizQuestion) -> Result<(), String> {
    if question.options.len() != OPTIONS_PER_QUESTION {
        return Err(format!(
            "expected {OPTIONS_PER_QUESTION} options, got {}",
            question.options.len()
        ));
    }
    if question.correct_answer >= question.options.len() {
        return Err(format!(
            "correctAnswer {} out of range",
            question.correct_answer
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubLlm;

    fn reply(options: &str, correct: i64) -> String {
        format!(
            r#"[{{
                "skill": "Rust",
                "question": "Which trait enables the ? operator on a custom error conversion?",
                "options": {options},
                "correctAnswer": {correct},
                "explanation": "? calls From::from on the error."
            }}]"#
        )
    }

    const FOUR: &str = r#"["From", "Into", "Display", "Debug"]"#;

    #[tokio::test]
    async fn test_valid_quiz_decodes() {
        let llm = Arc::new(StubLlm::replying(reply(FOUR, 0)));
        let quiz = QuizGenerator::new(llm.clone(), "gpt-4")
            .generate(&["Rust".to_string(), "SQL".to_string()])
            .await
            .unwrap();

        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].options[quiz[0].correct_answer], "From");
        let request = llm.last_request();
        assert_eq!(request.messages[1].content, "Skills: Rust, SQL");
        assert_eq!(request.temperature, QUIZ_TEMPERATURE);
        assert_eq!(request.max_tokens, QUIZ_MAX_TOKENS);
    }

    #[tokio::test]
    async fn test_empty_skills_rejected_without_call() {
        let llm = Arc::new(StubLlm::replying("[]"));
        let err = QuizGenerator::new(llm.clone(), "gpt-4")
            .generate(&[" ".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyInput(_)));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_wrong_option_count_is_malformed() {
        let llm = Arc::new(StubLlm::replying(reply(r#"["A", "B", "C"]"#, 0)));
        let err = QuizGenerator::new(llm, "gpt-4")
            .generate(&["Rust".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_answer_is_malformed() {
        let llm = Arc::new(StubLlm::replying(reply(FOUR, 4)));
        let err = QuizGenerator::new(llm, "gpt-4")
            .generate(&["Rust".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_negative_answer_is_malformed() {
        let llm = Arc::new(StubLlm::replying(reply(FOUR, -1)));
        let err = QuizGenerator::new(llm, "gpt-4")
            .generate(&["Rust".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }
}
