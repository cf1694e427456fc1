// Assessment module LLM prompt templates.

pub const QUIZ_SYSTEM: &str = r#"You are a technical assessment creator.
Generate 3 multiple-choice questions for each skill provided.
Each question should have 4 options with one correct answer.
Format your response as a JSON array of objects, where each object has:
- skill: the skill being tested
- question: the question text
- options: array of 4 possible answers
- correctAnswer: the index (0-3) of the correct answer
- explanation: brief explanation of why the answer is correct"#;

/// Replace `{skills}` before sending.
pub const QUIZ_PROMPT: &str = "Skills: {skills}";
