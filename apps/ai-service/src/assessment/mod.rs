// Skill assessment: multiple-choice quiz generation per declared skill.

pub mod handlers;
pub mod prompts;
pub mod quiz;
