// Resume pipeline: structured parsing, skill suggestions and summaries.
// All LLM calls go through llm_client::LlmBackend.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod skills;
pub mod summary;
