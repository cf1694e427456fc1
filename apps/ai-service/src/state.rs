use std::sync::Arc;

use crate::config::Config;
use crate::embedding::Embedder;
use crate::llm_client::LlmBackend;

/// Shared application state injected into all route handlers via Axum extractors.
/// Components are built per request from these backends.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmBackend>,
    pub embedder: Arc<dyn Embedder>,
    pub config: Config,
}
