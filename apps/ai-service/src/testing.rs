//! Deterministic stand-ins for the LLM and embedding backends.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::embedding::Embedder;
use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, LlmBackend, LlmError};

/// Replays a fixed reply and records every request it receives.
pub struct StubLlm {
    reply: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubLlm {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A backend whose every call fails at the transport level.
    pub fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> CompletionRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl LlmBackend for StubLlm {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(LlmError::Api {
                status: 401,
                message: "invalid api key".to_string(),
            }),
        }
    }
}

/// Maps exact input texts to fixed vectors; unknown text is a backend error.
#[derive(Default)]
pub struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    calls: Mutex<Vec<String>>,
}

impl StubEmbedder {
    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Embedder for StubEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AppError> {
        self.calls.lock().unwrap().push(text.to_string());
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| AppError::Embedding(format!("no stub vector for {text:?}")))
    }
}
