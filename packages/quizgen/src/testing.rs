//! Testing utilities including mock implementations.
//!
//! Useful for exercising the pipeline, or applications built on it,
//! without making real generation-service calls.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{GenerateError, Result};
use crate::traits::TextGenerator;

/// Reply used when no canned reply is configured: one minimal valid item.
const DEFAULT_REPLY: &str = r#"[{"question": "Which planet is known as the red planet?", "options": ["Mars", "Venus", "Jupiter", "Saturn"], "answer": "Mars"}]"#;

/// A mock generation service for testing.
///
/// Returns a configurable canned reply and records every prompt received.
/// Clones share their state, so a kept clone can inspect calls after the
/// original moves into an engine.
#[derive(Clone, Default)]
pub struct MockGenerator {
    /// Canned reply; `None` falls back to a minimal valid quiz
    reply: Arc<RwLock<Option<String>>>,

    /// When set, every call fails with a transport error
    fail: Arc<RwLock<bool>>,

    /// Prompts received, for assertions
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockGenerator {
    /// Create a mock that replies with a minimal valid quiz.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canned reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        *self.reply.write().unwrap() = Some(reply.into());
        self
    }

    /// Make every call fail with a transport error.
    pub fn failing(self) -> Self {
        *self.fail.write().unwrap() = true;
        self
    }

    /// Get all prompts received.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Clear recorded prompts.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.write().unwrap().push(prompt.to_string());

        if *self.fail.read().unwrap() {
            return Err(GenerateError::Transport("mock transport failure".into()));
        }

        Ok(self
            .reply
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| DEFAULT_REPLY.to_string()))
    }
}
