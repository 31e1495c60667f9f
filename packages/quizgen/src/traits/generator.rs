//! Generation service seam.
//!
//! The pipeline never assumes the service honors an output schema; it only
//! requires prompt-in/text-out. Implementations wrap specific providers
//! (Gemini, OpenAI, etc.) and surface every failure mode as a `Transport`
//! error.

use async_trait::async_trait;

use crate::error::Result;

/// Prompt-in/text-out boundary to the hosted generation service.
///
/// This is the single suspension point in the pipeline. Timeouts,
/// transport failures, non-2xx responses, and empty replies all map to
/// `GenerateError::Transport`; the engine treats them exactly like a
/// parse failure and moves on to the local fallback.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the raw text reply.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
