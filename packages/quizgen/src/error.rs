//! Typed errors for the quiz pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the failure stage.

use thiserror::Error;

/// Errors that can occur while generating a quiz.
///
/// Every variant except `Config` is absorbed inside the engine: a failed
/// generation falls through to the local fallback generator instead of
/// surfacing to the caller.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Generation service unreachable, errored, or returned nothing
    #[error("generation service error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No decodable JSON value found in the service reply
    #[error("no JSON value found in response")]
    Extraction,

    /// Decoded JSON held zero salvageable question items
    #[error("no valid question items after normalization")]
    Validation,

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Client misconfiguration (e.g. missing API key)
    #[error("config error: {0}")]
    Config(String),
}

/// Errors that can occur while grading a submission.
#[derive(Debug, Error)]
pub enum GradeError {
    /// Grading an empty question set is a caller contract violation
    #[error("cannot grade an empty question set")]
    EmptyQuestionSet,
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
