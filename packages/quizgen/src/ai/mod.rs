//! Reference generation-service clients.

pub mod gemini;

pub use gemini::GeminiClient;
