//! Structured Quiz Generation Pipeline
//!
//! A library for turning untrusted generation-service output into
//! schema-valid multiple-choice quizzes, with a fully local fallback.
//!
//! # Design Philosophy
//!
//! **"Never trust the wire"**
//!
//! The generation service is asked for JSON; free text is what comes
//! back. Every stage after the service call assumes hostile input: the
//! extractor digs a JSON value out of prose and markdown fences, the
//! normalizer repairs near-miss items instead of rejecting them, and when
//! nothing salvageable remains a deterministic rule-based generator takes
//! over. The caller always receives a valid, gradable question set -
//! degraded results are labeled, never silent.
//!
//! # Usage
//!
//! ```rust,ignore
//! use quizgen::{generate_quiz, grade, AnswerSubmission};
//! use quizgen::testing::MockGenerator;
//!
//! let quiz = generate_quiz(MockGenerator::new(), source_text, 5).await;
//!
//! let submission = AnswerSubmission::new().with_response(0, &quiz.items[0].options[1]);
//! let result = grade(&quiz, &submission)?;
//! println!("{}%", result.score_percent);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - the generation-service seam ([`TextGenerator`])
//! - [`types`] - quiz, grading, and configuration types
//! - [`pipeline`] - the staged core (source, prompts, extract, normalize,
//!   fallback, grade)
//! - [`testing`] - mock implementations for testing

pub mod error;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "gemini")]
pub mod ai;

// Re-export core types at crate root
pub use error::{GenerateError, GradeError, Result};
pub use traits::TextGenerator;
pub use types::{
    config::QuizConfig,
    grade::{AnswerSubmission, GradeResult, ScoreBand, SessionStats},
    quiz::{Provenance, QuestionItem, QuestionSet, OPTION_COUNT},
};

// Re-export pipeline components
pub use pipeline::{
    extract_json, fallback_quiz, format_quiz_prompt, generate_quiz, grade, normalize_candidates,
    prepare_source, quiz_prompt_hash, QuizEngine, FILLER_OPTION, PLACEHOLDER_OPTION, QUIZ_PROMPT,
};

// Re-export testing utilities
pub use testing::MockGenerator;

#[cfg(feature = "gemini")]
pub use ai::GeminiClient;
