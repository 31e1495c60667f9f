//! Data types for quizzes, grading, and configuration.

pub mod config;
pub mod grade;
pub mod quiz;

pub use config::QuizConfig;
pub use grade::{AnswerSubmission, GradeResult, ScoreBand, SessionStats};
pub use quiz::{Provenance, QuestionItem, QuestionSet, OPTION_COUNT};
