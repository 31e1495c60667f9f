//! The staged generation pipeline.
//!
//! Stages run strictly in order, each depending only on the previous
//! stage's output:
//!
//! 1. [`source`] - bound input size at paragraph boundaries
//! 2. [`prompts`] - compose the generation instruction
//! 3. the [`TextGenerator`](crate::traits::TextGenerator) call - the one
//!    suspension point
//! 4. [`extract`] - locate a JSON value in the free-form reply
//! 5. [`normalize`] - repair the decoded value into valid items
//! 6. [`fallback`] - local rule-based generation when 3-5 fail
//! 7. [`grade`] - score a submission against the produced set

pub mod engine;
pub mod extract;
pub mod fallback;
pub mod grade;
pub mod normalize;
pub mod prompts;
pub mod source;

pub use engine::{generate_quiz, QuizEngine};
pub use extract::extract_json;
pub use fallback::{fallback_quiz, PLACEHOLDER_OPTION};
pub use grade::grade;
pub use normalize::{normalize_candidates, FILLER_OPTION};
pub use prompts::{format_quiz_prompt, quiz_prompt_hash, QUIZ_PROMPT};
pub use source::prepare_source;
