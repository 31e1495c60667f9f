//! The quiz engine - orchestrates the staged pipeline.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::error::Result;
use crate::pipeline::extract::extract_json;
use crate::pipeline::fallback::fallback_quiz;
use crate::pipeline::normalize::normalize_candidates;
use crate::pipeline::prompts::format_quiz_prompt;
use crate::pipeline::source::prepare_source;
use crate::traits::TextGenerator;
use crate::types::config::QuizConfig;
use crate::types::quiz::{Provenance, QuestionItem, QuestionSet};

/// Orchestrates generation: prompt the service, extract and normalize its
/// reply, and hand over to the local fallback when any stage fails.
///
/// Owns no state beyond its collaborator and configuration; every call
/// takes source text in and returns a fresh set.
///
/// # Example
///
/// ```rust,ignore
/// use quizgen::{grade, AnswerSubmission, QuizEngine};
/// use quizgen::testing::MockGenerator;
///
/// let engine = QuizEngine::new(MockGenerator::new());
/// let quiz = engine.generate("source text").await;
/// let result = grade(&quiz, &AnswerSubmission::new())?;
/// ```
pub struct QuizEngine<G: TextGenerator> {
    generator: G,
    config: QuizConfig,
}

impl<G: TextGenerator> QuizEngine<G> {
    /// Create an engine with default configuration.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            config: QuizConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(generator: G, config: QuizConfig) -> Self {
        Self { generator, config }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Generate a quiz from source text.
    ///
    /// Infallible: every service or parse failure is absorbed by the
    /// local fallback, and an unusable source yields the labeled
    /// placeholder set.
    pub async fn generate(&self, text: &str) -> QuestionSet {
        let mut rng = StdRng::from_entropy();
        self.generate_with_rng(text, &mut rng).await
    }

    /// Generate with an injected random source, for deterministic tests.
    pub async fn generate_with_rng<R: Rng>(&self, text: &str, rng: &mut R) -> QuestionSet {
        // A zero-question quiz cannot be graded; request at least one.
        let requested = self.config.question_count.max(1);

        match self.try_service(text, requested).await {
            Ok(items) => {
                debug!(count = items.len(), "generation service produced a valid set");
                QuestionSet::new(items, QuestionSet::digest(text), Provenance::Service)
            }
            Err(err) => {
                warn!(error = %err, "generation failed; using local fallback");
                fallback_quiz(text, requested, &self.config, rng)
            }
        }
    }

    async fn try_service(&self, text: &str, requested: usize) -> Result<Vec<QuestionItem>> {
        let source = prepare_source(text, self.config.max_source_chars);
        let prompt = format_quiz_prompt(&source, requested);
        let reply = self.generator.generate(&prompt).await?;
        let value = extract_json(&reply)?;
        normalize_candidates(&value, requested)
    }
}

/// Generate a quiz with the default configuration, requesting
/// `requested_count` questions.
///
/// Convenience wrapper over [`QuizEngine`] for one-shot callers.
pub async fn generate_quiz<G: TextGenerator>(
    generator: G,
    text: &str,
    requested_count: usize,
) -> QuestionSet {
    let config = QuizConfig::default().with_question_count(requested_count);
    QuizEngine::with_config(generator, config).generate(text).await
}
