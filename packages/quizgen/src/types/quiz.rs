//! Quiz types - the validated output of the generation pipeline.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of options every question carries.
pub const OPTION_COUNT: usize = 4;

/// A single multiple-choice question.
///
/// Field names are the on-wire contract: `{"question", "options",
/// "answer"}`. A well-formed item has exactly [`OPTION_COUNT`] pairwise
/// distinct options (case-insensitive) and an answer byte-identical to one
/// of them. Items that cannot be repaired to this shape are dropped during
/// normalization and never reach grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionItem {
    /// The question stem
    pub question: String,

    /// Display-ordered options; order carries no meaning beyond stable rendering
    pub options: Vec<String>,

    /// The correct option, byte-identical to one member of `options`
    pub answer: String,

    /// Set when a repair policy, not a clean match, chose the answer.
    ///
    /// Not part of the wire contract.
    #[serde(skip)]
    pub degraded: bool,
}

impl QuestionItem {
    /// Create a new item.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            answer: answer.into(),
            degraded: false,
        }
    }

    /// Mark the item as produced by a repair policy.
    pub fn degraded(mut self) -> Self {
        self.degraded = true;
        self
    }

    /// Check the structural invariant: exactly [`OPTION_COUNT`] pairwise
    /// distinct options, one of which is the answer.
    pub fn is_well_formed(&self) -> bool {
        if self.options.len() != OPTION_COUNT {
            return false;
        }
        for (i, a) in self.options.iter().enumerate() {
            for b in &self.options[i + 1..] {
                if a.to_lowercase() == b.to_lowercase() {
                    return false;
                }
            }
        }
        self.options.iter().any(|o| o == &self.answer)
    }
}

/// Which pipeline path produced a quiz.
///
/// Callers use this to label degraded results; a `Placeholder` set means
/// the source text could not support real questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// Generation service output survived extraction and normalization
    Service,

    /// Local rule-based generator
    Fallback,

    /// Terminal explanatory placeholder
    Placeholder,
}

/// The validated output of the generation pipeline.
///
/// Created once per request, owned by the calling session, never mutated
/// in place. A regenerate request produces a new set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Validated items, at most the requested count
    pub items: Vec<QuestionItem>,

    /// SHA-256 digest of the source text.
    ///
    /// For idempotence checks across regenerate requests; not persisted.
    pub source_digest: String,

    /// Which pipeline path produced this set
    pub provenance: Provenance,
}

impl QuestionSet {
    /// Create a new question set.
    pub fn new(items: Vec<QuestionItem>, source_digest: impl Into<String>, provenance: Provenance) -> Self {
        Self {
            items,
            source_digest: source_digest.into(),
            provenance,
        }
    }

    /// Hash source text into a digest.
    pub fn digest(text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Number of items in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when this set did not come cleanly from the generation service.
    pub fn is_degraded(&self) -> bool {
        self.provenance != Provenance::Service || self.items.iter().any(|i| i.degraded)
    }
}
