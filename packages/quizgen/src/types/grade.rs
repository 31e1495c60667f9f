//! Grading types - submissions, results, and session statistics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A user's submitted answers, keyed by question index.
///
/// Ephemeral: consumed entirely by grading and not retained afterward.
/// Indexes without a response are graded as incorrect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSubmission {
    /// Question index to selected option text
    #[serde(default)]
    pub responses: HashMap<usize, String>,
}

impl AnswerSubmission {
    /// Create an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer for a question index.
    pub fn with_response(mut self, index: usize, option: impl Into<String>) -> Self {
        self.responses.insert(index, option.into());
        self
    }
}

/// The outcome of grading a submission against a question set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResult {
    /// Per-question correctness, in item order
    pub per_question: Vec<bool>,

    /// Questions answered correctly
    pub correct_count: usize,

    /// Questions graded
    pub total_count: usize,

    /// Percentage score, rounded to two decimals
    pub score_percent: f64,
}

impl GradeResult {
    /// Band the score into the coarse tiers the dashboard reports.
    pub fn band(&self) -> ScoreBand {
        if self.score_percent >= 100.0 {
            ScoreBand::Perfect
        } else if self.score_percent >= 70.0 {
            ScoreBand::Strong
        } else if self.score_percent >= 40.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::NeedsPractice
        }
    }
}

/// Coarse performance tier for a graded quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    /// Every answer correct
    Perfect,

    /// 70% or better
    Strong,

    /// 40% or better
    Fair,

    /// Below 40%
    NeedsPractice,
}

/// Rolling per-session quiz statistics.
///
/// An explicit value owned by the caller; the pipeline keeps no ambient
/// session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Completed quiz attempts
    pub attempts: u32,

    /// Running mean of score percentages
    pub average_accuracy: f64,
}

impl SessionStats {
    /// Create empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a grade into the running average.
    pub fn record(&mut self, result: &GradeResult) {
        let prev = self.attempts as f64;
        self.average_accuracy =
            (self.average_accuracy * prev + result.score_percent) / (prev + 1.0);
        self.attempts += 1;
    }
}
