//! Configuration for the generation pipeline.

use serde::{Deserialize, Serialize};

/// Configuration for quiz generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Maximum source characters forwarded to the generation service.
    ///
    /// Longer input is cut at paragraph boundaries, never mid-paragraph
    /// unless the text has no boundaries at all. Default: 8000.
    pub max_source_chars: usize,

    /// Number of questions to request. Default: 5.
    pub question_count: usize,

    /// Sentences shorter than this are noise and never become fallback
    /// questions. Default: 25.
    pub min_sentence_chars: usize,

    /// Size of the frequency-ranked keyword pool used by the fallback
    /// generator. Default: 50.
    pub keyword_pool_size: usize,

    /// Minimum length of a keyword token. Default: 4.
    pub min_keyword_len: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_source_chars: 8000,
            question_count: 5,
            min_sentence_chars: 25,
            keyword_pool_size: 50,
            min_keyword_len: 4,
        }
    }
}

impl QuizConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source size budget.
    pub fn with_max_source_chars(mut self, max: usize) -> Self {
        self.max_source_chars = max;
        self
    }

    /// Set the number of questions to request.
    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count;
        self
    }

    /// Set the minimum sentence length for the fallback generator.
    pub fn with_min_sentence_chars(mut self, min: usize) -> Self {
        self.min_sentence_chars = min;
        self
    }

    /// Set the keyword pool size for the fallback generator.
    pub fn with_keyword_pool_size(mut self, size: usize) -> Self {
        self.keyword_pool_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = QuizConfig::new()
            .with_max_source_chars(4000)
            .with_question_count(3)
            .with_min_sentence_chars(10)
            .with_keyword_pool_size(20);

        assert_eq!(config.max_source_chars, 4000);
        assert_eq!(config.question_count, 3);
        assert_eq!(config.min_sentence_chars, 10);
        assert_eq!(config.keyword_pool_size, 20);
        assert_eq!(config.min_keyword_len, 4);
    }
}
