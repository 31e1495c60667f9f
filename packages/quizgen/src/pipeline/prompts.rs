//! Generation prompts for the quiz pipeline.
//!
//! The schema embedded in the template is the same wire contract the
//! normalizer accepts. The service is asked for strict JSON, but nothing
//! downstream relies on that being honored.

use sha2::{Digest, Sha256};

/// Prompt for multiple-choice quiz generation.
pub const QUIZ_PROMPT: &str = r#"You are an expert quiz generator.

Create {count} high-quality multiple-choice questions from the following study material:

---CONTENT START---
{content}
---CONTENT END---

Rules:
- Each question must be clear and based only on the provided text.
- Each question must have exactly 1 correct answer and 3 wrong options.
- Output strictly as a JSON list with no commentary:
  [
    {
      "question": "text",
      "options": ["A", "B", "C", "D"],
      "answer": "correct option"
    }
  ]"#;

/// Format the quiz prompt with source content and question count.
pub fn format_quiz_prompt(content: &str, count: usize) -> String {
    QUIZ_PROMPT
        .replace("{count}", &count.to_string())
        .replace("{content}", content)
}

/// Generate a hash of the quiz prompt for cache invalidation.
///
/// A persistence layer storing generated sets can detect prompt drift by
/// comparing hashes.
pub fn quiz_prompt_hash() -> String {
    let mut hasher = Sha256::new();
    hasher.update(QUIZ_PROMPT.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inserts_content_and_count() {
        let prompt = format_quiz_prompt("Photosynthesis converts light to energy.", 3);
        assert!(prompt.contains("Create 3 high-quality"));
        assert!(prompt.contains("Photosynthesis converts light to energy."));
        assert!(!prompt.contains("{count}"));
        assert!(!prompt.contains("{content}"));
    }

    #[test]
    fn test_prompt_hash_is_stable() {
        let a = quiz_prompt_hash();
        let b = quiz_prompt_hash();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }
}
