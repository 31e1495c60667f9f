//! Local fallback generation - deterministic, non-network quiz
//! construction.
//!
//! Used whenever the generation service fails or its output cannot be
//! repaired. Builds cloze (fill-in-the-blank) questions by masking
//! high-frequency keywords in sentences drawn from the source text.
//! Randomness comes from an injected source so tests can fix the seed.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use tracing::debug;

use crate::types::config::QuizConfig;
use crate::types::quiz::{Provenance, QuestionItem, QuestionSet, OPTION_COUNT};

/// Option text of the terminal placeholder item.
pub const PLACEHOLDER_OPTION: &str = "N/A";

/// Blank marker substituted for the masked keyword.
const BLANK: &str = "______";

/// Words too common to make useful answers.
///
/// Only words that survive the length filter need listing.
const STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "also", "because", "been", "before",
    "being", "below", "between", "both", "cannot", "could", "does", "doing",
    "down", "during", "each", "from", "further", "have", "having", "here",
    "into", "itself", "just", "more", "most", "once", "only", "other",
    "over", "same", "should", "some", "such", "than", "that", "their",
    "them", "then", "there", "these", "they", "this", "those", "through",
    "under", "until", "very", "were", "what", "when", "where", "which",
    "while", "will", "with", "would", "your",
];

/// Generate a quiz locally from source text.
///
/// Never fails: when the text has no usable sentences or no keyword pool,
/// or when no sentence yields a valid item, the result is a single
/// explanatory placeholder item rather than an empty set.
pub fn fallback_quiz<R: Rng>(
    text: &str,
    requested_count: usize,
    config: &QuizConfig,
    rng: &mut R,
) -> QuestionSet {
    let digest = QuestionSet::digest(text);

    let mut sentences = usable_sentences(text, config.min_sentence_chars);
    let pool = keyword_pool(text, config);

    if sentences.is_empty() || pool.is_empty() {
        debug!("source text too thin for fallback generation");
        return placeholder_set(digest);
    }

    let mut items = Vec::new();
    while items.len() < requested_count && !sentences.is_empty() {
        let sentence = sentences.swap_remove(rng.gen_range(0..sentences.len()));

        let tokens: HashSet<String> =
            tokenize(&sentence, config.min_keyword_len).into_iter().collect();
        let present: Vec<&str> = pool
            .iter()
            .map(String::as_str)
            .filter(|w| tokens.contains(*w))
            .collect();
        // A sentence without pool words does not count against the
        // requested total; keep trying the others.
        if present.is_empty() {
            continue;
        }

        let answer = present[rng.gen_range(0..present.len())].to_string();
        let Some(question) = mask_first(&sentence, &answer) else {
            continue;
        };

        let distractor_pool: Vec<&str> = pool
            .iter()
            .map(String::as_str)
            .filter(|w| *w != answer)
            .collect();
        if distractor_pool.len() < OPTION_COUNT - 1 {
            continue;
        }

        let mut options: Vec<String> = distractor_pool
            .choose_multiple(rng, OPTION_COUNT - 1)
            .map(|w| w.to_string())
            .collect();
        options.push(answer.clone());
        options.shuffle(rng);

        items.push(QuestionItem::new(question, options, answer));
    }

    if items.is_empty() {
        debug!("no sentence contained a pool keyword; emitting placeholder");
        return placeholder_set(digest);
    }
    QuestionSet::new(items, digest, Provenance::Fallback)
}

/// Split into sentences on terminal punctuation, dropping short noise.
fn usable_sentences(text: &str, min_chars: usize) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() >= min_chars)
        .map(str::to_string)
        .collect()
}

/// Rank content words by frequency, ties broken alphabetically so the
/// pool is stable for a given text.
fn keyword_pool(text: &str, config: &QuizConfig) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text, config.min_keyword_len) {
        if STOPWORDS.contains(&token.as_str()) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(config.keyword_pool_size)
        .map(|(word, _)| word)
        .collect()
}

/// Lowercase alphabetic tokens of at least `min_len` chars.
fn tokenize(text: &str, min_len: usize) -> Vec<String> {
    let word = Regex::new(r"[a-zA-Z]+").unwrap();
    word.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|t| t.chars().count() >= min_len)
        .collect()
}

/// Replace the first whole-word occurrence of `word` (case-insensitive)
/// with the blank marker.
fn mask_first(sentence: &str, word: &str) -> Option<String> {
    let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word))).ok()?;
    let found = pattern.find(sentence)?;

    let mut masked = String::with_capacity(sentence.len());
    masked.push_str(&sentence[..found.start()]);
    masked.push_str(BLANK);
    masked.push_str(&sentence[found.end()..]);
    Some(masked)
}

/// Terminal degraded result: one explanatory item, every option "N/A".
fn placeholder_set(digest: String) -> QuestionSet {
    let item = QuestionItem::new(
        "Not enough source material to generate questions. Provide a longer text and try again.",
        vec![PLACEHOLDER_OPTION.to_string(); OPTION_COUNT],
        PLACEHOLDER_OPTION,
    );
    QuestionSet::new(vec![item], digest, Provenance::Placeholder)
}
