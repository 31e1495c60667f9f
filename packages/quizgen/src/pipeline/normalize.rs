//! Schema normalization - repair loosely-typed decoded values into valid
//! question items.
//!
//! The policy is repair-over-reject: near-miss items are coerced into the
//! strict shape, and only unrepairable candidates are dropped. Dropping is
//! always per-candidate, never per-batch.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{GenerateError, Result};
use crate::types::quiz::{QuestionItem, OPTION_COUNT};

/// Sentinel used to pad short option lists.
pub const FILLER_OPTION: &str = "None of the above";

/// A candidate item as decoded from the wire, before repair.
///
/// Aliases cover the field spellings observed from generation services.
#[derive(Debug, Clone, Deserialize)]
struct RawQuestion {
    #[serde(default, alias = "prompt_text", alias = "prompt")]
    question: String,

    /// Either a list of scalars or a single `;`/newline-separated string
    #[serde(default)]
    options: Value,

    #[serde(default, alias = "correct_option", alias = "correct_answer", alias = "correct")]
    answer: String,
}

/// Normalize decoded candidates into valid question items.
///
/// Only the first `requested_count` candidates are considered; excess is
/// discarded. Zero survivors is a `Validation` failure so the caller can
/// fall back. Every returned item satisfies the structural invariant, and
/// normalizing an already-valid item is the identity.
pub fn normalize_candidates(value: &Value, requested_count: usize) -> Result<Vec<QuestionItem>> {
    let candidates = value.as_array().ok_or(GenerateError::Validation)?;

    let mut items = Vec::new();
    for candidate in candidates.iter().take(requested_count) {
        match normalize_one(candidate) {
            Some(item) => items.push(item),
            None => debug!("skipping unrepairable candidate"),
        }
    }

    if items.is_empty() {
        return Err(GenerateError::Validation);
    }
    Ok(items)
}

fn normalize_one(candidate: &Value) -> Option<QuestionItem> {
    let raw: RawQuestion = serde_json::from_value(candidate.clone()).ok()?;

    let question = raw.question.trim().to_string();
    let stated_answer = raw.answer.trim().to_string();
    if question.is_empty() || stated_answer.is_empty() {
        return None;
    }

    let mut options = collect_options(&raw.options);
    dedup_case_insensitive(&mut options);

    if options.len() > OPTION_COUNT {
        // Truncating must never lose the stated answer.
        let stated_at = options
            .iter()
            .position(|o| o.to_lowercase() == stated_answer.to_lowercase())
            .map(|idx| (idx, options[idx].clone()));
        options.truncate(OPTION_COUNT);
        if let Some((idx, text)) = stated_at {
            if idx >= OPTION_COUNT {
                options[OPTION_COUNT - 1] = text;
            }
        }
    }

    while options.len() < OPTION_COUNT {
        if options.iter().any(|o| o.to_lowercase() == FILLER_OPTION.to_lowercase()) {
            // A second sentinel cannot restore distinctness.
            return None;
        }
        options.push(FILLER_OPTION.to_string());
    }

    let mut degraded = false;
    let answer = if let Some(exact) = options.iter().find(|o| **o == stated_answer) {
        exact.clone()
    } else if let Some(close) = options
        .iter()
        .find(|o| o.to_lowercase() == stated_answer.to_lowercase())
    {
        // Rewrite the answer to the option's exact text.
        close.clone()
    } else {
        degraded = true;
        options[0].clone()
    };

    let mut item = QuestionItem::new(question, options, answer);
    if degraded {
        item = item.degraded();
    }
    Some(item)
}

/// Accept either an array of scalars or a single separated string.
fn collect_options(value: &Value) -> Vec<String> {
    match value {
        Value::Array(entries) => entries.iter().filter_map(scalar_text).collect(),
        Value::String(s) => s
            .split([';', '\n'])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Drop later options that repeat an earlier one, ignoring case.
fn dedup_case_insensitive(options: &mut Vec<String>) {
    let mut seen = HashSet::new();
    options.retain(|o| seen.insert(o.to_lowercase()));
}
