//! Response extraction - locate a JSON value in free-form model output.
//!
//! The generation service is asked for strict JSON but frequently wraps
//! its reply in prose or markdown fences. The extractor runs a fixed
//! ladder of attempts; the same input always yields the same value or the
//! same failure.

use regex::Regex;
use serde_json::Value;

use crate::error::{GenerateError, Result};

/// Extract a JSON value from free-form model output.
///
/// Ladder, in order: direct parse of the whole text, parse of a fenced
/// code block, parse of the first balanced `{...}` block, parse of the
/// first balanced `[...]` block. An object wrapping a single array-valued
/// member (e.g. `{"questions": [...]}`) is unwrapped to the array.
pub fn extract_json(text: &str) -> Result<Value> {
    let value = attempt_ladder(text).ok_or(GenerateError::Extraction)?;
    Ok(unwrap_root_array(value))
}

fn attempt_ladder(text: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str(text.trim()) {
        return Some(value);
    }

    if let Some(inner) = fenced_block(text) {
        if let Ok(value) = serde_json::from_str(inner.trim()) {
            return Some(value);
        }
    }

    for (open, close) in [('{', '}'), ('[', ']')] {
        if let Some(block) = first_balanced_block(text, open, close) {
            if let Ok(value) = serde_json::from_str(block) {
                return Some(value);
            }
        }
    }

    None
}

/// Pull the body out of the first markdown code fence, if any.
fn fenced_block(text: &str) -> Option<&str> {
    let fence = Regex::new(r"(?s)```[a-zA-Z]*\s*\n?(.*?)```").unwrap();
    fence.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Find the first balanced block delimited by `open`/`close`.
///
/// Delimiters inside JSON string literals are skipped, so option text
/// like `"{x}"` cannot unbalance the scan.
fn first_balanced_block(text: &str, open: char, close: char) -> Option<&str> {
    let mut search_from = 0;
    while let Some(rel) = text[search_from..].find(open) {
        let start = search_from + rel;
        if let Some(len) = balanced_span(&text[start..], open, close) {
            return Some(&text[start..start + len]);
        }
        search_from = start + open.len_utf8();
    }
    None
}

/// Byte length of the balanced block starting at byte 0, if it closes.
fn balanced_span(text: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        if ch == '"' {
            in_string = true;
        } else if ch == open {
            depth += 1;
        } else if ch == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(idx + ch.len_utf8());
            }
        }
    }
    None
}

/// Unwrap a root object whose single member is an array.
///
/// Handles models that wrap the list in a root key such as
/// `{"questions": [...]}`.
fn unwrap_root_array(value: Value) -> Value {
    if let Value::Object(map) = &value {
        if map.len() == 1 {
            if let Some(Value::Array(items)) = map.values().next() {
                return Value::Array(items.clone());
            }
        }
    }
    value
}
