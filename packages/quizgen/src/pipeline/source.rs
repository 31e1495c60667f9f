//! Source preparation - bound input size without breaking semantic units.

/// Separator re-joining kept paragraphs.
const PARAGRAPH_SEP: &str = "\n\n";

/// Bound `text` to `max_chars`, cutting only at paragraph boundaries.
///
/// Paragraphs are blank-line-separated runs. Whole paragraphs are kept in
/// input order until the next one would exceed the budget. When the very
/// first paragraph is already over budget (no usable boundary), the text
/// is hard-truncated at the nearest char boundary instead. The result is
/// always a prefix of the input's paragraph sequence, never reordered.
pub fn prepare_source(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let paragraphs = split_paragraphs(text);
    let mut kept: Vec<&str> = Vec::new();
    let mut used = 0usize;

    for paragraph in &paragraphs {
        let sep_cost = if kept.is_empty() { 0 } else { PARAGRAPH_SEP.len() };
        let cost = sep_cost + paragraph.chars().count();
        if used + cost > max_chars {
            break;
        }
        used += cost;
        kept.push(paragraph);
    }

    if kept.is_empty() {
        return hard_truncate(text, max_chars).to_string();
    }

    kept.join(PARAGRAPH_SEP)
}

/// Split on blank-line runs, dropping empty segments.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

/// Cut at a char boundary no later than `max_chars` characters in.
fn hard_truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
