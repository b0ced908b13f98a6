//! Title/Paragraph Composer — raw headline text → ordered candidate lines.
//!
//! Knows nothing about fonts or pixels. Paragraph captions come back as one
//! unit and are wrapped by width downstream; title captions are pre-split into
//! 1–3 short, evenly balanced lines like a film title card.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Title,
    Paragraph,
}

/// Target number of title lines for a given word count.
pub fn ideal_line_count_for(word_count: usize) -> usize {
    match word_count {
        0..=4 => 1,
        5..=9 => 2,
        _ => 3,
    }
}

/// Collapses every run of whitespace to a single space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Splits `text` into candidate display lines for `mode`.
///
/// Whitespace-only input yields no lines. Words are never cut.
pub fn compose(text: &str, mode: LayoutMode) -> Vec<String> {
    match mode {
        LayoutMode::Paragraph => {
            let normalized = normalize_whitespace(text);
            if normalized.is_empty() {
                Vec::new()
            } else {
                vec![normalized]
            }
        }
        LayoutMode::Title => compose_title(text),
    }
}

/// Greedy walk that breaks after strong punctuation or when the running line
/// reaches the balance limit `ceil(n / ideal)`. The limit is fixed for the
/// whole walk, so adding a word never moves earlier words between lines.
fn compose_title(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let total = words.len();
    if total == 0 {
        return Vec::new();
    }

    let ideal = ideal_line_count_for(total);
    let limit = balance_limit(total, ideal);
    let mut lines: Vec<String> = Vec::with_capacity(ideal);
    let mut current: Vec<&str> = Vec::new();

    for (i, word) in words.iter().enumerate() {
        current.push(word);
        let consumed = i + 1;
        if consumed == total {
            break;
        }

        // A punctuation boundary and a full line coincide → same break either way.
        if ends_at_strong_boundary(word) || current.len() >= limit {
            lines.push(current.join(" "));
            current.clear();
        }
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

fn balance_limit(words: usize, lines: usize) -> usize {
    let lines = lines.max(1);
    words.div_ceil(lines).max(1)
}

/// `.`, `!`, `?` or an em dash, looking through closing quotes and brackets.
fn ends_at_strong_boundary(word: &str) -> bool {
    let trimmed = word.trim_end_matches(['"', '\'', '\u{201D}', '\u{2019}', ')', ']', '\u{BB}']);
    trimmed.ends_with(['.', '!', '?', '\u{2014}'])
}
