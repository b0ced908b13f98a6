//! Greedy word wrap against a pixel width.

use serde::{Deserialize, Serialize};

use crate::layout::metrics::TextMetrics;

/// Font description handed to the metrics provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec<'a> {
    pub family: &'a str,
    pub weight: u16,
    pub size_px: f64,
}

/// One physical line and its measured width at the wrap's font size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedLine {
    pub text: String,
    pub width: f64,
}

/// Wraps `text` so each line is the longest run of words measuring ≤ `max_width`.
///
/// A word wider than `max_width` on its own still gets its own line; words are
/// never split. Whitespace-only input yields no lines.
pub fn wrap_words(
    text: &str,
    max_width: f64,
    font: &FontSpec<'_>,
    metrics: &dyn TextMetrics,
) -> Vec<WrappedLine> {
    let measure = |s: &str| metrics.measure(s, font.family, font.weight, font.size_px);

    let mut lines: Vec<WrappedLine> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f64;

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            current_width = measure(&current);
            continue;
        }

        let candidate = format!("{current} {word}");
        let candidate_width = measure(&candidate);
        if candidate_width > max_width {
            // Line is full; this word starts the next one.
            lines.push(WrappedLine {
                text: std::mem::take(&mut current),
                width: current_width,
            });
            current.push_str(word);
            current_width = measure(&current);
        } else {
            current = candidate;
            current_width = candidate_width;
        }
    }

    if !current.is_empty() {
        lines.push(WrappedLine {
            text: current,
            width: current_width,
        });
    }
    lines
}

/// Wraps every candidate line independently and concatenates the results.
pub fn wrap_all(
    candidates: &[String],
    max_width: f64,
    font: &FontSpec<'_>,
    metrics: &dyn TextMetrics,
) -> Vec<WrappedLine> {
    candidates
        .iter()
        .flat_map(|candidate| wrap_words(candidate, max_width, font, metrics))
        .collect()
}
