//! Fit Engine — largest font size ≤ the ceiling at which a caption fits its box.
//!
//! # Search
//! Top-down only. Probe at `base_font_size`; on overflow log the probe, decay
//! by 5% (floored to whole px, always at least 1px) and retry. When the next
//! size would drop below `min_font_size` the floor itself is probed once more.
//! A failure at the floor returns the floor layout with `fitted = false` and a
//! warning; the engine never errors.
//!
//! # Feasibility
//! A probe is feasible when the wrapped line count is ≤ `max_lines` and every
//! physical line measures ≤ the available width (panel width minus padding).
//!
//! `fit_text_to_box` is pure: identical inputs (and a deterministic
//! `TextMetrics`) produce identical `FitResult`s, which is what makes
//! `FitCache` and the deck pass sound.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::layout::composer::{compose, LayoutMode};
use crate::layout::metrics::TextMetrics;
use crate::layout::wrap::{wrap_all, FontSpec, WrappedLine};

/// Multiplier applied to the trial size after each failed probe.
pub const FONT_DECAY: f64 = 0.95;

/// Hard cap on probes. The decay reaches any realistic floor long before this.
pub const MAX_FIT_ITERATIONS: u32 = 64;

// ────────────────────────────────────────────────────────────────────────────
// Input / output types
// ────────────────────────────────────────────────────────────────────────────

/// Constraints for one fit call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitSettings {
    /// At least 1.
    pub max_lines: usize,
    /// Share of the container the panel may occupy, 0–100.
    pub panel_max_width_percent: f64,
    /// Ceiling in px; the search starts here.
    pub base_font_size: f64,
    /// Floor in px, ≤ `base_font_size`.
    pub min_font_size: f64,
    /// Horizontal panel padding in px, applied on both sides.
    pub padding: f64,
    /// Line height multiplier. Not used by the search; carried for geometry.
    pub line_height: f64,
    pub font_family: String,
    pub font_weight: u16,
    pub layout_mode: LayoutMode,
}

impl FitSettings {
    /// Widest the panel may get inside `container_width`.
    pub fn max_panel_width(&self, container_width: f64) -> f64 {
        container_width.max(0.0) * self.panel_max_width_percent.clamp(0.0, 100.0) / 100.0
    }

    /// Width available to text: panel maximum minus padding on both sides.
    pub fn available_width(&self, container_width: f64) -> f64 {
        (self.max_panel_width(container_width) - 2.0 * self.padding.max(0.0)).max(0.0)
    }

    /// Repairs out-of-range values instead of rejecting them.
    fn normalized(&self) -> FitSettings {
        let mut settings = self.clone();
        settings.max_lines = settings.max_lines.max(1);
        settings.base_font_size = settings.base_font_size.max(1.0);
        settings.min_font_size = settings.min_font_size.clamp(1.0, settings.base_font_size);
        settings
    }
}

/// Which constraint a probe violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowReason {
    /// More physical lines than `max_lines`.
    TooManyLines,
    /// A single word is wider than the available width.
    LineTooWide,
}

/// Diagnostic for one failed probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverflowEntry {
    pub font_size: f64,
    pub line_count: usize,
    pub widest_line_width: f64,
    pub available_width: f64,
    pub reason: OverflowReason,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub lines: Vec<String>,
    pub font_size: f64,
    pub line_count: usize,
    /// Widest line plus padding, capped at the panel maximum.
    pub panel_width: f64,
    /// True iff the chosen layout satisfies both the line cap and the width.
    pub fitted: bool,
    pub warning: Option<String>,
    /// Distinct font sizes probed.
    pub iterations: u32,
    /// One entry per failed probe, in probe order.
    pub overflow_log: Vec<OverflowEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Fit
// ────────────────────────────────────────────────────────────────────────────

/// Fits `text` into a panel inside `container_width` px.
pub fn fit_text_to_box(
    text: &str,
    container_width: f64,
    settings: &FitSettings,
    metrics: &dyn TextMetrics,
) -> FitResult {
    let settings = settings.normalized();
    let candidates = compose(text, settings.layout_mode);
    let max_panel_width = settings.max_panel_width(container_width);
    let padding = settings.padding.max(0.0);

    if candidates.is_empty() {
        return FitResult {
            lines: vec![String::new()],
            font_size: settings.base_font_size,
            line_count: 1,
            panel_width: (2.0 * padding).min(max_panel_width),
            fitted: true,
            warning: None,
            iterations: 0,
            overflow_log: Vec::new(),
        };
    }

    let available = settings.available_width(container_width);
    let mut font_size = settings.base_font_size;
    let mut iterations = 0u32;
    let mut overflow_log: Vec<OverflowEntry> = Vec::new();

    loop {
        iterations += 1;
        let probe = probe_at(&candidates, font_size, available, &settings, metrics);

        let Some(reason) = probe.overflow(settings.max_lines, available) else {
            debug!(
                font_size,
                lines = probe.lines.len(),
                iterations,
                "Caption fitted"
            );
            return probe.into_result(font_size, padding, max_panel_width, iterations, overflow_log, None);
        };

        overflow_log.push(OverflowEntry {
            font_size,
            line_count: probe.lines.len(),
            widest_line_width: probe.widest,
            available_width: available,
            reason,
        });

        if font_size <= settings.min_font_size {
            let warning = floor_warning(reason, &probe, settings.max_lines, available);
            warn!(
                font_size,
                lines = probe.lines.len(),
                max_lines = settings.max_lines,
                iterations,
                "Caption does not fit at floor font size: {warning}"
            );
            return probe.into_result(
                font_size,
                padding,
                max_panel_width,
                iterations,
                overflow_log,
                Some(warning),
            );
        }

        font_size = if iterations >= MAX_FIT_ITERATIONS {
            settings.min_font_size
        } else {
            next_font_size(font_size, settings.min_font_size)
        };
    }
}

/// Next trial size: 5% decay floored to whole px, at least 1px smaller,
/// never below the floor.
pub fn next_font_size(current: f64, floor: f64) -> f64 {
    let mut next = (current * FONT_DECAY).floor();
    if next >= current {
        next = current - 1.0;
    }
    next.max(floor)
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

struct Probe {
    lines: Vec<WrappedLine>,
    widest: f64,
}

impl Probe {
    fn overflow(&self, max_lines: usize, available: f64) -> Option<OverflowReason> {
        if self.lines.len() > max_lines {
            Some(OverflowReason::TooManyLines)
        } else if self.widest > available {
            Some(OverflowReason::LineTooWide)
        } else {
            None
        }
    }

    fn into_result(
        self,
        font_size: f64,
        padding: f64,
        max_panel_width: f64,
        iterations: u32,
        overflow_log: Vec<OverflowEntry>,
        warning: Option<String>,
    ) -> FitResult {
        let panel_width = (self.widest + 2.0 * padding).min(max_panel_width);
        let lines: Vec<String> = self.lines.into_iter().map(|l| l.text).collect();
        FitResult {
            line_count: lines.len(),
            lines,
            font_size,
            panel_width,
            fitted: warning.is_none(),
            warning,
            iterations,
            overflow_log,
        }
    }
}

fn probe_at(
    candidates: &[String],
    font_size: f64,
    available: f64,
    settings: &FitSettings,
    metrics: &dyn TextMetrics,
) -> Probe {
    let font = FontSpec {
        family: &settings.font_family,
        weight: settings.font_weight,
        size_px: font_size,
    };
    let lines = wrap_all(candidates, available, &font, metrics);
    let widest = lines.iter().map(|l| l.width).fold(0.0_f64, f64::max);
    Probe { lines, widest }
}

fn floor_warning(reason: OverflowReason, probe: &Probe, max_lines: usize, available: f64) -> String {
    match reason {
        OverflowReason::TooManyLines => format!(
            "exceeds max lines at floor font size ({} > {})",
            probe.lines.len(),
            max_lines
        ),
        OverflowReason::LineTooWide => format!(
            "word wider than panel at floor font size ({:.0}px > {:.0}px)",
            probe.widest, available
        ),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
