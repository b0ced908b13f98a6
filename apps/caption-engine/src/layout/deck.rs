//! Deck Consistency Pass — one shared font ceiling for every caption in a deck.
//!
//! Two pure phases, no shared deck state:
//! 1. `measure_deck` fits each caption solo at its own ceiling; the deck target
//!    is the smallest solo font size.
//! 2. `apply_deck` re-fits each caption with `min(own ceiling, target)` as its
//!    ceiling. Re-fitting (not assigning) lets a caption that still overflows
//!    at the shared size keep shrinking on its own.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::fit::{fit_text_to_box, FitResult, FitSettings};
use crate::layout::metrics::TextMetrics;

/// One caption's fit inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckCaption {
    pub text: String,
    /// Width the caption is fitted into (the safe-area usable width).
    pub container_width: f64,
    pub settings: FitSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoloFit {
    pub base_font_size: f64,
    pub font_size: f64,
    pub fitted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckMeasurement {
    /// `None` for an empty deck.
    pub deck_target_font_size: Option<f64>,
    pub solo: Vec<SoloFit>,
    /// Per caption, `min(own base font size, deck target)`.
    pub effective_ceilings: Vec<f64>,
}

/// Smallest solo font size, or `None` when there are none.
pub fn deck_target<I>(solo_font_sizes: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    solo_font_sizes.into_iter().reduce(f64::min)
}

pub fn effective_ceiling(base_font_size: f64, deck_target: Option<f64>) -> f64 {
    match deck_target {
        Some(target) => base_font_size.min(target),
        None => base_font_size,
    }
}

/// Phase 1: solo-fit every caption and derive the deck target.
pub fn measure_deck(captions: &[DeckCaption], metrics: &dyn TextMetrics) -> DeckMeasurement {
    let solo: Vec<SoloFit> = captions
        .iter()
        .map(|caption| {
            let result = fit_text_to_box(
                &caption.text,
                caption.container_width,
                &caption.settings,
                metrics,
            );
            SoloFit {
                base_font_size: caption.settings.base_font_size,
                font_size: result.font_size,
                fitted: result.fitted,
            }
        })
        .collect();

    let target = deck_target(solo.iter().map(|s| s.font_size));
    let effective_ceilings = solo
        .iter()
        .map(|s| effective_ceiling(s.base_font_size, target))
        .collect();

    debug!(captions = captions.len(), deck_target = ?target, "Measured caption deck");

    DeckMeasurement {
        deck_target_font_size: target,
        solo,
        effective_ceilings,
    }
}

/// Settings for the apply phase: ceiling capped at the deck target, floor kept below it.
pub fn settings_for_deck(settings: &FitSettings, deck_target: Option<f64>) -> FitSettings {
    let mut capped = settings.clone();
    capped.base_font_size = effective_ceiling(settings.base_font_size, deck_target);
    capped.min_font_size = settings.min_font_size.min(capped.base_font_size);
    capped
}

/// Phase 2: re-fit every caption under the shared ceiling.
pub fn apply_deck(
    captions: &[DeckCaption],
    measurement: &DeckMeasurement,
    metrics: &dyn TextMetrics,
) -> Vec<FitResult> {
    captions
        .iter()
        .map(|caption| {
            let settings = settings_for_deck(&caption.settings, measurement.deck_target_font_size);
            fit_text_to_box(&caption.text, caption.container_width, &settings, metrics)
        })
        .collect()
}
