// Caption layout: composition, measurement, wrapping and the font-size search.
// Everything here is synchronous and pure over in-memory strings; hosts that
// fit on an async runtime should do so off the executor threads.

pub mod cache;
pub mod composer;
pub mod deck;
pub mod fit;
pub mod metrics;
pub mod wrap;

// Re-export the public API consumed by the style resolver and hosts.
pub use cache::{CacheStats, FitCache, FitKey};
pub use composer::{compose, ideal_line_count_for, LayoutMode};
pub use deck::{apply_deck, measure_deck, DeckCaption, DeckMeasurement, SoloFit};
pub use fit::{fit_text_to_box, FitResult, FitSettings, OverflowEntry, OverflowReason};
pub use metrics::{MonospaceMetrics, StaticTextMetrics, TextMetrics};
pub use wrap::{wrap_words, FontSpec, WrappedLine};
