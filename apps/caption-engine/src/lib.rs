//! Caption layout and fitting engine.
//!
//! Resolves a caption's style tokens, composes its headline into lines and
//! searches for the largest font size that fits the safe area of the video
//! frame. Everything is synchronous, deterministic and free of I/O apart from
//! optional token-table loading.

pub mod config;
pub mod errors;
pub mod layout;
pub mod style;
pub mod telemetry;
pub mod tokens;

pub use config::EngineConfig;
pub use errors::{EngineError, EngineResult};
pub use layout::{fit_text_to_box, FitCache, FitResult, FitSettings, LayoutMode, TextMetrics};
pub use style::{CaptionRenderRequest, RenderedCaptionStyle, SizePreference, StyleResolver};
pub use tokens::{TokenFallback, TokenRegistry};
