//! Style tokens — immutable, keyed records selected by plain table lookup.
//!
//! A preset bundles one typography, one color and one background token id.
//! Safe-area profiles live in the same tables. Lookups never fail: an unknown
//! id resolves to the table's documented default and the substitution is
//! reported as a `TokenFallback`.

pub mod registry;
pub mod tables;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use registry::{ResolvedSafeArea, ResolvedTokens, TokenRegistry};
pub use tables::builtin_tables;

pub const DEFAULT_PRESET_ID: &str = "clean_white";
pub const DEFAULT_TYPOGRAPHY_ID: &str = "sans";
pub const DEFAULT_COLOR_ID: &str = "light_on_dark_shadow";
pub const DEFAULT_BACKGROUND_ID: &str = "none";
pub const DEFAULT_SAFE_AREA_ID: &str = "universal";

// ────────────────────────────────────────────────────────────────────────────
// Token records
// ────────────────────────────────────────────────────────────────────────────

/// Case transform applied to headline text before it is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTransform {
    Uppercase,
    Lowercase,
    /// First letter of every whitespace-separated word upper-cased.
    Capitalize,
}

impl TextTransform {
    pub fn apply(&self, text: &str) -> String {
        match self {
            TextTransform::Uppercase => text.to_uppercase(),
            TextTransform::Lowercase => text.to_lowercase(),
            TextTransform::Capitalize => text
                .split(' ')
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect(),
                        None => String::new(),
                    }
                })
                .collect::<Vec<String>>()
                .join(" "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyToken {
    pub font_family: String,
    /// Fullscreen title-mode size in px, before any scaling.
    pub base_font_size: f64,
    pub font_weight: u16,
    /// Line height as a multiplier of the font size.
    pub line_height: f64,
    /// Tracking in em.
    #[serde(default)]
    pub letter_spacing: f64,
    #[serde(default)]
    pub text_transform: Option<TextTransform>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowSpec {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineSpec {
    pub width: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorToken {
    pub text_color: String,
    /// Pill / panel fill. `None` leaves the background treatment unpainted.
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub shadow: Option<ShadowSpec>,
    #[serde(default)]
    pub outline: Option<OutlineSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundKind {
    None,
    Pill,
    Panel,
    Blur,
    Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundToken {
    pub kind: BackgroundKind,
    pub padding_x: f64,
    pub padding_y: f64,
    pub corner_radius: f64,
    #[serde(default)]
    pub blur_radius: Option<f64>,
}

/// Margins reserved for host-app chrome, each a percentage of the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeAreaProfile {
    pub top_percent: f64,
    pub bottom_percent: f64,
    pub left_percent: f64,
    pub right_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionPreset {
    pub typography: String,
    pub colors: String,
    pub background: String,
}

/// A complete, versioned set of token tables keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenTables {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub presets: BTreeMap<String, CaptionPreset>,
    #[serde(default)]
    pub typography: BTreeMap<String, TypographyToken>,
    #[serde(default)]
    pub colors: BTreeMap<String, ColorToken>,
    #[serde(default)]
    pub backgrounds: BTreeMap<String, BackgroundToken>,
    #[serde(default)]
    pub safe_areas: BTreeMap<String, SafeAreaProfile>,
}

impl TokenTables {
    /// Overlays `other` onto `self`; entries with the same id are replaced.
    pub fn merge(&mut self, other: TokenTables) {
        if other.version.is_some() {
            self.version = other.version;
        }
        self.presets.extend(other.presets);
        self.typography.extend(other.typography);
        self.colors.extend(other.colors);
        self.backgrounds.extend(other.backgrounds);
        self.safe_areas.extend(other.safe_areas);
    }
}

/// Which table a fail-soft lookup substituted a default in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenTable {
    Preset,
    Typography,
    Color,
    Background,
    SafeArea,
}

/// Record of an unknown id replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFallback {
    pub table: TokenTable,
    pub requested: String,
    pub used: String,
}
