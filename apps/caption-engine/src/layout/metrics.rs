//! Text-Metrics Provider — the single measurement capability the fit engine needs.
//!
//! `TextMetrics` is the seam: web hosts back it with canvas text measurement,
//! native hosts with a font library. `StaticTextMetrics` is the built-in,
//! dependency-free implementation: per-family em-width tables over printable
//! ASCII (0x20..=0x7E, index = `c as usize - 32`), scaled by font size and a
//! small weight factor. Glyphs outside the table use the family's average width.
//! Kerning and shaping are ignored; captions are short enough that the error
//! stays within the panel padding.

use serde::{Deserialize, Serialize};

/// Rendered-width measurement. Must be deterministic and side-effect free:
/// fit results are memoized on the assumption that equal inputs measure equally.
pub trait TextMetrics: Send + Sync {
    /// Width in px of `text` set on one line.
    fn measure(&self, text: &str, font_family: &str, font_weight: u16, font_size_px: f64) -> f64;
}

// ────────────────────────────────────────────────────────────────────────────
// Font families with built-in tables
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Humanist sans-serif; also the table used for unknown families.
    Inter,
    /// Old-style serif.
    EbGaramond,
    /// Condensed display sans-serif.
    Oswald,
}

impl FontFamily {
    /// Maps a CSS-style family name onto a table. Unknown names measure as Inter.
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "ebgaramond" | "garamond" => FontFamily::EbGaramond,
            "oswald" => FontFamily::Oswald,
            _ => FontFamily::Inter,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Width tables
// ────────────────────────────────────────────────────────────────────────────

/// Em-width table for one family at weight 400.
pub struct FontMetricTable {
    pub font: FontFamily,
    widths: [f32; 95],
    pub average_char_width: f32,
}

impl FontMetricTable {
    /// Width of `s` in em at regular weight.
    pub fn measure_em(&self, s: &str) -> f64 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32] as f64
                } else {
                    self.average_char_width as f64
                }
            })
            .sum()
    }
}

/// Heavier weights set wider: +2% per 100 units above 400, -2% per 100 below.
pub fn weight_factor(font_weight: u16) -> f64 {
    let weight = font_weight.clamp(100, 900) as f64;
    1.0 + (weight - 400.0) / 100.0 * 0.02
}

/// Table-backed `TextMetrics`. Stateless, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTextMetrics;

impl TextMetrics for StaticTextMetrics {
    fn measure(&self, text: &str, font_family: &str, font_weight: u16, font_size_px: f64) -> f64 {
        let table = get_metrics(FontFamily::from_name(font_family));
        table.measure_em(text) * font_size_px * weight_factor(font_weight)
    }
}

/// Every character advances by the same em width, regardless of family or weight.
/// Suited to monospace caption styles and to tests that need exact arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    pub advance_em: f64,
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, text: &str, _font_family: &str, _font_weight: u16, font_size_px: f64) -> f64 {
        text.chars().count() as f64 * self.advance_em * font_size_px
    }
}

static INTER_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Inter,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
};

/// Roughly 85% of Inter.
static EB_GARAMOND_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::EbGaramond,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.21, 0.26, 0.32, 0.48, 0.48, 0.76, 0.57, 0.19, 0.28, 0.28, 0.33, 0.50, 0.24, 0.28, 0.24, 0.26,
        // 0     1     2     3     4     5     6     7     8     9
        0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48,
        // :     ;     <     =     >     ?     @
        0.24, 0.24, 0.50, 0.50, 0.50, 0.43, 0.87,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.57, 0.52, 0.52, 0.57, 0.48, 0.43, 0.57, 0.57, 0.21, 0.33, 0.52, 0.45, 0.66,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.57, 0.61, 0.48, 0.61, 0.52, 0.43, 0.48, 0.57, 0.57, 0.76, 0.52, 0.52, 0.48,
        // [     \     ]     ^     _     `
        0.24, 0.26, 0.24, 0.40, 0.48, 0.29,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.48, 0.48, 0.43, 0.48, 0.48, 0.26, 0.48, 0.48, 0.19, 0.19, 0.45, 0.19, 0.71,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.48, 0.48, 0.48, 0.48, 0.28, 0.37, 0.33, 0.48, 0.43, 0.61, 0.43, 0.43, 0.37,
        // {     |     }     ~
        0.28, 0.22, 0.28, 0.50,
    ],
    average_char_width: 0.44,
};

/// Roughly 68% of Inter.
static OSWALD_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Oswald,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.17, 0.20, 0.26, 0.38, 0.38, 0.61, 0.46, 0.15, 0.23, 0.23, 0.27, 0.40, 0.19, 0.23, 0.19, 0.21,
        // 0     1     2     3     4     5     6     7     8     9
        0.38, 0.38, 0.38, 0.38, 0.38, 0.38, 0.38, 0.38, 0.38, 0.38,
        // :     ;     <     =     >     ?     @
        0.19, 0.19, 0.40, 0.40, 0.40, 0.34, 0.69,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.46, 0.41, 0.41, 0.46, 0.38, 0.34, 0.46, 0.46, 0.17, 0.27, 0.41, 0.36, 0.53,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.46, 0.49, 0.38, 0.49, 0.41, 0.34, 0.38, 0.46, 0.46, 0.61, 0.41, 0.41, 0.38,
        // [     \     ]     ^     _     `
        0.19, 0.21, 0.19, 0.32, 0.38, 0.23,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.38, 0.38, 0.34, 0.38, 0.38, 0.21, 0.38, 0.38, 0.15, 0.15, 0.36, 0.15, 0.56,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.38, 0.38, 0.38, 0.38, 0.23, 0.30, 0.27, 0.38, 0.34, 0.49, 0.34, 0.34, 0.30,
        // {     |     }     ~
        0.23, 0.18, 0.23, 0.40,
    ],
    average_char_width: 0.35,
};

pub fn get_metrics(font: FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Inter => &INTER_TABLE,
        FontFamily::EbGaramond => &EB_GARAMOND_TABLE,
        FontFamily::Oswald => &OSWALD_TABLE,
    }
}
