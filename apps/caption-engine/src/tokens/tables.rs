//! Built-in token tables shipped with the engine.
//!
//! Hosts can overlay a JSON document on top of these (see `TokenRegistry::merge_json`).

use std::collections::BTreeMap;

use super::{
    BackgroundKind, BackgroundToken, CaptionPreset, ColorToken, OutlineSpec, SafeAreaProfile,
    ShadowSpec, TextTransform, TokenTables, TypographyToken, DEFAULT_BACKGROUND_ID,
    DEFAULT_COLOR_ID, DEFAULT_SAFE_AREA_ID, DEFAULT_TYPOGRAPHY_ID,
};

pub const BUILTIN_TABLES_VERSION: &str = "2026.1";

/// Returns the built-in token tables.
pub fn builtin_tables() -> TokenTables {
    TokenTables {
        version: Some(BUILTIN_TABLES_VERSION.to_string()),
        presets: presets(),
        typography: typography(),
        colors: colors(),
        backgrounds: backgrounds(),
        safe_areas: safe_areas(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Documented defaults
// ────────────────────────────────────────────────────────────────────────────

/// The `sans` typography token.
pub fn default_typography() -> TypographyToken {
    TypographyToken {
        font_family: "Inter".to_string(),
        base_font_size: 48.0,
        font_weight: 600,
        line_height: 1.15,
        letter_spacing: 0.0,
        text_transform: None,
    }
}

/// The `light_on_dark_shadow` color token.
pub fn default_colors() -> ColorToken {
    ColorToken {
        text_color: "#FFFFFF".to_string(),
        background_color: None,
        shadow: Some(ShadowSpec {
            offset_x: 0.0,
            offset_y: 2.0,
            blur: 8.0,
            color: "rgba(0,0,0,0.65)".to_string(),
        }),
        outline: None,
    }
}

/// The `none` background token.
pub fn default_background() -> BackgroundToken {
    BackgroundToken {
        kind: BackgroundKind::None,
        padding_x: 0.0,
        padding_y: 0.0,
        corner_radius: 0.0,
        blur_radius: None,
    }
}

/// The `universal` safe-area profile.
pub fn default_safe_area() -> SafeAreaProfile {
    safe_area(10.0, 20.0, 6.0, 6.0)
}

fn preset(typography: &str, colors: &str, background: &str) -> CaptionPreset {
    CaptionPreset {
        typography: typography.to_string(),
        colors: colors.to_string(),
        background: background.to_string(),
    }
}

fn presets() -> BTreeMap<String, CaptionPreset> {
    [
        ("clean_white", preset("sans", "light_on_dark_shadow", "none")),
        ("bold_pill", preset("sans_heavy", "dark_on_yellow", "pill")),
        ("cinematic", preset("serif", "warm_white", "gradient")),
        ("news_panel", preset("condensed", "white_on_red", "panel")),
        ("frosted", preset("sans", "white_outline", "blur")),
    ]
    .into_iter()
    .map(|(id, p)| (id.to_string(), p))
    .collect()
}

fn typography() -> BTreeMap<String, TypographyToken> {
    let mut table = BTreeMap::new();
    table.insert(DEFAULT_TYPOGRAPHY_ID.to_string(), default_typography());
    table.insert(
        "sans_heavy".to_string(),
        TypographyToken {
            font_family: "Inter".to_string(),
            base_font_size: 52.0,
            font_weight: 800,
            line_height: 1.1,
            letter_spacing: -0.01,
            text_transform: Some(TextTransform::Uppercase),
        },
    );
    table.insert(
        "serif".to_string(),
        TypographyToken {
            font_family: "EB Garamond".to_string(),
            base_font_size: 50.0,
            font_weight: 500,
            line_height: 1.2,
            letter_spacing: 0.0,
            text_transform: None,
        },
    );
    table.insert(
        "condensed".to_string(),
        TypographyToken {
            font_family: "Oswald".to_string(),
            base_font_size: 56.0,
            font_weight: 700,
            line_height: 1.05,
            letter_spacing: 0.02,
            text_transform: Some(TextTransform::Uppercase),
        },
    );
    table
}

fn colors() -> BTreeMap<String, ColorToken> {
    let mut table = BTreeMap::new();
    table.insert(DEFAULT_COLOR_ID.to_string(), default_colors());
    table.insert(
        "dark_on_yellow".to_string(),
        ColorToken {
            text_color: "#111111".to_string(),
            background_color: Some("#FFD60A".to_string()),
            shadow: None,
            outline: None,
        },
    );
    table.insert(
        "warm_white".to_string(),
        ColorToken {
            text_color: "#FFF4E0".to_string(),
            background_color: None,
            shadow: Some(ShadowSpec {
                offset_x: 0.0,
                offset_y: 1.0,
                blur: 12.0,
                color: "rgba(0,0,0,0.8)".to_string(),
            }),
            outline: None,
        },
    );
    table.insert(
        "white_on_red".to_string(),
        ColorToken {
            text_color: "#FFFFFF".to_string(),
            background_color: Some("#D62828".to_string()),
            shadow: None,
            outline: None,
        },
    );
    table.insert(
        "white_outline".to_string(),
        ColorToken {
            text_color: "#FFFFFF".to_string(),
            background_color: Some("rgba(255,255,255,0.18)".to_string()),
            shadow: None,
            outline: Some(OutlineSpec {
                width: 2.0,
                color: "#000000".to_string(),
            }),
        },
    );
    table
}

fn backgrounds() -> BTreeMap<String, BackgroundToken> {
    let mut table = BTreeMap::new();
    table.insert(DEFAULT_BACKGROUND_ID.to_string(), default_background());
    table.insert(
        "pill".to_string(),
        BackgroundToken {
            kind: BackgroundKind::Pill,
            padding_x: 24.0,
            padding_y: 10.0,
            corner_radius: 999.0,
            blur_radius: None,
        },
    );
    table.insert(
        "panel".to_string(),
        BackgroundToken {
            kind: BackgroundKind::Panel,
            padding_x: 28.0,
            padding_y: 16.0,
            corner_radius: 8.0,
            blur_radius: None,
        },
    );
    table.insert(
        "blur".to_string(),
        BackgroundToken {
            kind: BackgroundKind::Blur,
            padding_x: 24.0,
            padding_y: 14.0,
            corner_radius: 16.0,
            blur_radius: Some(18.0),
        },
    );
    table.insert(
        "gradient".to_string(),
        BackgroundToken {
            kind: BackgroundKind::Gradient,
            padding_x: 32.0,
            padding_y: 20.0,
            corner_radius: 0.0,
            blur_radius: None,
        },
    );
    table
}

fn safe_area(top: f64, bottom: f64, left: f64, right: f64) -> SafeAreaProfile {
    SafeAreaProfile {
        top_percent: top,
        bottom_percent: bottom,
        left_percent: left,
        right_percent: right,
    }
}

fn safe_areas() -> BTreeMap<String, SafeAreaProfile> {
    [
        (DEFAULT_SAFE_AREA_ID, default_safe_area()),
        ("none", safe_area(0.0, 0.0, 0.0, 0.0)),
        // Right margin clears the like/comment/share rail.
        ("tiktok", safe_area(12.0, 26.0, 4.0, 16.0)),
        ("instagram_reels", safe_area(10.0, 22.0, 4.0, 14.0)),
        ("youtube_shorts", safe_area(8.0, 24.0, 4.0, 14.0)),
    ]
    .into_iter()
    .map(|(id, p)| (id.to_string(), p))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{
        DEFAULT_BACKGROUND_ID, DEFAULT_COLOR_ID, DEFAULT_PRESET_ID, DEFAULT_SAFE_AREA_ID,
        DEFAULT_TYPOGRAPHY_ID,
    };

    #[test]
    fn test_builtin_tables_contain_documented_defaults() {
        let tables = builtin_tables();
        assert!(tables.presets.contains_key(DEFAULT_PRESET_ID));
        assert!(tables.typography.contains_key(DEFAULT_TYPOGRAPHY_ID));
        assert!(tables.colors.contains_key(DEFAULT_COLOR_ID));
        assert!(tables.backgrounds.contains_key(DEFAULT_BACKGROUND_ID));
        assert!(tables.safe_areas.contains_key(DEFAULT_SAFE_AREA_ID));
    }

    #[test]
    fn test_default_preset_is_sans_shadowed_without_background() {
        let tables = builtin_tables();
        let preset = &tables.presets[DEFAULT_PRESET_ID];
        assert_eq!(preset.typography, "sans");
        assert_eq!(preset.background, "none");
        let colors = &tables.colors[&preset.colors];
        assert!(colors.shadow.is_some(), "clean_white must be shadowed");
        assert_eq!(
            tables.backgrounds[&preset.background].kind,
            BackgroundKind::None
        );
    }

    #[test]
    fn test_every_builtin_preset_references_existing_tokens() {
        let tables = builtin_tables();
        for (id, preset) in &tables.presets {
            assert!(tables.typography.contains_key(&preset.typography), "{id}");
            assert!(tables.colors.contains_key(&preset.colors), "{id}");
            assert!(tables.backgrounds.contains_key(&preset.background), "{id}");
        }
    }

    #[test]
    fn test_default_tokens_match_the_default_table_entries() {
        let tables = builtin_tables();
        assert_eq!(tables.typography[DEFAULT_TYPOGRAPHY_ID], default_typography());
        assert_eq!(tables.colors[DEFAULT_COLOR_ID], default_colors());
        assert_eq!(tables.backgrounds[DEFAULT_BACKGROUND_ID], default_background());
        assert_eq!(tables.safe_areas[DEFAULT_SAFE_AREA_ID], default_safe_area());
    }

    #[test]
    fn test_safe_area_margins_leave_usable_width() {
        for (id, profile) in builtin_tables().safe_areas {
            let horizontal = profile.left_percent + profile.right_percent;
            let vertical = profile.top_percent + profile.bottom_percent;
            assert!(horizontal < 50.0, "{id} reserves too much width");
            assert!(vertical < 60.0, "{id} reserves too much height");
        }
    }
}
