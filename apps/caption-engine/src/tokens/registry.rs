//! Token Resolver — preset id → typography / colors / background, never failing.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::errors::{EngineError, EngineResult};
use crate::tokens::tables::{
    default_background, default_colors, default_safe_area, default_typography,
};
use crate::tokens::{
    builtin_tables, BackgroundToken, ColorToken, SafeAreaProfile, TokenFallback, TokenTable,
    TokenTables, TypographyToken, DEFAULT_BACKGROUND_ID, DEFAULT_COLOR_ID, DEFAULT_PRESET_ID,
    DEFAULT_SAFE_AREA_ID, DEFAULT_TYPOGRAPHY_ID,
};

/// Tokens for one preset after fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTokens {
    /// The preset actually used (the default when the requested id is unknown).
    pub preset_id: String,
    pub typography: TypographyToken,
    pub colors: ColorToken,
    pub background: BackgroundToken,
    pub fallbacks: Vec<TokenFallback>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSafeArea {
    pub profile_id: String,
    pub profile: SafeAreaProfile,
    pub fallback: Option<TokenFallback>,
}

/// Read-only view over a validated set of token tables.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tables: TokenTables,
    default_preset_id: String,
    default_safe_area_id: String,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TokenRegistry {
    /// Registry over the built-in tables only.
    pub fn builtin() -> Self {
        Self {
            tables: builtin_tables(),
            default_preset_id: DEFAULT_PRESET_ID.to_string(),
            default_safe_area_id: DEFAULT_SAFE_AREA_ID.to_string(),
        }
    }

    /// Wraps caller-supplied tables. They must carry every documented default id.
    pub fn from_tables(tables: TokenTables) -> EngineResult<Self> {
        validate_defaults(&tables)?;
        warn_dangling_references(&tables);
        Ok(Self {
            tables,
            default_preset_id: DEFAULT_PRESET_ID.to_string(),
            default_safe_area_id: DEFAULT_SAFE_AREA_ID.to_string(),
        })
    }

    /// Built-ins, overlaid with the configured JSON file, with the configured defaults.
    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        let mut registry = Self::builtin();
        if let Some(path) = &config.token_tables_path {
            registry.load_file(path)?;
        }
        registry.set_default_preset(&config.default_preset_id);
        registry.set_default_safe_area(&config.default_safe_area_profile);
        Ok(registry)
    }

    /// Overlays a JSON token table document. On error the registry is left untouched.
    pub fn merge_json(&mut self, json: &str) -> EngineResult<()> {
        let overlay: TokenTables = serde_json::from_str(json)?;
        let mut merged = self.tables.clone();
        merged.merge(overlay);
        validate_defaults(&merged)?;
        warn_dangling_references(&merged);
        self.tables = merged;
        Ok(())
    }

    pub fn load_file(&mut self, path: &Path) -> EngineResult<()> {
        let json = std::fs::read_to_string(path)?;
        self.merge_json(&json)?;
        info!(
            path = %path.display(),
            version = self.tables.version.as_deref().unwrap_or("unversioned"),
            presets = self.tables.presets.len(),
            "Loaded caption token tables"
        );
        Ok(())
    }

    /// Replaces the fallback preset. Unknown ids are ignored (the current default stays).
    pub fn set_default_preset(&mut self, preset_id: &str) -> bool {
        if self.tables.presets.contains_key(preset_id) {
            self.default_preset_id = preset_id.to_string();
            true
        } else {
            warn!(preset_id, "Configured default preset does not exist; keeping {}", self.default_preset_id);
            false
        }
    }

    pub fn set_default_safe_area(&mut self, profile_id: &str) -> bool {
        if self.tables.safe_areas.contains_key(profile_id) {
            self.default_safe_area_id = profile_id.to_string();
            true
        } else {
            warn!(profile_id, "Configured default safe-area profile does not exist; keeping {}", self.default_safe_area_id);
            false
        }
    }

    pub fn default_preset_id(&self) -> &str {
        &self.default_preset_id
    }

    pub fn default_safe_area_id(&self) -> &str {
        &self.default_safe_area_id
    }

    pub fn tables(&self) -> &TokenTables {
        &self.tables
    }

    /// Resolves a preset id into its three tokens.
    ///
    /// Unknown preset → default preset. A preset naming an unknown token → that
    /// table's documented default. Every substitution is listed in `fallbacks`.
    pub fn resolve(&self, preset_id: &str) -> ResolvedTokens {
        let mut fallbacks = Vec::new();

        let (used_preset_id, preset) = match self.tables.presets.get_key_value(preset_id) {
            Some((id, preset)) => (id.as_str(), preset),
            None => {
                fallbacks.push(note_fallback(TokenTable::Preset, preset_id, &self.default_preset_id));
                // validate_defaults guarantees the built-in default exists.
                match self.tables.presets.get_key_value(self.default_preset_id.as_str()) {
                    Some((id, preset)) => (id.as_str(), preset),
                    None => return self.last_resort(preset_id, fallbacks),
                }
            }
        };

        let typography = lookup(
            &self.tables.typography,
            TokenTable::Typography,
            &preset.typography,
            DEFAULT_TYPOGRAPHY_ID,
            &mut fallbacks,
        );
        let colors = lookup(
            &self.tables.colors,
            TokenTable::Color,
            &preset.colors,
            DEFAULT_COLOR_ID,
            &mut fallbacks,
        );
        let background = lookup(
            &self.tables.backgrounds,
            TokenTable::Background,
            &preset.background,
            DEFAULT_BACKGROUND_ID,
            &mut fallbacks,
        );

        match (typography, colors, background) {
            (Some(typography), Some(colors), Some(background)) => ResolvedTokens {
                preset_id: used_preset_id.to_string(),
                typography,
                colors,
                background,
                fallbacks,
            },
            _ => self.last_resort(preset_id, fallbacks),
        }
    }

    /// Resolves a safe-area profile id, falling back to the default profile.
    pub fn safe_area(&self, profile_id: &str) -> ResolvedSafeArea {
        if let Some(profile) = self.tables.safe_areas.get(profile_id) {
            return ResolvedSafeArea {
                profile_id: profile_id.to_string(),
                profile: profile.clone(),
                fallback: None,
            };
        }
        let fallback = note_fallback(TokenTable::SafeArea, profile_id, &self.default_safe_area_id);
        let profile = self
            .tables
            .safe_areas
            .get(&self.default_safe_area_id)
            .cloned()
            .unwrap_or_else(default_safe_area);
        ResolvedSafeArea {
            profile_id: self.default_safe_area_id.clone(),
            profile,
            fallback: Some(fallback),
        }
    }

    /// Built-in defaults, used only if the tables were somehow stripped of them.
    fn last_resort(&self, requested: &str, mut fallbacks: Vec<TokenFallback>) -> ResolvedTokens {
        if fallbacks.iter().all(|f| f.table != TokenTable::Preset) {
            fallbacks.push(note_fallback(TokenTable::Preset, requested, DEFAULT_PRESET_ID));
        }
        ResolvedTokens {
            preset_id: DEFAULT_PRESET_ID.to_string(),
            typography: default_typography(),
            colors: default_colors(),
            background: default_background(),
            fallbacks,
        }
    }
}

fn lookup<T: Clone>(
    table: &std::collections::BTreeMap<String, T>,
    kind: TokenTable,
    id: &str,
    default_id: &str,
    fallbacks: &mut Vec<TokenFallback>,
) -> Option<T> {
    if let Some(token) = table.get(id) {
        return Some(token.clone());
    }
    fallbacks.push(note_fallback(kind, id, default_id));
    table.get(default_id).cloned()
}

fn note_fallback(table: TokenTable, requested: &str, used: &str) -> TokenFallback {
    warn!(?table, requested, used, "Unknown caption token id; using default");
    TokenFallback {
        table,
        requested: requested.to_string(),
        used: used.to_string(),
    }
}

fn validate_defaults(tables: &TokenTables) -> EngineResult<()> {
    let missing = [
        (tables.presets.contains_key(DEFAULT_PRESET_ID), "preset", DEFAULT_PRESET_ID),
        (tables.typography.contains_key(DEFAULT_TYPOGRAPHY_ID), "typography", DEFAULT_TYPOGRAPHY_ID),
        (tables.colors.contains_key(DEFAULT_COLOR_ID), "color", DEFAULT_COLOR_ID),
        (tables.backgrounds.contains_key(DEFAULT_BACKGROUND_ID), "background", DEFAULT_BACKGROUND_ID),
        (tables.safe_areas.contains_key(DEFAULT_SAFE_AREA_ID), "safe-area", DEFAULT_SAFE_AREA_ID),
    ]
    .into_iter()
    .filter(|(present, _, _)| !present)
    .map(|(_, table, id)| format!("{table} '{id}'"))
    .collect::<Vec<String>>();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EngineError::token_table(format!(
            "missing default token(s): {}",
            missing.join(", ")
        )))
    }
}

/// Dangling references are legal (they resolve to defaults) but worth a log line.
fn warn_dangling_references(tables: &TokenTables) {
    for (id, preset) in &tables.presets {
        if !tables.typography.contains_key(&preset.typography)
            || !tables.colors.contains_key(&preset.colors)
            || !tables.backgrounds.contains_key(&preset.background)
        {
            warn!(preset = %id, "Preset references a token id that does not exist");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{BackgroundKind, CaptionPreset};
    use std::io::Write;

    #[test]
    fn test_resolve_known_preset_has_no_fallbacks() {
        let registry = TokenRegistry::builtin();
        let resolved = registry.resolve("bold_pill");
        assert_eq!(resolved.preset_id, "bold_pill");
        assert_eq!(resolved.background.kind, BackgroundKind::Pill);
        assert_eq!(resolved.typography.font_weight, 800);
        assert!(resolved.fallbacks.is_empty());
    }

    #[test]
    fn test_unknown_preset_falls_back_to_clean_white() {
        let registry = TokenRegistry::builtin();
        let resolved = registry.resolve("renamed_last_week");
        assert_eq!(resolved.preset_id, "clean_white");
        assert_eq!(resolved.typography.font_family, "Inter");
        assert_eq!(resolved.background.kind, BackgroundKind::None);
        assert!(resolved.colors.shadow.is_some());
        assert_eq!(
            resolved.fallbacks,
            vec![TokenFallback {
                table: TokenTable::Preset,
                requested: "renamed_last_week".to_string(),
                used: "clean_white".to_string(),
            }]
        );
    }

    #[test]
    fn test_preset_with_dangling_token_falls_back_per_table() {
        let mut tables = builtin_tables();
        tables.presets.insert(
            "half_broken".to_string(),
            CaptionPreset {
                typography: "condensed".to_string(),
                colors: "no_such_colors".to_string(),
                background: "no_such_background".to_string(),
            },
        );
        let registry = TokenRegistry::from_tables(tables).unwrap();
        let resolved = registry.resolve("half_broken");
        assert_eq!(resolved.preset_id, "half_broken");
        assert_eq!(resolved.typography.font_family, "Oswald");
        assert_eq!(resolved.background.kind, BackgroundKind::None);
        let tables_hit: Vec<TokenTable> = resolved.fallbacks.iter().map(|f| f.table).collect();
        assert_eq!(tables_hit, vec![TokenTable::Color, TokenTable::Background]);
    }

    #[test]
    fn test_from_tables_rejects_tables_without_defaults() {
        let mut tables = builtin_tables();
        tables.presets.remove(DEFAULT_PRESET_ID);
        let err = TokenRegistry::from_tables(tables).unwrap_err();
        assert!(err.to_string().contains("preset 'clean_white'"), "{err}");
    }

    #[test]
    fn test_merge_json_adds_preset() {
        let mut registry = TokenRegistry::builtin();
        registry
            .merge_json(
                r##"{
                    "version": "2026.2",
                    "presets": {
                        "midnight": {"typography": "serif", "colors": "midnight_blue", "background": "panel"}
                    },
                    "colors": {
                        "midnight_blue": {"text_color": "#E0E8FF", "background_color": "#0B1533"}
                    }
                }"##,
            )
            .unwrap();
        let resolved = registry.resolve("midnight");
        assert!(resolved.fallbacks.is_empty());
        assert_eq!(resolved.colors.text_color, "#E0E8FF");
        assert_eq!(registry.tables().version.as_deref(), Some("2026.2"));
    }

    #[test]
    fn test_merge_json_invalid_leaves_registry_untouched() {
        let mut registry = TokenRegistry::builtin();
        let before = registry.tables().clone();
        assert!(registry.merge_json("{\"presets\": 42}").is_err());
        assert_eq!(registry.tables(), &before);
    }

    #[test]
    fn test_load_file_from_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"safe_areas": {{"kiosk": {{"top_percent": 5, "bottom_percent": 5, "left_percent": 10, "right_percent": 10}}}}}}"#
        )
        .unwrap();

        let config = EngineConfig {
            token_tables_path: Some(file.path().to_path_buf()),
            default_safe_area_profile: "kiosk".to_string(),
            ..EngineConfig::default()
        };
        let registry = TokenRegistry::from_config(&config).unwrap();
        assert_eq!(registry.default_safe_area_id(), "kiosk");
        let resolved = registry.safe_area("unknown_platform");
        assert_eq!(resolved.profile_id, "kiosk");
        assert_eq!(resolved.profile.left_percent, 10.0);
        assert!(resolved.fallback.is_some());
    }

    #[test]
    fn test_from_config_missing_file_is_io_error() {
        let config = EngineConfig {
            token_tables_path: Some("/definitely/not/here/tokens.json".into()),
            ..EngineConfig::default()
        };
        let err = TokenRegistry::from_config(&config).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }

    #[test]
    fn test_unknown_configured_default_preset_is_ignored() {
        let mut registry = TokenRegistry::builtin();
        assert!(!registry.set_default_preset("ghost"));
        assert_eq!(registry.default_preset_id(), "clean_white");
        assert!(registry.set_default_preset("cinematic"));
        assert_eq!(registry.resolve("ghost").preset_id, "cinematic");
    }

    #[test]
    fn test_known_safe_area_has_no_fallback() {
        let registry = TokenRegistry::builtin();
        let resolved = registry.safe_area("tiktok");
        assert_eq!(resolved.profile_id, "tiktok");
        assert!(resolved.fallback.is_none());
        assert_eq!(resolved.profile.right_percent, 16.0);
    }

    #[test]
    fn test_empty_tables_still_resolve_without_panicking() {
        // Bypasses validation to reach the last-resort path.
        let registry = TokenRegistry {
            tables: TokenTables::default(),
            default_preset_id: DEFAULT_PRESET_ID.to_string(),
            default_safe_area_id: DEFAULT_SAFE_AREA_ID.to_string(),
        };

        let resolved = registry.resolve("anything");
        assert_eq!(resolved.preset_id, DEFAULT_PRESET_ID);
        assert_eq!(resolved.typography, default_typography());
        assert_eq!(resolved.colors, default_colors());
        assert_eq!(resolved.background, default_background());
        assert_eq!(resolved.fallbacks.len(), 1);
        assert_eq!(resolved.fallbacks[0].table, TokenTable::Preset);

        let area = registry.safe_area("anywhere");
        assert_eq!(area.profile_id, DEFAULT_SAFE_AREA_ID);
        assert_eq!(area.profile, default_safe_area());
        assert!(area.fallback.is_some());
    }
}
