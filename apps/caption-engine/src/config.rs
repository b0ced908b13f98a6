use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::tokens::{DEFAULT_PRESET_ID, DEFAULT_SAFE_AREA_ID};

const DEFAULT_FIT_CACHE_CAPACITY: usize = 256;

/// Engine configuration loaded from environment variables.
/// Every variable is optional; missing ones fall back to the documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Preset used when a request names an unknown preset id.
    pub default_preset_id: String,
    /// Safe-area profile used when a request names an unknown profile id.
    pub default_safe_area_profile: String,
    /// Maximum number of memoized fit results held by a `FitCache`.
    pub fit_cache_capacity: usize,
    /// Optional JSON token table document merged over the built-in tables.
    pub token_tables_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_preset_id: DEFAULT_PRESET_ID.to_string(),
            default_safe_area_profile: DEFAULT_SAFE_AREA_ID.to_string(),
            fit_cache_capacity: DEFAULT_FIT_CACHE_CAPACITY,
            token_tables_path: None,
            rust_log: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parses the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let fit_cache_capacity = match non_empty("CAPTION_FIT_CACHE_CAPACITY") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .context("CAPTION_FIT_CACHE_CAPACITY must be a non-negative integer")?,
            None => defaults.fit_cache_capacity,
        };

        Ok(EngineConfig {
            default_preset_id: non_empty("CAPTION_DEFAULT_PRESET")
                .unwrap_or(defaults.default_preset_id),
            default_safe_area_profile: non_empty("CAPTION_SAFE_AREA_PROFILE")
                .unwrap_or(defaults.default_safe_area_profile),
            fit_cache_capacity,
            token_tables_path: non_empty("CAPTION_TOKEN_TABLES").map(PathBuf::from),
            rust_log: non_empty("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}
