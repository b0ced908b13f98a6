//! Safe-area resolution: profile margins → pixel insets and usable width.

use serde::{Deserialize, Serialize};

use crate::tokens::{SafeAreaProfile, TokenFallback, TokenRegistry};

/// Horizontal insets are known in px (the container width is); vertical ones
/// stay relative because the engine never sees the container height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeAreaInsets {
    pub top_percent: f64,
    pub bottom_percent: f64,
    pub left_px: f64,
    pub right_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeArea {
    pub profile_id: String,
    pub insets: SafeAreaInsets,
    /// Container width left between the horizontal insets.
    pub usable_width: f64,
    pub fallback: Option<TokenFallback>,
}

/// Applies a profile to a container. Out-of-range margins are clamped to 0–100%
/// and insets that would overlap leave zero usable width.
pub fn apply_profile(profile: &SafeAreaProfile, container_width: f64) -> (SafeAreaInsets, f64) {
    let width = container_width.max(0.0);
    let pct = |v: f64| v.clamp(0.0, 100.0) / 100.0;
    let left_px = width * pct(profile.left_percent);
    let right_px = width * pct(profile.right_percent);
    let usable_width = (width - left_px - right_px).max(0.0);
    (
        SafeAreaInsets {
            top_percent: profile.top_percent.clamp(0.0, 100.0),
            bottom_percent: profile.bottom_percent.clamp(0.0, 100.0),
            left_px,
            right_px,
        },
        usable_width,
    )
}

/// Looks up `profile_id` (falling back to the registry default) and applies it.
pub fn resolve_safe_area(registry: &TokenRegistry, profile_id: &str, container_width: f64) -> SafeArea {
    let resolved = registry.safe_area(profile_id);
    let (insets, usable_width) = apply_profile(&resolved.profile, container_width);
    SafeArea {
        profile_id: resolved.profile_id,
        insets,
        usable_width,
        fallback: resolved.fallback,
    }
}
