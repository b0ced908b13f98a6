//! Style Resolver — turns a caption render request into a renderable style.
//!
//! Orchestration only: tokens come from the `TokenRegistry`, margins from the
//! safe-area profile, lines and font size from the fit engine. The sizing
//! policy (ceiling, floor, line cap, panel share) lives here.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::errors::EngineResult;
use crate::layout::cache::FitCache;
use crate::layout::composer::LayoutMode;
use crate::layout::deck::{self, effective_ceiling, DeckCaption, DeckMeasurement};
use crate::layout::fit::{fit_text_to_box, FitResult, FitSettings};
use crate::layout::metrics::{StaticTextMetrics, TextMetrics};
use crate::layout::wrap::{wrap_words, FontSpec};
use crate::style::safe_area::{resolve_safe_area, SafeArea, SafeAreaInsets};
use crate::tokens::{
    BackgroundKind, OutlineSpec, ResolvedTokens, ShadowSpec, TextTransform, TokenFallback,
    TokenRegistry, DEFAULT_PRESET_ID, DEFAULT_SAFE_AREA_ID,
};

/// Non-fullscreen captions scale the typography base size by this.
pub const WINDOWED_SCALE: f64 = 0.7;
/// Paragraph captions scale by this on top of the windowed factor.
pub const PARAGRAPH_SCALE: f64 = 0.85;
/// Supporting text is set at exactly this share of the headline size.
pub const SUPPORTING_TEXT_RATIO: f64 = 0.5;
/// Karaoke glow radius as a share of the headline size.
pub const KARAOKE_GLOW_RATIO: f64 = 0.35;

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

/// The author's font-size preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePreference {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizePreference {
    pub fn multiplier(&self) -> f64 {
        match self {
            SizePreference::Small => 0.9,
            SizePreference::Medium => 1.1,
            SizePreference::Large => 1.35,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionRenderRequest {
    pub preset_id: String,
    pub full_screen: bool,
    pub safe_area_profile_id: String,
    pub headline_text: String,
    pub layout_mode: LayoutMode,
    #[serde(default)]
    pub size_preference: SizePreference,
    #[serde(default)]
    pub global_scale_factor: Option<f64>,
    /// Shared ceiling from a deck measurement.
    #[serde(default)]
    pub deck_target_font_size: Option<f64>,
    pub container_width: f64,
    #[serde(default)]
    pub supporting_text: Option<String>,
    #[serde(default)]
    pub karaoke: bool,
}

impl Default for CaptionRenderRequest {
    fn default() -> Self {
        Self {
            preset_id: DEFAULT_PRESET_ID.to_string(),
            full_screen: true,
            safe_area_profile_id: DEFAULT_SAFE_AREA_ID.to_string(),
            headline_text: String::new(),
            layout_mode: LayoutMode::Title,
            size_preference: SizePreference::Medium,
            global_scale_factor: None,
            deck_target_font_size: None,
            container_width: 1080.0,
            supporting_text: None,
            karaoke: false,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAnchor {
    /// Centered in the safe area (fullscreen title cards).
    Center,
    /// Sitting on the bottom safe-area margin.
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerStyle {
    pub width: f64,
    pub usable_width: f64,
    pub safe_area_profile_id: String,
    pub safe_area: SafeAreaInsets,
    pub anchor: VerticalAnchor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelStyle {
    pub kind: BackgroundKind,
    pub width: f64,
    pub height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    pub corner_radius: f64,
    pub blur_radius: Option<f64>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlowSpec {
    pub radius: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    pub font_weight: u16,
    pub font_size: f64,
    /// Line box height in px.
    pub line_height: f64,
    /// Tracking in px at `font_size`.
    pub letter_spacing: f64,
    pub color: String,
    pub shadow: Option<ShadowSpec>,
    pub glow: Option<GlowSpec>,
    pub outline: Option<OutlineSpec>,
    pub text_transform: Option<TextTransform>,
    pub lines: Vec<String>,
}

/// Everything the rendering pipeline needs to paint one caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedCaptionStyle {
    pub preset_id: String,
    pub layout_mode: LayoutMode,
    pub container: ContainerStyle,
    pub panel: PanelStyle,
    pub headline: TextStyle,
    pub supporting: Option<TextStyle>,
    /// Ceiling handed to the fit engine (after any deck cap).
    pub base_font_size: f64,
    /// Floor handed to the fit engine.
    pub min_font_size: f64,
    pub fit: FitResult,
    /// Unknown token / safe-area ids that were replaced by defaults.
    pub fallbacks: Vec<TokenFallback>,
}

// ────────────────────────────────────────────────────────────────────────────
// Sizing policy
// ────────────────────────────────────────────────────────────────────────────

/// Fit ceiling: token base × windowed × paragraph × preference × global scale,
/// capped at the deck target when one is given.
pub fn base_font_size(
    typography_base: f64,
    full_screen: bool,
    layout_mode: LayoutMode,
    size_preference: SizePreference,
    global_scale_factor: Option<f64>,
    deck_target_font_size: Option<f64>,
) -> f64 {
    let mut size = typography_base;
    if !full_screen {
        size *= WINDOWED_SCALE;
    }
    if layout_mode == LayoutMode::Paragraph {
        size *= PARAGRAPH_SCALE;
    }
    size *= size_preference.multiplier();
    if let Some(scale) = global_scale_factor.filter(|s| s.is_finite() && *s > 0.0) {
        size *= scale;
    }
    effective_ceiling(size, deck_target_font_size)
}

/// Fit floor by fullscreen × layout mode, scaled by the size preference.
pub fn min_font_size(full_screen: bool, layout_mode: LayoutMode, size_preference: SizePreference) -> f64 {
    let floor = match (full_screen, layout_mode) {
        (true, LayoutMode::Title) => 32.0,
        (true, LayoutMode::Paragraph) => 24.0,
        (false, LayoutMode::Title) => 24.0,
        (false, LayoutMode::Paragraph) => 18.0,
    };
    floor * size_preference.multiplier()
}

pub fn max_lines_for(full_screen: bool, layout_mode: LayoutMode) -> usize {
    match (layout_mode, full_screen) {
        (LayoutMode::Title, _) => 3,
        (LayoutMode::Paragraph, true) => 6,
        (LayoutMode::Paragraph, false) => 4,
    }
}

pub fn panel_max_width_percent(full_screen: bool) -> f64 {
    if full_screen {
        90.0
    } else {
        84.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolver
// ────────────────────────────────────────────────────────────────────────────

/// A request with its tokens, safe area and fit settings worked out.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCaption {
    pub tokens: ResolvedTokens,
    pub safe_area: SafeArea,
    /// Headline after the typography's text transform.
    pub headline: String,
    pub settings: FitSettings,
}

/// The façade. Cheap to clone; holds no per-request state.
#[derive(Clone)]
pub struct StyleResolver {
    registry: TokenRegistry,
    metrics: Arc<dyn TextMetrics>,
}

impl StyleResolver {
    pub fn new(registry: TokenRegistry, metrics: Arc<dyn TextMetrics>) -> Self {
        Self { registry, metrics }
    }

    /// Built-in tables measured with `StaticTextMetrics`.
    pub fn builtin() -> Self {
        Self::new(TokenRegistry::builtin(), Arc::new(StaticTextMetrics))
    }

    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        Ok(Self::new(
            TokenRegistry::from_config(config)?,
            Arc::new(StaticTextMetrics),
        ))
    }

    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    pub fn metrics(&self) -> &dyn TextMetrics {
        self.metrics.as_ref()
    }

    /// Resolves tokens and safe area and derives the fit settings.
    pub fn prepare(&self, request: &CaptionRenderRequest) -> PreparedCaption {
        let tokens = self.registry.resolve(&request.preset_id);
        let safe_area = resolve_safe_area(
            &self.registry,
            &request.safe_area_profile_id,
            request.container_width,
        );

        let base = base_font_size(
            tokens.typography.base_font_size,
            request.full_screen,
            request.layout_mode,
            request.size_preference,
            request.global_scale_factor,
            request.deck_target_font_size,
        );
        let floor = min_font_size(request.full_screen, request.layout_mode, request.size_preference);

        let settings = FitSettings {
            max_lines: max_lines_for(request.full_screen, request.layout_mode),
            panel_max_width_percent: panel_max_width_percent(request.full_screen),
            base_font_size: base,
            // A deck target below the floor pulls the floor down with it.
            min_font_size: floor.min(base),
            padding: tokens.background.padding_x,
            line_height: tokens.typography.line_height,
            font_family: tokens.typography.font_family.clone(),
            font_weight: tokens.typography.font_weight,
            layout_mode: request.layout_mode,
        };

        let headline = match tokens.typography.text_transform {
            Some(transform) => transform.apply(&request.headline_text),
            None => request.headline_text.clone(),
        };

        PreparedCaption {
            tokens,
            safe_area,
            headline,
            settings,
        }
    }

    pub fn resolve(&self, request: &CaptionRenderRequest) -> RenderedCaptionStyle {
        let prepared = self.prepare(request);
        let fit = fit_text_to_box(
            &prepared.headline,
            prepared.safe_area.usable_width,
            &prepared.settings,
            self.metrics.as_ref(),
        );
        self.assemble(request, prepared, fit)
    }

    /// Same as `resolve`, memoizing the fit in `cache`.
    pub fn resolve_cached(
        &self,
        request: &CaptionRenderRequest,
        cache: &mut FitCache,
    ) -> RenderedCaptionStyle {
        let prepared = self.prepare(request);
        let fit = cache.fit(
            &prepared.headline,
            prepared.safe_area.usable_width,
            &prepared.settings,
            self.metrics.as_ref(),
        );
        self.assemble(request, prepared, fit)
    }

    /// Solo-fits every caption at its own ceiling (any deck target already on a
    /// request is ignored) and returns the shared target.
    pub fn measure_deck(&self, requests: &[CaptionRenderRequest]) -> DeckMeasurement {
        if let Some(first) = requests.first() {
            if requests.iter().any(|r| r.container_width != first.container_width) {
                warn!("Caption deck mixes container widths; measuring each caption in its own");
            }
        }

        let captions: Vec<DeckCaption> = requests
            .iter()
            .map(|request| {
                let solo_request = CaptionRenderRequest {
                    deck_target_font_size: None,
                    ..request.clone()
                };
                let prepared = self.prepare(&solo_request);
                DeckCaption {
                    text: prepared.headline,
                    container_width: prepared.safe_area.usable_width,
                    settings: prepared.settings,
                }
            })
            .collect();

        deck::measure_deck(&captions, self.metrics.as_ref())
    }

    /// Measures the deck, then resolves every caption under the shared ceiling.
    pub fn resolve_deck(&self, requests: &[CaptionRenderRequest]) -> Vec<RenderedCaptionStyle> {
        let measurement = self.measure_deck(requests);
        requests
            .iter()
            .map(|request| {
                let capped = CaptionRenderRequest {
                    deck_target_font_size: measurement.deck_target_font_size,
                    ..request.clone()
                };
                self.resolve(&capped)
            })
            .collect()
    }

    fn assemble(
        &self,
        request: &CaptionRenderRequest,
        prepared: PreparedCaption,
        fit: FitResult,
    ) -> RenderedCaptionStyle {
        let PreparedCaption {
            tokens,
            safe_area,
            settings,
            ..
        } = prepared;
        let typography = &tokens.typography;
        let colors = &tokens.colors;
        let background = &tokens.background;
        let font_size = fit.font_size;

        let (shadow, glow) = if request.karaoke {
            (
                None,
                Some(GlowSpec {
                    radius: font_size * KARAOKE_GLOW_RATIO,
                    color: colors.text_color.clone(),
                }),
            )
        } else {
            (colors.shadow.clone(), None)
        };

        let headline = TextStyle {
            font_family: typography.font_family.clone(),
            font_weight: typography.font_weight,
            font_size,
            line_height: font_size * typography.line_height,
            letter_spacing: typography.letter_spacing * font_size,
            color: colors.text_color.clone(),
            shadow,
            glow,
            outline: colors.outline.clone(),
            text_transform: typography.text_transform,
            lines: fit.lines.clone(),
        };

        let max_panel_width = settings.max_panel_width(safe_area.usable_width);
        let available = settings.available_width(safe_area.usable_width);
        let mut panel_width = fit.panel_width;
        let mut content_height = fit.line_count as f64 * headline.line_height;

        let supporting = request
            .supporting_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(|text| {
                let size = font_size * SUPPORTING_TEXT_RATIO;
                let font = FontSpec {
                    family: &typography.font_family,
                    weight: typography.font_weight,
                    size_px: size,
                };
                let wrapped = wrap_words(text, available, &font, self.metrics.as_ref());
                let widest = wrapped.iter().map(|l| l.width).fold(0.0_f64, f64::max);
                panel_width = panel_width.max((widest + 2.0 * background.padding_x).min(max_panel_width));
                content_height += wrapped.len() as f64 * size * typography.line_height;
                TextStyle {
                    font_family: typography.font_family.clone(),
                    font_weight: typography.font_weight,
                    font_size: size,
                    line_height: size * typography.line_height,
                    letter_spacing: typography.letter_spacing * size,
                    color: colors.text_color.clone(),
                    shadow: colors.shadow.clone(),
                    glow: None,
                    outline: colors.outline.clone(),
                    text_transform: None,
                    lines: wrapped.into_iter().map(|l| l.text).collect(),
                }
            });

        let panel = PanelStyle {
            kind: background.kind,
            width: panel_width,
            height: content_height + 2.0 * background.padding_y,
            padding_x: background.padding_x,
            padding_y: background.padding_y,
            corner_radius: background.corner_radius,
            blur_radius: background.blur_radius,
            background_color: colors.background_color.clone(),
        };

        let container = ContainerStyle {
            width: request.container_width,
            usable_width: safe_area.usable_width,
            safe_area_profile_id: safe_area.profile_id.clone(),
            safe_area: safe_area.insets.clone(),
            anchor: if request.full_screen {
                VerticalAnchor::Center
            } else {
                VerticalAnchor::Bottom
            },
        };

        let mut fallbacks = tokens.fallbacks.clone();
        fallbacks.extend(safe_area.fallback.clone());

        debug!(
            preset = %tokens.preset_id,
            font_size,
            lines = fit.line_count,
            fitted = fit.fitted,
            "Resolved caption style"
        );

        RenderedCaptionStyle {
            preset_id: tokens.preset_id.clone(),
            layout_mode: request.layout_mode,
            container,
            panel,
            headline,
            supporting,
            base_font_size: settings.base_font_size,
            min_font_size: settings.min_font_size,
            fit,
            fallbacks,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenTable;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn request(text: &str) -> CaptionRenderRequest {
        CaptionRenderRequest {
            headline_text: text.to_string(),
            ..CaptionRenderRequest::default()
        }
    }

    #[test]
    fn test_fullscreen_title_medium_ceiling_and_floor() {
        let ceiling = base_font_size(48.0, true, LayoutMode::Title, SizePreference::Medium, None, None);
        let floor = min_font_size(true, LayoutMode::Title, SizePreference::Medium);
        assert!(approx(ceiling, 52.8), "got {ceiling}");
        assert!(approx(floor, 35.2), "got {floor}");
    }

    #[test]
    fn test_windowed_paragraph_medium_ceiling_and_floor() {
        let ceiling =
            base_font_size(48.0, false, LayoutMode::Paragraph, SizePreference::Medium, None, None);
        let floor = min_font_size(false, LayoutMode::Paragraph, SizePreference::Medium);
        assert!(approx(ceiling, 31.416), "got {ceiling}");
        assert!(approx(floor, 19.8), "got {floor}");
    }

    #[test]
    fn test_global_scale_and_deck_target_apply() {
        let scaled =
            base_font_size(48.0, true, LayoutMode::Title, SizePreference::Small, Some(0.5), None);
        assert!(approx(scaled, 21.6));
        let capped =
            base_font_size(48.0, true, LayoutMode::Title, SizePreference::Large, None, Some(40.0));
        assert_eq!(capped, 40.0);
        let ignored_bad_scale =
            base_font_size(48.0, true, LayoutMode::Title, SizePreference::Small, Some(-2.0), None);
        assert!(approx(ignored_bad_scale, 43.2));
    }

    #[test]
    fn test_resolve_clean_white_default_sizes() {
        let resolver = StyleResolver::builtin();
        let style = resolver.resolve(&request("Welcome back"));
        assert_eq!(style.preset_id, "clean_white");
        assert!(approx(style.base_font_size, 52.8));
        assert!(approx(style.min_font_size, 35.2));
        assert!(style.fit.fitted);
        assert_eq!(style.headline.font_size, style.fit.font_size);
        assert!(style.headline.font_size <= style.base_font_size);
        assert_eq!(style.headline.lines, vec!["Welcome back"]);
        assert!(style.fallbacks.is_empty());
    }

    #[test]
    fn test_supporting_text_is_half_headline_size() {
        let resolver = StyleResolver::builtin();
        let style = resolver.resolve(&CaptionRenderRequest {
            supporting_text: Some("Episode 4 · The long road home".to_string()),
            ..request("Chapter Four")
        });
        let supporting = style.supporting.expect("supporting text style");
        assert_eq!(supporting.font_size, style.headline.font_size / 2.0);
        assert!(!supporting.lines.is_empty());
        assert!(style.panel.height > style.headline.line_height);
    }

    #[test]
    fn test_blank_supporting_text_is_dropped() {
        let resolver = StyleResolver::builtin();
        let style = resolver.resolve(&CaptionRenderRequest {
            supporting_text: Some("   ".to_string()),
            ..request("Chapter Four")
        });
        assert!(style.supporting.is_none());
    }

    #[test]
    fn test_panel_stays_inside_safe_area_share() {
        let resolver = StyleResolver::builtin();
        let long = "An absolutely enormous headline that keeps going and going well past \
                    what any sensible editor would allow in a single caption card";
        let style = resolver.resolve(&CaptionRenderRequest {
            preset_id: "news_panel".to_string(),
            safe_area_profile_id: "tiktok".to_string(),
            ..request(long)
        });
        let limit = style.container.usable_width * panel_max_width_percent(true) / 100.0;
        assert!(style.panel.width <= limit + 1e-9);
        assert!(style.fit.font_size >= style.min_font_size);
        if style.fit.fitted {
            assert!(style.fit.line_count <= 3);
        }
    }

    #[test]
    fn test_uppercase_transform_applies_before_fit() {
        let resolver = StyleResolver::builtin();
        let style = resolver.resolve(&CaptionRenderRequest {
            preset_id: "bold_pill".to_string(),
            ..request("big sale today")
        });
        assert_eq!(style.headline.lines.join(" "), "BIG SALE TODAY");
        assert_eq!(style.panel.kind, BackgroundKind::Pill);
        assert_eq!(style.panel.background_color.as_deref(), Some("#FFD60A"));
    }

    #[test]
    fn test_unknown_ids_fail_soft_and_are_reported() {
        let resolver = StyleResolver::builtin();
        let style = resolver.resolve(&CaptionRenderRequest {
            preset_id: "deleted_preset".to_string(),
            safe_area_profile_id: "deleted_platform".to_string(),
            ..request("Still renders")
        });
        assert_eq!(style.preset_id, "clean_white");
        assert_eq!(style.container.safe_area_profile_id, "universal");
        let tables: Vec<TokenTable> = style.fallbacks.iter().map(|f| f.table).collect();
        assert_eq!(tables, vec![TokenTable::Preset, TokenTable::SafeArea]);
    }

    #[test]
    fn test_karaoke_swaps_shadow_for_glow() {
        let resolver = StyleResolver::builtin();
        let plain = resolver.resolve(&request("Sing along"));
        let karaoke = resolver.resolve(&CaptionRenderRequest {
            karaoke: true,
            ..request("Sing along")
        });
        assert!(plain.headline.shadow.is_some());
        assert!(plain.headline.glow.is_none());
        assert!(karaoke.headline.shadow.is_none());
        let glow = karaoke.headline.glow.expect("karaoke glow");
        assert!(approx(glow.radius, karaoke.headline.font_size * KARAOKE_GLOW_RATIO));
        // Styling only: layout is identical.
        assert_eq!(plain.fit, karaoke.fit);
    }

    #[test]
    fn test_anchor_follows_fullscreen_flag() {
        let resolver = StyleResolver::builtin();
        let full = resolver.resolve(&request("Anchor"));
        let windowed = resolver.resolve(&CaptionRenderRequest {
            full_screen: false,
            ..request("Anchor")
        });
        assert_eq!(full.container.anchor, VerticalAnchor::Center);
        assert_eq!(windowed.container.anchor, VerticalAnchor::Bottom);
    }

    #[test]
    fn test_deck_target_below_floor_lowers_floor() {
        let resolver = StyleResolver::builtin();
        let style = resolver.resolve(&CaptionRenderRequest {
            deck_target_font_size: Some(20.0),
            ..request("Tiny")
        });
        assert_eq!(style.base_font_size, 20.0);
        assert_eq!(style.min_font_size, 20.0);
        assert_eq!(style.fit.font_size, 20.0);
    }

    #[test]
    fn test_resolve_cached_matches_resolve() {
        let resolver = StyleResolver::builtin();
        let mut cache = FitCache::new(16);
        let req = request("Memoize me please");
        let direct = resolver.resolve(&req);
        let first = resolver.resolve_cached(&req, &mut cache);
        let second = resolver.resolve_cached(&req, &mut cache);
        assert_eq!(direct, first);
        assert_eq!(first, second);
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_resolve_deck_renders_one_font_size() {
        let resolver = StyleResolver::builtin();
        let requests = vec![
            request("Day one"),
            request(
                "Day two was a marathon of meetings, demos, late night debugging sessions \
                 and far too much coffee for anyone's good",
            ),
            request("Day three: launch"),
        ];
        let measurement = resolver.measure_deck(&requests);
        let target = measurement.deck_target_font_size.expect("non-empty deck");
        for (ceiling, solo) in measurement.effective_ceilings.iter().zip(&measurement.solo) {
            assert_eq!(*ceiling, solo.base_font_size.min(target));
        }

        let styles = resolver.resolve_deck(&requests);
        assert_eq!(styles.len(), 3);
        for style in &styles {
            assert_eq!(style.base_font_size, target);
            assert_eq!(style.fit.font_size, target);
        }
    }

    #[test]
    fn test_measure_deck_ignores_stale_deck_target() {
        let resolver = StyleResolver::builtin();
        let stale = CaptionRenderRequest {
            deck_target_font_size: Some(10.0),
            ..request("Hello")
        };
        let measurement = resolver.measure_deck(&[stale]);
        assert!(measurement.deck_target_font_size.unwrap() > 10.0);
    }

    #[test]
    fn test_empty_deck_resolves_to_nothing() {
        let resolver = StyleResolver::builtin();
        assert!(resolver.resolve_deck(&[]).is_empty());
        assert_eq!(resolver.measure_deck(&[]).deck_target_font_size, None);
    }

    #[test]
    fn test_rendered_style_serializes() {
        let resolver = StyleResolver::builtin();
        let style = resolver.resolve(&request("Serialize"));
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["layout_mode"], "title");
        assert_eq!(json["panel"]["kind"], "none");
        assert!(json["fit"]["overflow_log"].is_array());
    }
}
