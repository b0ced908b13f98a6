//! Memoization for `fit_text_to_box`, keyed by the full input tuple.
//!
//! Interactive editing re-resolves on every keystroke and deck export fits
//! every caption twice, so repeated inputs are common. A key covers every
//! field that influences the result: any change is a different key, so an
//! entry can never be stale. One cache must only ever be used with one
//! `TextMetrics` implementation.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::layout::composer::LayoutMode;
use crate::layout::fit::{fit_text_to_box, FitResult, FitSettings};
use crate::layout::metrics::TextMetrics;

/// Canonicalized `(text, container width, FitSettings)`.
///
/// Floats are keyed by bit pattern with `-0.0` folded into `0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FitKey {
    text: String,
    container_width: u64,
    max_lines: usize,
    panel_max_width_percent: u64,
    base_font_size: u64,
    min_font_size: u64,
    padding: u64,
    line_height: u64,
    font_family: String,
    font_weight: u16,
    layout_mode: LayoutMode,
}

impl FitKey {
    pub fn new(text: &str, container_width: f64, settings: &FitSettings) -> Self {
        Self {
            text: text.to_string(),
            container_width: canonical_bits(container_width),
            max_lines: settings.max_lines,
            panel_max_width_percent: canonical_bits(settings.panel_max_width_percent),
            base_font_size: canonical_bits(settings.base_font_size),
            min_font_size: canonical_bits(settings.min_font_size),
            padding: canonical_bits(settings.padding),
            line_height: canonical_bits(settings.line_height),
            font_family: settings.font_family.clone(),
            font_weight: settings.font_weight,
            layout_mode: settings.layout_mode,
        }
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Bounded fit cache with first-in-first-out eviction. Capacity 0 disables caching.
#[derive(Debug, Clone)]
pub struct FitCache {
    entries: HashMap<FitKey, FitResult>,
    order: VecDeque<FitKey>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl FitCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.min(1024)),
            order: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.fit_cache_capacity)
    }

    /// Returns the memoized result for these inputs, computing it on a miss.
    pub fn fit(
        &mut self,
        text: &str,
        container_width: f64,
        settings: &FitSettings,
        metrics: &dyn TextMetrics,
    ) -> FitResult {
        let key = FitKey::new(text, container_width, settings);
        if let Some(hit) = self.entries.get(&key) {
            self.hits += 1;
            return hit.clone();
        }

        self.misses += 1;
        let result = fit_text_to_box(text, container_width, settings, metrics);
        if self.capacity > 0 {
            while self.entries.len() >= self.capacity {
                match self.order.pop_front() {
                    Some(oldest) => {
                        self.entries.remove(&oldest);
                    }
                    None => break,
                }
            }
            self.order.push_back(key.clone());
            self.entries.insert(key, result.clone());
        }
        result
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::metrics::StaticTextMetrics;

    fn settings() -> FitSettings {
        FitSettings {
            max_lines: 2,
            panel_max_width_percent: 90.0,
            base_font_size: 48.0,
            min_font_size: 24.0,
            padding: 12.0,
            line_height: 1.15,
            font_family: "Inter".to_string(),
            font_weight: 600,
            layout_mode: LayoutMode::Title,
        }
    }

    #[test]
    fn test_second_call_is_a_hit_with_identical_result() {
        let mut cache = FitCache::new(8);
        let s = settings();
        let first = cache.fit("Launch day is here", 1080.0, &s, &StaticTextMetrics);
        let second = cache.fit("Launch day is here", 1080.0, &s, &StaticTextMetrics);
        assert_eq!(first, second);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                entries: 1
            }
        );
    }

    #[test]
    fn test_any_settings_change_is_a_miss() {
        let mut cache = FitCache::new(8);
        let s = settings();
        cache.fit("Launch day", 1080.0, &s, &StaticTextMetrics);

        let mut heavier = s.clone();
        heavier.font_weight = 800;
        cache.fit("Launch day", 1080.0, &heavier, &StaticTextMetrics);
        cache.fit("Launch day", 720.0, &s, &StaticTextMetrics);
        cache.fit("Launch day!", 1080.0, &s, &StaticTextMetrics);

        assert_eq!(cache.stats().misses, 4);
        assert_eq!(cache.stats().hits, 0);
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_negative_zero_shares_a_key_with_zero() {
        let mut a = settings();
        a.padding = 0.0;
        let mut b = settings();
        b.padding = -0.0;
        assert_eq!(FitKey::new("x", 100.0, &a), FitKey::new("x", 100.0, &b));
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut cache = FitCache::new(2);
        let s = settings();
        cache.fit("one", 1080.0, &s, &StaticTextMetrics);
        cache.fit("two", 1080.0, &s, &StaticTextMetrics);
        cache.fit("three", 1080.0, &s, &StaticTextMetrics);
        assert_eq!(cache.len(), 2);

        // "one" was evicted; "three" is still cached.
        cache.fit("three", 1080.0, &s, &StaticTextMetrics);
        cache.fit("one", 1080.0, &s, &StaticTextMetrics);
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 4);
    }

    #[test]
    fn test_zero_capacity_never_stores() {
        let mut cache = FitCache::new(0);
        let s = settings();
        cache.fit("one", 1080.0, &s, &StaticTextMetrics);
        cache.fit("one", 1080.0, &s, &StaticTextMetrics);
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_from_config_uses_configured_capacity() {
        let config = EngineConfig {
            fit_cache_capacity: 3,
            ..EngineConfig::default()
        };
        assert_eq!(FitCache::from_config(&config).capacity(), 3);
    }

    #[test]
    fn test_clear_keeps_counters() {
        let mut cache = FitCache::new(4);
        let s = settings();
        cache.fit("one", 1080.0, &s, &StaticTextMetrics);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 1);
    }
}
