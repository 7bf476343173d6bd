//! Smoke tuning parameters

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Parameters shared by every particle in a pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    /// Pool size
    pub particle_count: usize,
    /// Lifespan in seconds (must be > 0)
    pub max_life: f32,
    /// Vertical rise per second of life
    pub rise_rate: f32,
    /// Scale at spawn
    pub base_scale: f32,
    /// Scale added over a full life
    pub expansion_rate: f32,
    /// Opacity ceiling in [0, 1]
    pub max_opacity: f32,
    /// Lateral turbulence gain at the end of life
    pub turbulence: f32,
    /// Slowest life multiplier
    pub speed_min: f32,
    /// Spread of life multipliers above `speed_min`
    pub speed_range: f32,
    /// Full width of the per-axis wind drift distribution
    pub drift_extent: f32,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            max_life: MAX_LIFE,
            rise_rate: RISE_RATE,
            base_scale: BASE_SCALE,
            expansion_rate: EXPANSION_RATE,
            max_opacity: MAX_OPACITY,
            turbulence: TURBULENCE,
            speed_min: SPEED_MIN,
            speed_range: SPEED_RANGE,
            drift_extent: DRIFT_EXTENT,
        }
    }
}

impl SmokeConfig {
    /// Copy with every field forced into its valid range
    ///
    /// Never fails; out-of-range values are replaced and logged.
    pub fn sanitized(&self) -> Self {
        let mut config = *self;

        if !(config.max_life > 0.0 && config.max_life.is_finite()) {
            log::warn!(
                "Smoke max_life {} is not a positive duration, using {}",
                config.max_life,
                MAX_LIFE
            );
            config.max_life = MAX_LIFE;
        }
        if !config.max_opacity.is_finite() || !(0.0..=1.0).contains(&config.max_opacity) {
            let clamped = if config.max_opacity.is_finite() {
                config.max_opacity.clamp(0.0, 1.0)
            } else {
                MAX_OPACITY
            };
            log::warn!("Smoke max_opacity {} clamped to {}", config.max_opacity, clamped);
            config.max_opacity = clamped;
        }

        config.rise_rate = finite_or(config.rise_rate, RISE_RATE);
        config.turbulence = finite_or(config.turbulence, TURBULENCE);
        config.drift_extent = finite_or(config.drift_extent, DRIFT_EXTENT).max(0.0);
        config.base_scale = finite_or(config.base_scale, BASE_SCALE).max(0.0);
        // Negative expansion would shrink below base_scale
        config.expansion_rate = finite_or(config.expansion_rate, EXPANSION_RATE).max(0.0);
        config.speed_min = finite_or(config.speed_min, SPEED_MIN).max(0.0);
        config.speed_range = finite_or(config.speed_range, SPEED_RANGE).max(0.0);

        config
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        log::warn!("Non-finite smoke parameter replaced with {}", fallback);
        fallback
    }
}
