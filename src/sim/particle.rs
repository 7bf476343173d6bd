//! A single smoke particle and its life cycle
//!
//! A particle rises linearly with elapsed life, sways with an age-scaled
//! turbulence, tumbles, expands, and fades in then out. When its life runs
//! out it is recycled in place back to its spawn state.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::config::SmokeConfig;

/// Slow sway angular frequency per axis (x, z), rad per second of life
const SWAY_FREQUENCY: Vec2 = Vec2::new(1.5, 1.2);
/// Slow sway amplitude at unit turbulence
const SWAY_GAIN: f32 = 0.25;
/// Fast jitter angular frequency per axis (x, z)
const JITTER_FREQUENCY: Vec2 = Vec2::new(4.0, 3.5);
/// Fast jitter amplitude at unit turbulence
const JITTER_GAIN: f32 = 0.08;
/// Tumble rate about x and z, rad per second
pub const TUMBLE_RATE: Vec2 = Vec2::new(0.5, 0.2);
/// Fraction of life spent fading in
pub const FADE_IN_END: f32 = 0.1;

/// Outcome of advancing one particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleStep {
    /// Continuous evolution
    Alive,
    /// Life ran out and the particle was reset to its spawn state
    Recycled,
}

/// Pooled smoke particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Fixed spawn point
    pub origin: Vec3,
    /// Seconds of life elapsed, always in [0, max_life)
    pub life: f32,
    /// Lifespan in seconds
    pub max_life: f32,
    /// Life multiplier
    pub speed: f32,
    /// Horizontal wind bias (x, z) reached at end of life
    pub drift: Vec2,
    /// Phase offset for the sway
    pub seed: f32,

    // Derived every update
    pub position: Vec3,
    /// Accumulated tumble about x and z
    pub rotation: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

impl Particle {
    /// Create a particle at `life` and derive its outputs
    ///
    /// `config` is sanitized first, so a non-positive `max_life` falls back
    /// to the default lifespan.
    pub fn new(
        origin: Vec3,
        life: f32,
        speed: f32,
        drift: Vec2,
        seed: f32,
        config: &SmokeConfig,
    ) -> Self {
        let config = &config.sanitized();
        let mut particle = Self {
            origin,
            life: 0.0,
            max_life: config.max_life,
            speed,
            drift,
            seed,
            position: origin,
            rotation: Vec2::ZERO,
            scale: config.base_scale,
            opacity: 0.0,
        };
        if life > 0.0 && life < particle.max_life {
            particle.life = life;
        }
        particle.derive(config);
        particle
    }

    /// Elapsed fraction of life, in [0, 1)
    #[inline]
    pub fn progress(&self) -> f32 {
        self.life / self.max_life
    }

    /// Advance by `dt` seconds of wall time
    pub fn update(&mut self, dt: f32, config: &SmokeConfig) -> ParticleStep {
        let dt = sanitize_dt(dt);
        self.life += dt * self.speed;

        if self.life >= self.max_life {
            self.recycle(config);
            return ParticleStep::Recycled;
        }

        self.rotation += TUMBLE_RATE * dt;
        self.derive(config);
        ParticleStep::Alive
    }

    /// Reset to the spawn state: at the origin, smallest and invisible
    pub fn recycle(&mut self, config: &SmokeConfig) {
        self.life = 0.0;
        self.position = self.origin;
        self.rotation = Vec2::ZERO;
        self.scale = config.base_scale;
        self.opacity = 0.0;
    }

    /// Recompute position, scale and opacity from `life`
    fn derive(&mut self, config: &SmokeConfig) {
        let t = self.life;
        let progress = self.progress();
        let turbulence = progress * config.turbulence;

        let sway = Vec2::new(
            (t * SWAY_FREQUENCY.x + self.seed).sin(),
            (t * SWAY_FREQUENCY.y + self.seed).cos(),
        ) * SWAY_GAIN;
        let jitter = Vec2::new(
            (t * JITTER_FREQUENCY.x).sin(),
            (t * JITTER_FREQUENCY.y).cos(),
        ) * JITTER_GAIN;
        let lateral = (sway + jitter) * turbulence + self.drift * progress;

        self.position = Vec3::new(
            self.origin.x + lateral.x,
            self.origin.y + t * config.rise_rate,
            self.origin.z + lateral.y,
        );
        self.scale = config.base_scale + progress * config.expansion_rate;
        self.opacity = opacity_curve(progress) * config.max_opacity;
    }
}

/// Unscaled opacity at `progress`: linear fade in over the first tenth of
/// life, then a quadratic ease out to zero at the end
pub fn opacity_curve(progress: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    if progress < FADE_IN_END {
        progress / FADE_IN_END
    } else {
        let fade = (progress - FADE_IN_END) / (1.0 - FADE_IN_END);
        1.0 - fade * fade
    }
}

/// Frame deltas never run time backwards
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() { dt.max(0.0) } else { 0.0 }
}
