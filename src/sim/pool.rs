//! Fixed-size recycling particle pool
//!
//! Particles are allocated once in `spawn_pool` and never added or removed
//! afterwards. All randomness is drawn here at spawn time from the injected
//! generator; `update` is fully deterministic.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::SmokeConfig;
use super::particle::{Particle, ParticleStep};
use crate::consts::EMITTER_JITTER;

/// Upper bound of the sway phase offset
const SEED_RANGE: f32 = 100.0;

/// Source of spawn points for new particles
pub trait OriginSampler {
    fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec3;
}

/// Every particle spawns at the same point
impl OriginSampler for Vec3 {
    fn sample<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Vec3 {
        *self
    }
}

/// Uniform jitter within a horizontal square around a fixed point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquareJitter {
    pub center: Vec3,
    /// Side length of the square
    pub size: f32,
}

impl Default for SquareJitter {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            size: EMITTER_JITTER,
        }
    }
}

impl SquareJitter {
    pub fn new(center: Vec3, size: f32) -> Self {
        Self {
            center,
            size: size.max(0.0),
        }
    }
}

impl OriginSampler for SquareJitter {
    fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec3 {
        let x = (rng.random::<f32>() - 0.5) * self.size;
        let z = (rng.random::<f32>() - 0.5) * self.size;
        self.center + Vec3::new(x, 0.0, z)
    }
}

/// Pool of smoke particles sharing one configuration
///
/// Only `spawn_pool` builds one, so `config` is always sanitized.
#[derive(Debug, Clone, Serialize)]
pub struct ParticlePool {
    config: SmokeConfig,
    /// Stable order; index `i` always refers to the same visual instance
    pub particles: Vec<Particle>,
    /// Total recycle transitions since spawn
    pub recycled: u64,
}

impl ParticlePool {
    /// Sanitized configuration shared by every particle
    pub fn config(&self) -> &SmokeConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Advance every particle by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        update(self, dt);
    }
}

/// Build a pool of `count` particles with randomized phase, speed, drift and
/// spawn point
pub fn spawn_pool<S, R>(
    count: usize,
    origins: &mut S,
    config: &SmokeConfig,
    rng: &mut R,
) -> ParticlePool
where
    S: OriginSampler,
    R: Rng + ?Sized,
{
    let config = config.sanitized();
    let mut particles = Vec::with_capacity(count);

    for _ in 0..count {
        // Staggered start so the pool does not fade in all at once
        let life = rng.random::<f32>() * config.max_life * 0.5;
        let speed = config.speed_min + rng.random::<f32>() * config.speed_range;
        let drift = Vec2::new(
            (rng.random::<f32>() - 0.5) * config.drift_extent,
            (rng.random::<f32>() - 0.5) * config.drift_extent,
        );
        let seed = rng.random::<f32>() * SEED_RANGE;
        let origin = origins.sample(rng);

        particles.push(Particle::new(origin, life, speed, drift, seed, &config));
    }

    log::info!(
        "Spawned smoke pool: {} particles, max_life {}s",
        count,
        config.max_life
    );

    ParticlePool {
        config,
        particles,
        recycled: 0,
    }
}

/// Advance every particle in `pool` by `dt` seconds, recycling expired ones
pub fn update(pool: &mut ParticlePool, dt: f32) {
    let config = pool.config;
    let mut recycled = 0u32;
    for particle in pool.particles.iter_mut() {
        if particle.update(dt, &config) == ParticleStep::Recycled {
            recycled += 1;
        }
    }
    if recycled > 0 {
        log::trace!("Recycled {} smoke particles", recycled);
        pool.recycled += recycled as u64;
    }
}
