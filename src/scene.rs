//! Burner scene: static studs plus the smoke pool, advanced once per frame
//!
//! Both components only share the frame delta. Studs are generated once at
//! construction; the pool is updated on every `frame` call.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::ornament::{self, OrnamentSpec, StudTransform};
use crate::settings::Settings;
use crate::sim::{ParticlePool, SmokeConfig, SquareJitter, sanitize_dt, spawn_pool};

/// Smoke emission point in model space (just above the coals)
pub const EMITTER_ORIGIN: Vec3 = Vec3::new(0.0, CONTENTS_Y + EMITTER_HEIGHT, 0.0);
/// Model-space offset of the whole burner
pub const MODEL_OFFSET: Vec3 = Vec3::new(0.0, MODEL_Y, 0.0);

/// Idle yaw of the body at `elapsed` seconds
#[inline]
pub fn idle_sway(elapsed: f32) -> f32 {
    (elapsed * SWAY_FREQUENCY).sin() * SWAY_AMPLITUDE
}

pub struct Scene {
    pub spec: OrnamentSpec,
    /// Generated once, never mutated
    studs: Vec<StudTransform>,
    pub pool: ParticlePool,
    /// Seconds of (clamped) frame time since construction
    pub elapsed: f32,
    pub reduced_motion: bool,
}

impl Scene {
    /// Build a scene from settings with a seeded spawn generator
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let smoke = SmokeConfig {
            particle_count: settings.effective_particle_count(),
            ..settings.smoke
        };
        Self::with_rng(&settings.ornament, &smoke, settings.reduced_motion, &mut rng)
    }

    /// Build a scene drawing spawn randomness from `rng`
    pub fn with_rng<R: rand::Rng + ?Sized>(
        spec: &OrnamentSpec,
        smoke: &SmokeConfig,
        reduced_motion: bool,
        rng: &mut R,
    ) -> Self {
        let spec = spec.sanitized();
        let studs = ornament::generate(&spec);
        let mut origins = SquareJitter::new(EMITTER_ORIGIN, EMITTER_JITTER);
        let pool = spawn_pool(smoke.particle_count, &mut origins, smoke, rng);

        log::info!(
            "Scene ready: {} studs on {} faces, {} smoke particles",
            studs.len(),
            spec.face_count,
            pool.len()
        );

        Self {
            spec,
            studs,
            pool,
            elapsed: 0.0,
            reduced_motion,
        }
    }

    pub fn studs(&self) -> &[StudTransform] {
        &self.studs
    }

    /// Advance by one render tick
    pub fn frame(&mut self, dt: f32) {
        let dt = sanitize_dt(dt).min(MAX_FRAME_DT);
        self.elapsed += dt;
        self.pool.update(dt);
    }

    /// Current yaw of the whole model
    pub fn body_sway(&self) -> f32 {
        if self.reduced_motion {
            0.0
        } else {
            idle_sway(self.elapsed)
        }
    }
}
