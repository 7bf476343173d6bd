//! Mabkhara - procedural core of a browser AR incense burner
//!
//! Core modules:
//! - `ornament`: Stud placement on the tapered polygonal body
//! - `sim`: Deterministic smoke particle simulation (pooled, recycled)
//! - `scene`: Per-frame composition of both for the host renderer
//! - `renderer`: Plain-data instance buffers handed to the renderer
//! - `platform`: Browser bindings
//! - `settings`: User-facing configuration

pub mod ornament;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use ornament::{OrnamentSpec, StudTransform};
pub use scene::Scene;
pub use settings::{QualityPreset, Settings};

use glam::Vec3;

/// Default tuning constants
pub mod consts {
    /// Faces on the body prism
    pub const FACE_COUNT: u32 = 4;
    /// Vertical stud samples per face (emits `STUD_STEPS + 1` rings)
    pub const STUD_STEPS: u32 = 8;
    /// A centre stud is placed on every Nth ring
    pub const CENTER_STUD_EVERY: u32 = 2;
    /// Body height range covered by studs
    pub const BODY_START_Y: f32 = 0.9;
    pub const BODY_END_Y: f32 = 1.9;
    /// Body radius (to the corners) at the bottom and top of the stud band
    pub const BODY_START_RADIUS: f32 = 0.35;
    pub const BODY_END_RADIUS: f32 = 0.7;
    /// Border studs sit this fraction of the local radius off the face centre
    pub const BORDER_OFFSET: f32 = 0.4;

    /// Particles in the smoke pool
    pub const PARTICLE_COUNT: usize = 120;
    /// Particle lifespan in seconds
    pub const MAX_LIFE: f32 = 5.5;
    /// Vertical rise per second of life
    pub const RISE_RATE: f32 = 0.9;
    /// Scale at spawn
    pub const BASE_SCALE: f32 = 0.3;
    /// Scale added over a full life
    pub const EXPANSION_RATE: f32 = 2.5;
    /// Smoke is never fully opaque
    pub const MAX_OPACITY: f32 = 0.6;
    /// Lateral turbulence gain at the end of life
    pub const TURBULENCE: f32 = 2.0;
    /// Per-particle speed is `SPEED_MIN + U[0,1) * SPEED_RANGE`
    pub const SPEED_MIN: f32 = 0.4;
    pub const SPEED_RANGE: f32 = 0.2;
    /// Wind drift is drawn per axis from `[-DRIFT_EXTENT/2, DRIFT_EXTENT/2)`
    pub const DRIFT_EXTENT: f32 = 0.5;
    /// Side of the square emission jitter on the horizontal plane
    pub const EMITTER_JITTER: f32 = 0.2;

    /// Model placement (the whole burner sits below the camera target)
    pub const MODEL_Y: f32 = -1.2;
    /// Top of the body where the coals sit
    pub const CONTENTS_Y: f32 = 1.9;
    /// Smoke emitter height above the coals
    pub const EMITTER_HEIGHT: f32 = 0.15;

    /// Idle body sway
    pub const SWAY_FREQUENCY: f32 = 0.2;
    pub const SWAY_AMPLITUDE: f32 = 0.05;

    /// Largest frame delta fed to the simulation (tab switches etc.)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Normalized angle to [-π, π)
///
/// Non-finite input is returned unchanged.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU);
    // rem_euclid may round up to TAU for tiny negative inputs
    if wrapped >= TAU { -PI } else { wrapped - PI }
}

/// Rotate a vector about the vertical (Y) axis
#[inline]
pub fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

/// Outward unit normal of a face at `angle` (angle 0 faces +Z)
#[inline]
pub fn face_normal(angle: f32) -> Vec3 {
    rotate_y(Vec3::Z, angle)
}
