//! Deterministic smoke simulation module
//!
//! This module must be pure and deterministic:
//! - Seeded RNG only, and only at spawn time
//! - Stable iteration order (by pool index)
//! - No rendering or platform dependencies

pub mod config;
pub mod particle;
pub mod pool;

pub use config::SmokeConfig;
pub use particle::{Particle, ParticleStep, opacity_curve, sanitize_dt};
pub use pool::{OriginSampler, ParticlePool, SquareJitter, spawn_pool, update};
