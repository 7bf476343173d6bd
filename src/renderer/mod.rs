//! Renderer hand-off
//!
//! The simulation produces plain data per index; the host renderer owns the
//! mapping from index to visual instance.

pub mod instance;

pub use instance::{ParticleInstance, StudInstance, particle_instances, stud_instances};

/// Material tints (linear RGBA) for the burner's parts
pub mod colors {
    pub const GOLD: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
    pub const SILVER: [f32; 4] = [0.753, 0.753, 0.753, 1.0];
    pub const STUD: [f32; 4] = [1.0, 1.0, 0.878, 1.0];
    pub const SMOKE: [f32; 4] = [0.878, 0.878, 0.878, 1.0];
    pub const EMBER: [f32; 4] = [1.0, 0.271, 0.0, 1.0];
    pub const OUD_WOOD: [f32; 4] = [0.243, 0.153, 0.137, 1.0];
}

