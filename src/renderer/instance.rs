//! Per-instance data handed to the host renderer
//!
//! Layouts are `#[repr(C)]` and padded to 16-byte multiples so they can be
//! uploaded straight into a GPU instance buffer or viewed as a `Float32Array`.

use bytemuck::{Pod, Zeroable};

use crate::ornament::StudTransform;
use crate::sim::ParticlePool;

/// Floats per `ParticleInstance`
pub const PARTICLE_STRIDE: usize = std::mem::size_of::<ParticleInstance>() / 4;
/// Floats per `StudInstance`
pub const STUD_STRIDE: usize = std::mem::size_of::<StudInstance>() / 4;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3], // offset 0
    pub scale: f32,         // offset 12
    pub rotation: [f32; 2], // offset 16 - tumble about x and z
    pub opacity: f32,       // offset 24
    pub _pad: f32,          // pad to 32 bytes
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct StudInstance {
    pub position: [f32; 3], // offset 0
    pub yaw: f32,           // offset 12
}

impl From<&StudTransform> for StudInstance {
    fn from(stud: &StudTransform) -> Self {
        Self {
            position: stud.position.to_array(),
            yaw: stud.rotation.y,
        }
    }
}

/// Fill `out` with one instance per pooled particle, in pool order
///
/// Reuses the allocation of `out` between frames.
pub fn write_particle_instances(pool: &ParticlePool, out: &mut Vec<ParticleInstance>) {
    out.clear();
    out.extend(pool.iter().map(|particle| ParticleInstance {
        position: particle.position.to_array(),
        scale: particle.scale,
        rotation: particle.rotation.to_array(),
        opacity: particle.opacity,
        _pad: 0.0,
    }));
}

pub fn particle_instances(pool: &ParticlePool) -> Vec<ParticleInstance> {
    let mut out = Vec::with_capacity(pool.len());
    write_particle_instances(pool, &mut out);
    out
}

pub fn stud_instances(studs: &[StudTransform]) -> Vec<StudInstance> {
    studs.iter().map(StudInstance::from).collect()
}

/// Raw bytes of an instance slice for buffer upload
pub fn as_bytes<T: Pod>(instances: &[T]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

/// Flat float view of an instance slice
pub fn as_floats<T: Pod>(instances: &[T]) -> &[f32] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ornament::{OrnamentSpec, generate};
    use crate::sim::{SmokeConfig, SquareJitter, spawn_pool};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_layout_sizes() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
        assert_eq!(std::mem::size_of::<StudInstance>(), 16);
        assert_eq!(PARTICLE_STRIDE, 8);
        assert_eq!(STUD_STRIDE, 4);
    }

    #[test]
    fn test_particle_instances_follow_pool_order() {
        let mut rng = Pcg32::seed_from_u64(21);
        let mut pool = spawn_pool(10, &mut SquareJitter::default(), &SmokeConfig::default(), &mut rng);
        pool.update(0.3);

        let instances = particle_instances(&pool);
        assert_eq!(instances.len(), 10);
        for (instance, particle) in instances.iter().zip(pool.iter()) {
            assert_eq!(instance.position, particle.position.to_array());
            assert_eq!(instance.opacity, particle.opacity);
        }

        let floats = as_floats(&instances);
        assert_eq!(floats.len(), 10 * PARTICLE_STRIDE);
        assert_eq!(floats[PARTICLE_STRIDE + 6], pool.particles[1].opacity);
        assert_eq!(as_bytes(&instances).len(), 10 * 32);
    }

    #[test]
    fn test_write_reuses_buffer() {
        let mut rng = Pcg32::seed_from_u64(2);
        let pool = spawn_pool(4, &mut SquareJitter::default(), &SmokeConfig::default(), &mut rng);
        let mut out = vec![ParticleInstance::default(); 50];
        write_particle_instances(&pool, &mut out);
        assert_eq!(out.len(), 4);
        assert!(out.capacity() >= 50);
    }

    #[test]
    fn test_stud_instances() {
        let studs = generate(&OrnamentSpec::default());
        let instances = stud_instances(&studs);
        assert_eq!(instances.len(), studs.len());
        assert_eq!(instances[0].yaw, 0.0);
        assert_eq!(instances.last().map(|s| s.yaw), studs.last().map(|s| s.rotation.y));
    }
}
