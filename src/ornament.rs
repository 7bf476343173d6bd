//! Stud ornament placement on the tapered body
//!
//! The body is a regular prism with `face_count` flat faces whose radius
//! (centre to corner) tapers linearly between the bottom and top of the stud
//! band. Each face carries two border columns of studs plus a centre column
//! on every Nth ring, giving the "V" pattern of the golden burner.
//!
//! Output order is face-major, then ring (bottom to top), then
//! `[left, right, centre?]`. Rotating face `i` by one face step reproduces
//! face `i + 1`.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

use crate::consts::*;
use crate::{face_normal, normalize_angle, rotate_y};

/// Minimum faces for a closed polygon
pub const MIN_FACE_COUNT: u32 = 3;

/// Static body parameters the studs are placed on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrnamentSpec {
    /// Number of flat faces (clamped to >= 3)
    pub face_count: u32,
    /// Height of the lowest ring
    pub start_y: f32,
    /// Height of the highest ring
    pub end_y: f32,
    /// Corner radius at `start_y`
    pub start_radius: f32,
    /// Corner radius at `end_y`
    pub end_radius: f32,
    /// Vertical subdivisions per face (0 = a single ring)
    pub steps: u32,
    /// Centre stud on every Nth ring (clamped to >= 1)
    pub center_every: u32,
}

impl Default for OrnamentSpec {
    fn default() -> Self {
        Self {
            face_count: FACE_COUNT,
            start_y: BODY_START_Y,
            end_y: BODY_END_Y,
            start_radius: BODY_START_RADIUS,
            end_radius: BODY_END_RADIUS,
            steps: STUD_STEPS,
            center_every: CENTER_STUD_EVERY,
        }
    }
}

impl OrnamentSpec {
    /// Copy with counts clamped to valid minimums
    pub fn sanitized(&self) -> Self {
        let mut spec = *self;
        if spec.face_count < MIN_FACE_COUNT {
            log::warn!(
                "Ornament face count {} cannot close a polygon, using {}",
                spec.face_count,
                MIN_FACE_COUNT
            );
            spec.face_count = MIN_FACE_COUNT;
        }
        if spec.center_every == 0 {
            log::warn!("Ornament centre density 0, placing a centre stud on every ring");
            spec.center_every = 1;
        }
        spec
    }

    /// Angle between neighbouring faces
    #[inline]
    pub fn face_step(&self) -> f32 {
        TAU / self.face_count.max(MIN_FACE_COUNT) as f32
    }

    /// Yaw the host applies to the prism mesh so its flat faces (not its
    /// corners) point along the stud normals
    #[inline]
    pub fn body_mesh_rotation(&self) -> f32 {
        self.face_step() / 2.0
    }

    /// Corner radius at normalized height `t`
    #[inline]
    pub fn radius_at(&self, t: f32) -> f32 {
        self.start_radius + t * (self.end_radius - self.start_radius)
    }

    /// Centre-to-face distance at normalized height `t`
    #[inline]
    pub fn apothem_at(&self, t: f32) -> f32 {
        self.radius_at(t) * (PI / self.face_count.max(MIN_FACE_COUNT) as f32).cos()
    }

    /// Number of rings per face
    #[inline]
    pub fn rings(&self) -> u32 {
        self.steps + 1
    }
}

/// Placement of a single stud
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudTransform {
    pub position: Vec3,
    /// Euler angles (radians); only yaw is non-zero
    pub rotation: Vec3,
}

impl StudTransform {
    /// This transform rotated about the vertical axis
    pub fn rotated_y(&self, angle: f32) -> Self {
        Self {
            position: rotate_y(self.position, angle),
            rotation: Vec3::new(
                self.rotation.x,
                normalize_angle(self.rotation.y + angle),
                self.rotation.z,
            ),
        }
    }
}

/// Exact number of studs `generate` emits for `spec`
pub fn expected_stud_count(spec: &OrnamentSpec) -> usize {
    let spec = spec.sanitized();
    let faces = spec.face_count as usize;
    let rings = spec.rings() as usize;
    let centers = (spec.steps / spec.center_every) as usize + 1;
    faces * rings * 2 + faces * centers
}

/// Compute stud transforms for the body described by `spec`
///
/// Pure: identical input always yields the identical sequence.
pub fn generate(spec: &OrnamentSpec) -> Vec<StudTransform> {
    let spec = spec.sanitized();
    let height = spec.end_y - spec.start_y;
    let step = spec.face_step();

    let mut studs = Vec::with_capacity(expected_stud_count(&spec));

    for face in 0..spec.face_count {
        let angle = face as f32 * step;
        let normal = face_normal(angle);
        // In-face direction, normal turned a quarter about Y
        let tangent = Vec3::new(-normal.z, 0.0, normal.x);
        let rotation = Vec3::new(0.0, angle, 0.0);

        for ring in 0..=spec.steps {
            let t = if spec.steps == 0 {
                0.0
            } else {
                ring as f32 / spec.steps as f32
            };
            let radius = spec.radius_at(t);
            let mut center = normal * spec.apothem_at(t);
            center.y = spec.start_y + t * height;

            let border = tangent * (radius * BORDER_OFFSET);
            studs.push(StudTransform {
                position: center - border,
                rotation,
            });
            studs.push(StudTransform {
                position: center + border,
                rotation,
            });

            if ring % spec.center_every == 0 {
                studs.push(StudTransform {
                    position: center,
                    rotation,
                });
            }
        }
    }

    log::debug!(
        "Generated {} studs ({} faces x {} rings)",
        studs.len(),
        spec.face_count,
        spec.rings()
    );
    studs
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn angle_eq(a: f32, b: f32) -> bool {
        normalize_angle(a - b).abs() < 1e-4
    }

    fn assert_symmetric(spec: &OrnamentSpec) {
        let spec = spec.sanitized();
        let studs = generate(&spec);
        let per_face = studs.len() / spec.face_count as usize;
        let step = spec.face_step();

        for (i, stud) in studs.iter().enumerate() {
            let face = i / per_face;
            let slot = i % per_face;
            let next = (face + 1) % spec.face_count as usize;
            let expected = &studs[next * per_face + slot];
            let rotated = stud.rotated_y(step);
            assert!(
                rotated.position.abs_diff_eq(expected.position, 1e-4),
                "stud {} rotated to {:?}, expected {:?}",
                i,
                rotated.position,
                expected.position
            );
            assert!(angle_eq(rotated.rotation.y, expected.rotation.y));
        }
    }

    #[test]
    fn test_default_count_matches_formula() {
        let spec = OrnamentSpec::default();
        let studs = generate(&spec);
        // 4 faces * 9 rings * 2 borders + 4 faces * 5 centres
        assert_eq!(studs.len(), 4 * 9 * 2 + 4 * 5);
        assert_eq!(studs.len(), expected_stud_count(&spec));
    }

    #[test]
    fn test_first_face_points_along_z() {
        let studs = generate(&OrnamentSpec::default());
        // Face 0, ring 0: left, right, centre
        let centre = studs[2].position;
        let apothem = BODY_START_RADIUS * (PI / 4.0).cos();
        assert!(centre.abs_diff_eq(Vec3::new(0.0, BODY_START_Y, apothem), 1e-6));

        let offset = BODY_START_RADIUS * BORDER_OFFSET;
        assert!((studs[0].position.x - offset).abs() < 1e-6);
        assert!((studs[1].position.x + offset).abs() < 1e-6);
        assert_eq!(studs[0].rotation, Vec3::ZERO);
    }

    #[test]
    fn test_top_ring_uses_end_radius() {
        let spec = OrnamentSpec::default();
        let studs = generate(&spec);
        let per_face = studs.len() / 4;
        // Ring 8 is even, so the last stud of face 0 is its top centre
        let top = studs[per_face - 1].position;
        assert!((top.y - BODY_END_Y).abs() < 1e-6);
        assert!((top.z - BODY_END_RADIUS * (PI / 4.0).cos()).abs() < 1e-6);
    }

    #[test]
    fn test_zero_steps_single_ring() {
        let spec = OrnamentSpec {
            steps: 0,
            ..Default::default()
        };
        let studs = generate(&spec);
        assert_eq!(studs.len(), 4 * 3);
        assert!(studs.iter().all(|s| (s.position.y - BODY_START_Y).abs() < 1e-6));
    }

    #[test]
    fn test_face_count_clamped() {
        let spec = OrnamentSpec {
            face_count: 1,
            ..Default::default()
        };
        let clamped = OrnamentSpec {
            face_count: 3,
            ..Default::default()
        };
        assert_eq!(generate(&spec), generate(&clamped));
        assert_eq!(expected_stud_count(&spec), 3 * 9 * 2 + 3 * 5);
    }

    #[test]
    fn test_zero_center_density_clamped() {
        let spec = OrnamentSpec {
            center_every: 0,
            ..Default::default()
        };
        assert_eq!(generate(&spec).len(), 4 * 9 * 3);
    }

    #[test]
    fn test_body_mesh_rotation() {
        let spec = OrnamentSpec::default();
        assert!((spec.body_mesh_rotation() - PI / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotated_y_large_angle_terminates() {
        let studs = generate(&OrnamentSpec::default());
        let rotated = studs[0].rotated_y(1.0e9);
        assert!((-PI..PI).contains(&rotated.rotation.y));
        assert!((rotated.position.length() - studs[0].position.length()).abs() < 1e-4);
    }

    #[test]
    fn test_square_symmetry() {
        assert_symmetric(&OrnamentSpec::default());
    }

    proptest! {
        #[test]
        fn prop_generate_deterministic(faces in 0u32..12, steps in 0u32..16, every in 0u32..4) {
            let spec = OrnamentSpec { face_count: faces, steps, center_every: every, ..Default::default() };
            prop_assert_eq!(generate(&spec), generate(&spec));
        }

        #[test]
        fn prop_count_formula(faces in 0u32..12, steps in 0u32..16) {
            let spec = OrnamentSpec { face_count: faces, steps, ..Default::default() };
            let f = faces.max(3) as usize;
            let rings = steps as usize + 1;
            prop_assert_eq!(generate(&spec).len(), f * rings * 2 + f * rings.div_ceil(2));
        }

        #[test]
        fn prop_rotational_symmetry(faces in 3u32..10, steps in 0u32..10) {
            let spec = OrnamentSpec { face_count: faces, steps, ..Default::default() };
            assert_symmetric(&spec);
        }
    }
}
