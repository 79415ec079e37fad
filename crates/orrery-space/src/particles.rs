//! GPU-ready particle vertices and the sampling helpers generators share.

use std::f32::consts::TAU;

use glam::Vec3;
use orrery_texture::Rgba;
use rand::Rng;

/// One point sprite.
///
/// Layout (32 bytes total):
///   - `[0..12]`  position `[f32; 3]`, object-local
///   - `[12..16]` size `f32`, world units
///   - `[16..32]` color `[f32; 4]`, straight alpha
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(ParticleVertex, [u8; 32]);

impl ParticleVertex {
    pub fn new(position: Vec3, size: f32, color: Rgba) -> Self {
        Self {
            position: position.to_array(),
            size,
            color: [color.r, color.g, color.b, color.a],
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// View a particle buffer as raw bytes for upload.
pub fn as_bytes(particles: &[ParticleVertex]) -> &[u8] {
    bytemuck::cast_slice(particles)
}

/// Uniform in `[-extent/2, extent/2)`.
pub fn centered(rng: &mut impl Rng, extent: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * extent
}

/// Uniformly distributed unit vector.
pub fn random_direction(rng: &mut impl Rng) -> Vec3 {
    let theta = rng.random::<f32>() * TAU;
    let phi = (2.0 * rng.random::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

/// Point inside a sphere of `radius` with distance `radius * u^exponent`.
/// Exponents below 1 push points outward, 1 is uniform in distance, and the
/// angular distribution is always uniform.
pub fn radial_point(rng: &mut impl Rng, radius: f32, exponent: f32) -> Vec3 {
    let dir = random_direction(rng);
    dir * radius * rng.random::<f32>().powf(exponent)
}

/// Log and clamp a particle count. Zero is allowed and yields an empty object.
pub(crate) fn checked_count(kind: &'static str, count: usize) -> usize {
    if count == 0 {
        tracing::warn!(kind, "Zero particle count, object renders nothing");
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_vertex_bytes() {
        let v = [ParticleVertex::new(Vec3::new(1.0, 2.0, 3.0), 0.5, Rgba::WHITE); 3];
        assert_eq!(as_bytes(&v).len(), 96);
        assert_eq!(v[0].position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_random_direction_is_unit() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!((random_direction(&mut rng).length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_radial_point_stays_inside() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..1000 {
            assert!(radial_point(&mut rng, 25.0, 0.5).length() <= 25.0 + 1e-3);
        }
    }

    #[test]
    fn test_centered_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = centered(&mut rng, 100.0);
            assert!((-50.0..50.0).contains(&v));
        }
    }
}
