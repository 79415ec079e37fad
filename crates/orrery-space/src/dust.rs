//! Ambient dust field filling the whole scene.

use glam::Vec3;
use orrery_texture::Rgba;
use rand_chacha::ChaCha8Rng;

use crate::category::ObjectCategory;
use crate::generator::Decoration;
use crate::particles::{ParticleVertex, centered, checked_count};
use crate::pose::Pose;

pub const FIELD_EXTENT: Vec3 = Vec3::new(500.0, 300.0, 500.0);

#[derive(Clone, Debug)]
pub struct DustSpec {
    pub count: usize,
    pub color: Rgba,
}

pub struct SpaceDust {
    particles: Vec<ParticleVertex>,
    sway: f32,
    rotation: f32,
}

impl Decoration for SpaceDust {
    type Spec = DustSpec;
    const CATEGORY: ObjectCategory = ObjectCategory::SpaceDust;

    fn generate(spec: &DustSpec, rng: &mut ChaCha8Rng) -> Self {
        let color = spec.color.with_alpha(0.3);
        let particles = (0..checked_count("space dust", spec.count))
            .map(|_| {
                let p = Vec3::new(
                    centered(rng, FIELD_EXTENT.x),
                    centered(rng, FIELD_EXTENT.y),
                    centered(rng, FIELD_EXTENT.z),
                );
                ParticleVertex::new(p, 0.3, color)
            })
            .collect();
        Self {
            particles,
            sway: 0.0,
            rotation: 0.0,
        }
    }

    fn animate(&mut self, t: f32, _dt: f32) {
        self.rotation = t * 0.005;
        self.sway = (t * 0.01).sin() * 0.05;
    }

    fn pose(&self) -> Pose {
        Pose::IDENTITY.with_euler(self.sway, self.rotation, 0.0)
    }

    fn particles(&self) -> &[ParticleVertex] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dust_fills_box() {
        let dust = SpaceDust::from_seed(
            &DustSpec {
                count: 5000,
                color: Rgba::WHITE,
            },
            1,
        );
        assert_eq!(dust.particles().len(), 5000);
        let half = FIELD_EXTENT * 0.5;
        assert!(dust.particles().iter().all(|p| {
            let q = p.position().abs();
            q.x <= half.x && q.y <= half.y && q.z <= half.z
        }));
        assert!(dust.hitboxes().is_empty());
    }

    #[test]
    fn test_sway_bounded() {
        let mut dust = SpaceDust::from_seed(&DustSpec { count: 1, color: Rgba::WHITE }, 1);
        for i in 0..100 {
            dust.animate(i as f32 * 50.0, 0.0);
            assert!(dust.sway.abs() <= 0.05);
        }
    }
}
