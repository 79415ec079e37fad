//! The background spiral galaxy.

use std::f32::consts::TAU;

use glam::Vec3;
use orrery_texture::Rgba;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::category::ObjectCategory;
use crate::generator::Decoration;
use crate::hitbox::Hitbox;
use crate::particles::{ParticleVertex, centered, checked_count};
use crate::pose::Pose;

/// Disk particles sit this far from the group origin.
pub const DISK_OFFSET: Vec3 = Vec3::new(0.0, -150.0, -400.0);
const MIN_DISTANCE: f32 = 50.0;
const DISTANCE_RANGE: f32 = 300.0;
const DISK_THICKNESS: f32 = 30.0;
const PALE_BLUE: Rgba = Rgba::new(0xaa as f32 / 255.0, 0xcc as f32 / 255.0, 1.0, 1.0);
const HITBOX_HALF: Vec3 = Vec3::new(300.0, 50.0, 300.0);

#[derive(Clone, Debug)]
pub struct GalaxySpec {
    pub position: Vec3,
    pub particle_count: usize,
    pub arms: u32,
    /// Saturated third color; drawn for 40% of stars.
    pub accent: Rgba,
}

impl Default for GalaxySpec {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, -100.0, -400.0),
            particle_count: 15_000,
            arms: 4,
            accent: Rgba::from_rgb8(0xa8 as f32, 0x55 as f32, 0xf7 as f32, 1.0),
        }
    }
}

/// Angle of a star at `distance` on arm offset `arm_angle`.
pub fn spiral_angle(distance: f32, arm_angle: f32) -> f32 {
    (distance / MIN_DISTANCE) * 0.5 + arm_angle
}

/// Spiral particle field with a pulsing core.
pub struct Galaxy {
    position: Vec3,
    particles: Vec<ParticleVertex>,
    arm_of: Vec<u32>,
    rotation: f32,
    core_rotation: f32,
    core_scale: f32,
}

impl Galaxy {
    pub fn arm_of(&self, index: usize) -> Option<u32> {
        self.arm_of.get(index).copied()
    }

    pub fn core_rotation(&self) -> f32 {
        self.core_rotation
    }

    pub fn core_scale(&self) -> f32 {
        self.core_scale
    }
}

impl Decoration for Galaxy {
    type Spec = GalaxySpec;
    const CATEGORY: ObjectCategory = ObjectCategory::MilkyWay;

    fn generate(spec: &GalaxySpec, rng: &mut ChaCha8Rng) -> Self {
        let count = checked_count("galaxy", spec.particle_count);
        let arms = spec.arms.max(1);
        let mut particles = Vec::with_capacity(count);
        let mut arm_of = Vec::with_capacity(count);

        for _ in 0..count {
            let arm = rng.random_range(0..arms);
            let arm_angle = arm as f32 / arms as f32 * TAU;
            let distance = MIN_DISTANCE + rng.random::<f32>() * DISTANCE_RANGE;
            let angle = spiral_angle(distance, arm_angle);
            let spread = centered(rng, distance * 0.2);
            let local = Vec3::new(
                angle.cos() * distance + spread,
                centered(rng, DISK_THICKNESS),
                angle.sin() * distance + spread,
            );

            let mix = rng.random::<f32>();
            let color = if mix < 0.3 {
                Rgba::WHITE
            } else if mix < 0.6 {
                PALE_BLUE
            } else {
                spec.accent
            };
            let size = 0.5 + rng.random::<f32>() * 2.0;

            particles.push(ParticleVertex::new(
                local + DISK_OFFSET,
                size,
                color.with_alpha(0.8),
            ));
            arm_of.push(arm);
        }

        Self {
            position: spec.position,
            particles,
            arm_of,
            rotation: 0.0,
            core_rotation: 0.0,
            core_scale: 1.0,
        }
    }

    fn animate(&mut self, t: f32, _dt: f32) {
        self.rotation = t * 0.01;
        self.core_rotation = t * 0.02;
        self.core_scale = 1.0 + (t * 0.5).sin() * 0.1;
    }

    fn pose(&self) -> Pose {
        Pose::at(self.position).with_euler(0.0, self.rotation, 0.0)
    }

    fn hitboxes(&self) -> Vec<Hitbox> {
        vec![Hitbox::Aabb {
            center: self.position,
            half_extents: HITBOX_HALF,
        }]
    }

    fn particles(&self) -> &[ParticleVertex] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(accent: Rgba) -> GalaxySpec {
        GalaxySpec {
            particle_count: 4000,
            accent,
            ..GalaxySpec::default()
        }
    }

    #[test]
    fn test_particles_follow_their_arm() {
        let galaxy = Galaxy::from_seed(&small(Rgba::BLACK), 7);
        assert_eq!(galaxy.particles().len(), 4000);
        let mut arms_seen = [false; 4];
        for (i, p) in galaxy.particles().iter().enumerate() {
            let local = p.position() - DISK_OFFSET;
            let planar = Vec3::new(local.x, 0.0, local.z);
            let distance = planar.length();
            assert!(local.y.abs() <= DISK_THICKNESS * 0.5);
            // Spread is at most 10% of the distance on each axis.
            assert!(distance >= MIN_DISTANCE * 0.85 && distance <= 350.0 * 1.15);

            arms_seen[galaxy.arm_of(i).unwrap() as usize] = true;
        }
        assert!(arms_seen.iter().all(|&seen| seen));
    }

    #[test]
    fn test_color_weights() {
        let accent = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let galaxy = Galaxy::from_seed(&small(accent), 11);
        let n = galaxy.particles().len() as f32;
        let count = |c: Rgba| {
            galaxy
                .particles()
                .iter()
                .filter(|p| p.color[..3] == c.rgb())
                .count() as f32
                / n
        };
        assert!((count(Rgba::WHITE) - 0.3).abs() < 0.05);
        assert!((count(PALE_BLUE) - 0.3).abs() < 0.05);
        assert!((count(accent) - 0.4).abs() < 0.05);
    }

    #[test]
    fn test_animation_is_continuous_in_time() {
        let mut galaxy = Galaxy::from_seed(&small(Rgba::WHITE), 1);
        let before = galaxy.particles().to_vec();
        galaxy.animate(10.0, 0.016);
        assert!((galaxy.core_scale() - (1.0 + 5.0_f32.sin() * 0.1)).abs() < 1e-6);
        assert!((galaxy.core_rotation() - 0.2).abs() < 1e-6);
        assert_eq!(before, galaxy.particles());
    }

    #[test]
    fn test_zero_particles_is_empty() {
        let spec = GalaxySpec {
            particle_count: 0,
            ..GalaxySpec::default()
        };
        let mut galaxy = Galaxy::from_seed(&spec, 1);
        galaxy.animate(1.0, 0.1);
        assert!(galaxy.particles().is_empty());
    }
}
