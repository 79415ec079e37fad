//! Comets on a fixed ellipse whose tails always point away from the origin.

use glam::{Quat, Vec3};
use orrery_texture::Rgba;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::category::ObjectCategory;
use crate::generator::Decoration;
use crate::hitbox::Hitbox;
use crate::particles::{ParticleVertex, checked_count};
use crate::pose::Pose;

pub const SEMI_MAJOR: f32 = 150.0;
pub const SEMI_MINOR: f32 = 80.0;
pub const VERTICAL_SWING: f32 = 20.0;
pub const TAIL_LENGTH: f32 = 20.0;
const TAIL_SPREAD: f32 = 3.0;
const TAIL_SIZE: f32 = 0.5;
/// Tail particles stream outward at this many units per second.
const TAIL_DRIFT: f32 = 4.0;
const HITBOX_RADIUS: f32 = 5.0;

#[derive(Clone, Debug)]
pub struct CometSpec {
    /// Center of the comet's ellipse.
    pub start: Vec3,
    pub speed: f32,
    pub color: Rgba,
    pub tail_count: usize,
}

impl CometSpec {
    pub fn new(start: Vec3, speed: f32, color: Rgba) -> Self {
        Self {
            start,
            speed,
            color,
            tail_count: 500,
        }
    }
}

/// Position on the comet path at elapsed `t`.
pub fn comet_position(start: Vec3, speed: f32, t: f32) -> Vec3 {
    let angle = t * speed * 0.1;
    start
        + Vec3::new(
            angle.cos() * SEMI_MAJOR,
            (angle * 2.0).sin() * VERTICAL_SWING,
            angle.sin() * SEMI_MINOR,
        )
}

/// Rotation taking local +z (the tail axis) to the direction away from the
/// origin. Identity when sitting on the origin.
pub fn away_from_origin(position: Vec3) -> Quat {
    match position.try_normalize() {
        Some(dir) => Quat::from_rotation_arc(Vec3::Z, dir),
        None => Quat::IDENTITY,
    }
}

pub struct Comet {
    start: Vec3,
    speed: f32,
    color: Rgba,
    /// Fixed lateral jitter per tail particle, in `[-0.5, 0.5)`.
    lateral: Vec<(f32, f32)>,
    tail: Vec<ParticleVertex>,
    position: Vec3,
    orientation: Quat,
    tail_wobble: f32,
}

impl Comet {
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn tail_wobble(&self) -> f32 {
        self.tail_wobble
    }

    /// World-space direction the tail points.
    pub fn tail_direction(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    fn shape_particle(&self, index: usize, z: f32) -> ParticleVertex {
        let along = (z / TAIL_LENGTH).clamp(0.0, 1.0);
        let spread = along * TAIL_SPREAD;
        let (lx, ly) = self.lateral[index];
        ParticleVertex::new(
            Vec3::new(lx * spread, ly * spread, z),
            (1.0 - along) * TAIL_SIZE,
            self.color.with_alpha(0.6),
        )
    }
}

impl Decoration for Comet {
    type Spec = CometSpec;
    const CATEGORY: ObjectCategory = ObjectCategory::Comets;

    fn generate(spec: &CometSpec, rng: &mut ChaCha8Rng) -> Self {
        let count = checked_count("comet tail", spec.tail_count);
        let lateral = (0..count)
            .map(|_| (rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5))
            .collect();
        let position = comet_position(spec.start, spec.speed, 0.0);
        let mut comet = Self {
            start: spec.start,
            speed: spec.speed,
            color: spec.color,
            lateral,
            tail: Vec::with_capacity(count),
            position,
            orientation: away_from_origin(position),
            tail_wobble: 0.0,
        };
        for i in 0..count {
            let z = i as f32 / count as f32 * TAIL_LENGTH;
            let particle = comet.shape_particle(i, z);
            comet.tail.push(particle);
        }
        comet
    }

    fn animate(&mut self, t: f32, dt: f32) {
        self.position = comet_position(self.start, self.speed, t);
        self.orientation = away_from_origin(self.position);
        self.tail_wobble = (t * 3.0).sin() * 0.1;

        for i in 0..self.tail.len() {
            let mut z = self.tail[i].position[2] + TAIL_DRIFT * dt;
            if z >= TAIL_LENGTH {
                z -= TAIL_LENGTH;
            }
            self.tail[i] = self.shape_particle(i, z);
        }
    }

    fn pose(&self) -> Pose {
        Pose {
            translation: self.position,
            rotation: self.orientation,
            scale: Vec3::ONE,
        }
    }

    fn hitboxes(&self) -> Vec<Hitbox> {
        vec![Hitbox::Sphere {
            center: self.position,
            radius: HITBOX_RADIUS,
        }]
    }

    fn particles(&self) -> &[ParticleVertex] {
        &self.tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comet() -> Comet {
        Comet::from_seed(&CometSpec::new(Vec3::new(100.0, 50.0, -50.0), 0.8, Rgba::WHITE), 2)
    }

    #[test]
    fn test_path_shape() {
        let start = Vec3::new(100.0, 50.0, -50.0);
        let p0 = comet_position(start, 1.0, 0.0);
        assert_eq!(p0, start + Vec3::new(SEMI_MAJOR, 0.0, 0.0));
        let quarter = std::f32::consts::FRAC_PI_2 / 0.1;
        let p1 = comet_position(start, 1.0, quarter);
        assert!((p1 - (start + Vec3::new(0.0, 0.0, SEMI_MINOR))).length() < 1e-3);
    }

    #[test]
    fn test_tail_points_away_from_origin() {
        let mut c = comet();
        for step in 0..200 {
            c.animate(step as f32 * 0.7, 0.016);
            let away = c.position().normalize();
            assert!(c.tail_direction().dot(away) > 0.999);
        }
    }

    #[test]
    fn test_tail_streams_in_place() {
        let mut c = comet();
        assert_eq!(c.particles().len(), 500);
        let ptr = c.particles().as_ptr();
        for step in 0..600 {
            c.animate(step as f32 / 60.0, 1.0 / 60.0);
        }
        assert_eq!(ptr, c.particles().as_ptr());
        for p in c.particles() {
            let z = p.position[2];
            assert!((0.0..TAIL_LENGTH).contains(&z));
            let limit = z / TAIL_LENGTH * TAIL_SPREAD * 0.5 + 1e-4;
            assert!(p.position[0].abs() <= limit && p.position[1].abs() <= limit);
            assert!(p.size >= 0.0 && p.size <= TAIL_SIZE);
        }
    }

    #[test]
    fn test_orientation_at_origin_is_identity() {
        assert_eq!(away_from_origin(Vec3::ZERO), Quat::IDENTITY);
    }
}
