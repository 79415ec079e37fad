//! Asteroid belt between Mars and Jupiter, drawn as one instanced mesh.

use std::f32::consts::TAU;

use glam::{EulerRot, Mat4, Quat, Vec3};
use orrery_orbit::FrameTime;
use orrery_texture::Rgba;
use rand::Rng;

pub const BELT_INNER_RADIUS: f32 = 40.0;
pub const BELT_OUTER_RADIUS: f32 = 48.0;
pub const BELT_COUNT: usize = 200;
pub const ASTEROID_COLOR: Rgba = Rgba::new(0.545, 0.451, 0.333, 1.0);
const ORBIT_RATE: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Asteroid {
    angle: f32,
    radius: f32,
    height: f32,
    speed: f32,
}

pub struct AsteroidBelt {
    asteroids: Vec<Asteroid>,
    instances: Vec<Mat4>,
}

/// Instance scale cycles through ten sizes by index.
pub fn asteroid_scale(index: usize) -> f32 {
    0.05 + (index % 10) as f32 * 0.015
}

impl AsteroidBelt {
    pub fn new(count: usize, inner: f32, outer: f32, rng: &mut impl Rng) -> Self {
        let asteroids: Vec<Asteroid> = (0..count)
            .map(|_| Asteroid {
                angle: rng.random::<f32>() * TAU,
                radius: inner + rng.random::<f32>() * (outer - inner),
                height: (rng.random::<f32>() - 0.5) * 2.0,
                speed: 0.1 + rng.random::<f32>() * 0.2,
            })
            .collect();
        let mut belt = Self {
            instances: vec![Mat4::IDENTITY; asteroids.len()],
            asteroids,
        };
        belt.update(FrameTime {
            elapsed: 0.0,
            dt: 0.0,
            speed: 0.0,
        });
        belt
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    /// Rewrite every instance transform in place. Orbital drift accumulates
    /// under the speed multiplier; tumbling follows unscaled time.
    pub fn update(&mut self, frame: FrameTime) {
        let FrameTime {
            elapsed: t,
            dt,
            speed: s,
        } = frame;
        for (i, (a, m)) in self.asteroids.iter_mut().zip(self.instances.iter_mut()).enumerate() {
            a.angle = (a.angle + dt * a.speed * ORBIT_RATE * s).rem_euclid(TAU);
            let (sin, cos) = a.angle.sin_cos();
            let translation = Vec3::new(cos * a.radius, a.height, sin * a.radius);
            let rotation = Quat::from_euler(EulerRot::XYZ, t * a.speed, t * a.speed * 0.5, 0.0);
            *m = Mat4::from_scale_rotation_translation(
                Vec3::splat(asteroid_scale(i)),
                rotation,
                translation,
            );
        }
    }

    pub fn instances(&self) -> &[Mat4] {
        &self.instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn belt() -> AsteroidBelt {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        AsteroidBelt::new(BELT_COUNT, BELT_INNER_RADIUS, BELT_OUTER_RADIUS, &mut rng)
    }

    fn frame(elapsed: f32, speed: f32) -> FrameTime {
        FrameTime {
            elapsed,
            dt: 1.0 / 60.0,
            speed,
        }
    }

    #[test]
    fn test_instances_inside_annulus() {
        let mut belt = belt();
        belt.update(frame(12.0, 3.0));
        assert_eq!(belt.instances().len(), BELT_COUNT);
        for m in belt.instances() {
            let p = m.w_axis.truncate();
            let r = Vec3::new(p.x, 0.0, p.z).length();
            assert!((BELT_INNER_RADIUS - 1e-3..=BELT_OUTER_RADIUS + 1e-3).contains(&r));
            assert!((-1.0..=1.0).contains(&p.y));
        }
    }

    #[test]
    fn test_paused_belt_keeps_positions_but_tumbles() {
        let mut belt = belt();
        belt.update(frame(1.0, 0.0));
        let before = belt.instances().to_vec();
        belt.update(frame(5.0, 0.0));
        for (a, b) in before.iter().zip(belt.instances()) {
            assert!(a.w_axis.abs_diff_eq(b.w_axis, 1e-4));
            assert_ne!(a.x_axis, b.x_axis);
        }
    }

    #[test]
    fn test_pause_mid_run_holds_positions() {
        let mut belt = belt();
        for i in 0..300 {
            belt.update(frame(i as f32 / 60.0, 2.0));
        }
        let running = belt.instances().to_vec();
        belt.update(frame(5.0, 0.0));
        for (a, b) in running.iter().zip(belt.instances()) {
            assert_eq!(a.w_axis, b.w_axis);
        }
    }

    #[test]
    fn test_buffer_reused() {
        let mut belt = belt();
        let ptr = belt.instances().as_ptr();
        belt.update(frame(3.0, 1.0));
        assert_eq!(ptr, belt.instances().as_ptr());
    }

    #[test]
    fn test_scale_cycle() {
        assert_eq!(asteroid_scale(0), 0.05);
        assert!((asteroid_scale(9) - 0.185).abs() < 1e-6);
        assert_eq!(asteroid_scale(10), asteroid_scale(0));
    }
}
