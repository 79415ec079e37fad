//! Wormhole: a receding ring stack and an endless inward particle stream.
//!
//! Particle depths advance in place every frame and wrap from the near plane
//! back to the far end, so the buffer is allocated once.

use std::f32::consts::TAU;

use glam::Vec3;
use orrery_texture::Rgba;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::category::ObjectCategory;
use crate::generator::Decoration;
use crate::hitbox::Hitbox;
use crate::particles::{ParticleVertex, checked_count};
use crate::pose::Pose;

pub const RING_COUNT: usize = 8;
/// Far end of the tunnel along local -z.
pub const TUNNEL_DEPTH: f32 = 50.0;
/// Depth units per second per unit of particle speed (0.1 per frame at 60 Hz).
pub const FLOW_RATE: f32 = 6.0;
const HITBOX_RADIUS: f32 = 16.0;

#[derive(Clone, Debug)]
pub struct WormholeSpec {
    pub position: Vec3,
    pub scale: f32,
    pub color: Rgba,
    pub particle_count: usize,
}

impl WormholeSpec {
    pub fn new(position: Vec3, scale: f32, color: Rgba) -> Self {
        Self {
            position,
            scale,
            color,
            particle_count: 2000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunnelRing {
    pub radius: f32,
    pub depth: f32,
    pub opacity: f32,
    pub rotation: f32,
    pub scale: f32,
}

pub struct Wormhole {
    position: Vec3,
    scale: f32,
    rings: [TunnelRing; RING_COUNT],
    particles: Vec<ParticleVertex>,
    speeds: Vec<f32>,
    spin: f32,
}

impl Wormhole {
    pub fn rings(&self) -> &[TunnelRing] {
        &self.rings
    }

    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }
}

impl Decoration for Wormhole {
    type Spec = WormholeSpec;
    const CATEGORY: ObjectCategory = ObjectCategory::Wormhole;

    fn generate(spec: &WormholeSpec, rng: &mut ChaCha8Rng) -> Self {
        let count = checked_count("wormhole", spec.particle_count);
        let color = spec.color.with_alpha(0.6);
        let mut particles = Vec::with_capacity(count);
        let mut speeds = Vec::with_capacity(count);
        for _ in 0..count {
            let theta = rng.random::<f32>() * TAU;
            let depth = rng.random::<f32>() * TUNNEL_DEPTH;
            let radius = 5.0 + depth * 0.3;
            particles.push(ParticleVertex::new(
                Vec3::new(theta.cos() * radius, theta.sin() * radius, -depth),
                0.3,
                color,
            ));
            speeds.push(0.5 + rng.random::<f32>() * 1.5);
        }

        let rings = std::array::from_fn(|i| TunnelRing {
            radius: 8.0 - i as f32 * 0.5,
            depth: -(i as f32) * 3.0,
            opacity: 0.8 - i as f32 * 0.08,
            rotation: 0.0,
            scale: 1.0,
        });

        Self {
            position: spec.position,
            scale: spec.scale.max(0.0),
            rings,
            particles,
            speeds,
            spin: 0.0,
        }
    }

    fn animate(&mut self, t: f32, dt: f32) {
        self.spin = t * 0.5;
        for (i, ring) in self.rings.iter_mut().enumerate() {
            let i = i as f32;
            ring.rotation = t * (0.5 + i * 0.1);
            ring.scale = 1.0 + (t * 2.0 + i).sin() * 0.1;
        }

        for (p, speed) in self.particles.iter_mut().zip(&self.speeds) {
            let z = &mut p.position[2];
            *z += speed * FLOW_RATE * dt;
            if *z > 0.0 {
                *z = -TUNNEL_DEPTH;
            }
        }
    }

    fn pose(&self) -> Pose {
        Pose::at(self.position)
            .with_uniform_scale(self.scale)
            .with_euler(0.0, 0.0, self.spin)
    }

    fn hitboxes(&self) -> Vec<Hitbox> {
        vec![Hitbox::Sphere {
            center: self.position,
            radius: HITBOX_RADIUS * self.scale,
        }]
    }

    fn particles(&self) -> &[ParticleVertex] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wormhole() -> Wormhole {
        Wormhole::from_seed(&WormholeSpec::new(Vec3::new(-150.0, 30.0, -100.0), 1.5, Rgba::WHITE), 9)
    }

    #[test]
    fn test_ring_stack_layout() {
        let w = wormhole();
        assert_eq!(w.rings().len(), 8);
        assert_eq!(w.rings()[0].radius, 8.0);
        assert_eq!(w.rings()[7].radius, 4.5);
        assert_eq!(w.rings()[7].depth, -21.0);
        assert!(w.rings().windows(2).all(|r| r[1].opacity < r[0].opacity));
    }

    #[test]
    fn test_particles_flow_and_wrap_in_place() {
        let mut w = wormhole();
        let ptr = w.particles().as_ptr();
        let mut t = 0.0;
        for _ in 0..2000 {
            t += 1.0 / 60.0;
            w.animate(t, 1.0 / 60.0);
            for p in w.particles() {
                assert!(p.position[2] <= 0.0 && p.position[2] >= -TUNNEL_DEPTH);
            }
        }
        assert_eq!(ptr, w.particles().as_ptr());
        assert_eq!(w.particles().len(), 2000);
    }

    #[test]
    fn test_flow_moves_toward_near_plane() {
        let mut w = wormhole();
        let before: Vec<f32> = w.particles().iter().map(|p| p.position[2]).collect();
        w.animate(0.1, 0.01);
        for (b, (p, s)) in before.iter().zip(w.particles().iter().zip(w.speeds())) {
            let expected = b + s * FLOW_RATE * 0.01;
            if expected <= 0.0 {
                assert!((p.position[2] - expected).abs() < 1e-4);
            } else {
                assert_eq!(p.position[2], -TUNNEL_DEPTH);
            }
        }
    }

    #[test]
    fn test_ring_breathing() {
        let mut w = wormhole();
        w.animate(3.0, 0.0);
        for (i, ring) in w.rings().iter().enumerate() {
            assert!((ring.scale - 1.0).abs() <= 0.1 + 1e-6);
            assert!((ring.rotation - 3.0 * (0.5 + i as f32 * 0.1)).abs() < 1e-5);
        }
    }
}
