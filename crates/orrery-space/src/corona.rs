//! Sun corona: a shell of flare particles whose sizes pulse, plus the
//! ambient spins of the sun's layers.
//!
//! The sun's motion ignores the speed multiplier; it keeps turning while
//! the planets are paused.

use glam::Vec3;
use orrery_texture::Rgba;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::particles::{ParticleVertex, checked_count, random_direction};

pub const SUN_RADIUS: f32 = 5.0;
pub const SHELL_INNER: f32 = 5.5;
pub const SHELL_THICKNESS: f32 = 3.0;
const CORE_SPIN_RATE: f32 = 0.05;
const CORONA_SPIN_RATE: f32 = 0.02;
const FLARE_SPIN_RATE: f32 = 0.03;
const FLARE_COLOR: Rgba = Rgba::new(1.0, 0.67, 0.0, 0.6);

/// Flare size of particle `index` at elapsed `t`.
pub fn flare_size(t: f32, index: usize) -> f32 {
    0.15 + (t * 2.0 + index as f32 * 0.1).sin() * 0.05
}

pub struct SunCorona {
    particles: Vec<ParticleVertex>,
    core_spin: f32,
    corona_spin: f32,
    corona_nod: f32,
    flare_spin: f32,
    flare_tilt: f32,
}

impl SunCorona {
    pub fn generate(count: usize, rng: &mut ChaCha8Rng) -> Self {
        let count = checked_count("sun corona", count);
        let particles = (0..count)
            .map(|_| {
                let dir = random_direction(rng);
                let r = SHELL_INNER + rng.random::<f32>() * SHELL_THICKNESS;
                let size = 0.05 + rng.random::<f32>() * 0.15;
                ParticleVertex::new(dir * r, size, FLARE_COLOR)
            })
            .collect();
        Self {
            particles,
            core_spin: 0.0,
            corona_spin: 0.0,
            corona_nod: 0.0,
            flare_spin: 0.0,
            flare_tilt: 0.0,
        }
    }

    /// Advance layer spins and rewrite particle sizes in place.
    pub fn animate(&mut self, t: f32, dt: f32) {
        self.core_spin += dt * CORE_SPIN_RATE;
        self.corona_spin -= dt * CORONA_SPIN_RATE;
        self.corona_nod = (t * 0.1).sin() * 0.1;
        self.flare_spin += dt * FLARE_SPIN_RATE;
        self.flare_tilt = (t * 0.2).sin() * 0.05;
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.size = flare_size(t, i);
        }
    }

    pub fn particles(&self) -> &[ParticleVertex] {
        &self.particles
    }

    pub fn core_spin(&self) -> f32 {
        self.core_spin
    }

    /// Corona shell rotation as (x nod, y spin).
    pub fn corona_rotation(&self) -> (f32, f32) {
        (self.corona_nod, self.corona_spin)
    }

    /// Flare shell rotation as (y spin, z tilt).
    pub fn flare_rotation(&self) -> (f32, f32) {
        (self.flare_spin, self.flare_tilt)
    }
}

/// Points on the shell, relative to the sun's center.
pub fn shell_contains(p: Vec3) -> bool {
    let r = p.length();
    r >= SHELL_INNER - 1e-3 && r <= SHELL_INNER + SHELL_THICKNESS + 1e-3
}
