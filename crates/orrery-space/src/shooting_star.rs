//! Shooting stars: per-instance repeating streaks.
//!
//! Visibility is a pure function of `(t + delay) mod CYCLE_LENGTH`. A star
//! is shown for the first fifth of each cycle, travelling along a fixed
//! direction while fading out.

use glam::Vec3;
use orrery_texture::Rgba;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::category::ObjectCategory;
use crate::generator::Decoration;
use crate::particles::{ParticleVertex, centered, checked_count};
use crate::pose::Pose;

pub const CYCLE_LENGTH: f32 = 8.0;
/// Fraction of each cycle during which the star is visible.
pub const VISIBLE_FRACTION: f32 = 0.2;
const HEAD_SIZE: f32 = 0.3;

#[derive(Clone, Debug)]
pub struct ShootingStarSpec {
    pub count: usize,
    pub color: Rgba,
}

/// Parameters of one streak, drawn once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Streak {
    pub start: Vec3,
    pub speed: f32,
    pub delay: f32,
    pub direction: Vec3,
}

/// Where a streak is within its cycle, or `None` while hidden.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreakState {
    pub position: Vec3,
    pub opacity: f32,
}

/// Normalized phase in `[0, 1)` for a streak at elapsed `t`.
pub fn cycle_phase(t: f32, delay: f32) -> f32 {
    ((t + delay).rem_euclid(CYCLE_LENGTH) / CYCLE_LENGTH).min(1.0 - f32::EPSILON)
}

pub fn is_visible(t: f32, delay: f32) -> bool {
    cycle_phase(t, delay) < VISIBLE_FRACTION
}

impl Streak {
    pub fn state_at(&self, t: f32) -> Option<StreakState> {
        let phase = cycle_phase(t, self.delay);
        if phase >= VISIBLE_FRACTION {
            return None;
        }
        let progress = phase / VISIBLE_FRACTION;
        Some(StreakState {
            position: self.start + self.direction * progress * self.speed,
            opacity: 1.0 - progress,
        })
    }
}

pub struct ShootingStars {
    color: Rgba,
    streaks: Vec<Streak>,
    states: Vec<Option<StreakState>>,
    heads: Vec<ParticleVertex>,
}

impl ShootingStars {
    pub fn streaks(&self) -> &[Streak] {
        &self.streaks
    }

    pub fn states(&self) -> &[Option<StreakState>] {
        &self.states
    }
}

impl Decoration for ShootingStars {
    type Spec = ShootingStarSpec;
    const CATEGORY: ObjectCategory = ObjectCategory::ShootingStars;

    fn generate(spec: &ShootingStarSpec, rng: &mut ChaCha8Rng) -> Self {
        let count = checked_count("shooting stars", spec.count);
        let streaks: Vec<Streak> = (0..count)
            .map(|_| {
                let start = Vec3::new(
                    centered(rng, 400.0),
                    50.0 + rng.random::<f32>() * 100.0,
                    -100.0 - rng.random::<f32>() * 200.0,
                );
                let speed = 50.0 + rng.random::<f32>() * 100.0;
                let delay = rng.random::<f32>() * 10.0;
                let direction = Vec3::new(
                    -0.5 + rng.random::<f32>() * 0.3,
                    -0.3 - rng.random::<f32>() * 0.2,
                    0.1 + rng.random::<f32>() * 0.2,
                )
                .normalize();
                Streak {
                    start,
                    speed,
                    delay,
                    direction,
                }
            })
            .collect();

        Self {
            color: spec.color,
            states: vec![None; streaks.len()],
            heads: vec![ParticleVertex::new(Vec3::ZERO, 0.0, Rgba::TRANSPARENT); streaks.len()],
            streaks,
        }
    }

    fn animate(&mut self, t: f32, _dt: f32) {
        for ((streak, state), head) in self
            .streaks
            .iter()
            .zip(self.states.iter_mut())
            .zip(self.heads.iter_mut())
        {
            *state = streak.state_at(t);
            *head = match state {
                Some(s) => ParticleVertex::new(s.position, HEAD_SIZE, self.color.with_alpha(s.opacity)),
                None => ParticleVertex::new(streak.start, 0.0, Rgba::TRANSPARENT),
            };
        }
    }

    fn pose(&self) -> Pose {
        Pose::IDENTITY
    }

    /// One head per streak; hidden streaks have zero size and alpha.
    fn particles(&self) -> &[ParticleVertex] {
        &self.heads
    }
}
