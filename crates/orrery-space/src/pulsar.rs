//! Pulsar: a fast-spinning core with strobing beams.

use glam::Vec3;
use orrery_texture::Rgba;
use rand_chacha::ChaCha8Rng;

use crate::category::ObjectCategory;
use crate::generator::Decoration;
use crate::hitbox::Hitbox;
use crate::pose::Pose;

pub const SPIN_RATE: f32 = 5.0;
const BEAM_HALF_LENGTH: f32 = 40.0;
const GLOW_RADIUS: f32 = 7.5;

/// Beam opacity at elapsed `t`: `0.3 + 0.4 |sin 10t|`.
pub fn beam_intensity(t: f32) -> f32 {
    0.3 + (t * 10.0).sin().abs() * 0.4
}

#[derive(Clone, Debug)]
pub struct PulsarSpec {
    pub position: Vec3,
    pub color: Rgba,
}

pub struct Pulsar {
    position: Vec3,
    color: Rgba,
    spin: f32,
    beam_opacity: f32,
}

impl Pulsar {
    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn beam_opacity(&self) -> f32 {
        self.beam_opacity
    }
}

impl Decoration for Pulsar {
    type Spec = PulsarSpec;
    const CATEGORY: ObjectCategory = ObjectCategory::Pulsar;

    fn generate(spec: &PulsarSpec, _rng: &mut ChaCha8Rng) -> Self {
        Self {
            position: spec.position,
            color: spec.color,
            spin: 0.0,
            beam_opacity: beam_intensity(0.0),
        }
    }

    fn animate(&mut self, t: f32, _dt: f32) {
        self.spin = t * SPIN_RATE;
        self.beam_opacity = beam_intensity(t);
    }

    fn pose(&self) -> Pose {
        Pose::at(self.position).with_euler(0.0, self.spin, 0.0)
    }

    fn hitboxes(&self) -> Vec<Hitbox> {
        vec![Hitbox::Aabb {
            center: self.position,
            half_extents: Vec3::new(GLOW_RADIUS, BEAM_HALF_LENGTH, GLOW_RADIUS),
        }]
    }
}
