//! Black hole with a procedurally textured accretion disk.

use std::sync::Arc;

use glam::Vec3;
use orrery_texture::{Texture, generate_accretion_disk};
use rand_chacha::ChaCha8Rng;

use crate::category::ObjectCategory;
use crate::generator::Decoration;
use crate::hitbox::Hitbox;
use crate::pose::Pose;

pub const EVENT_HORIZON_RADIUS: f32 = 5.0;
pub const DISK_INNER_RADIUS: f32 = 6.0;
pub const DISK_OUTER_RADIUS: f32 = 25.0;

#[derive(Clone, Debug)]
pub struct BlackHoleSpec {
    pub position: Vec3,
    pub scale: f32,
    pub texture_size: u32,
}

pub struct BlackHole {
    position: Vec3,
    scale: f32,
    accretion: Arc<Texture>,
    rotation: f32,
    disk_rotation: f32,
    lens_tilt: (f32, f32),
}

impl BlackHole {
    pub fn accretion_texture(&self) -> &Arc<Texture> {
        &self.accretion
    }

    /// Disk spin about its own normal.
    pub fn disk_rotation(&self) -> f32 {
        self.disk_rotation
    }

    /// Photon ring wobble as (x, y) rotation.
    pub fn lens_tilt(&self) -> (f32, f32) {
        self.lens_tilt
    }
}

impl Decoration for BlackHole {
    type Spec = BlackHoleSpec;
    const CATEGORY: ObjectCategory = ObjectCategory::BlackHole;

    fn generate(spec: &BlackHoleSpec, rng: &mut ChaCha8Rng) -> Self {
        Self {
            position: spec.position,
            scale: spec.scale.max(0.0),
            accretion: Arc::new(generate_accretion_disk(spec.texture_size, rng)),
            rotation: 0.0,
            disk_rotation: 0.0,
            lens_tilt: (0.0, 0.0),
        }
    }

    fn animate(&mut self, t: f32, _dt: f32) {
        self.rotation = t * 0.1;
        self.disk_rotation = t * 0.3;
        self.lens_tilt = ((t * 0.2).sin() * 0.1, (t * 0.15).cos() * 0.1);
    }

    fn pose(&self) -> Pose {
        Pose::at(self.position)
            .with_uniform_scale(self.scale)
            .with_euler(0.0, self.rotation, 0.0)
    }

    fn hitboxes(&self) -> Vec<Hitbox> {
        vec![Hitbox::Sphere {
            center: self.position,
            radius: DISK_OUTER_RADIUS * self.scale,
        }]
    }
}
