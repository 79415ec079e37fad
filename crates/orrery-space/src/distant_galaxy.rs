//! Far-off galaxies drawn as tinted sprites.

use std::f32::consts::TAU;

use glam::Vec3;
use orrery_texture::Rgba;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::category::ObjectCategory;
use crate::generator::Decoration;
use crate::hitbox::Hitbox;
use crate::particles::{centered, checked_count};
use crate::pose::Pose;

pub const GALAXY_TINTS: [&str; 5] = ["#ff6b6b", "#4ecdc4", "#ffe66d", "#95e1d3", "#f38181"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalaxyShape {
    /// Flattened disk sprite plus a white core.
    Spiral,
    /// Single soft oval.
    Elliptical,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistantGalaxy {
    pub position: Vec3,
    pub scale: f32,
    /// Initial roll about the view axis.
    pub rotation: f32,
    pub color: Rgba,
    pub shape: GalaxyShape,
    /// Current roll, updated by `animate`.
    pub roll: f32,
}

impl DistantGalaxy {
    /// Sprite extents `(width, height)` for the main body.
    pub fn sprite_size(&self) -> (f32, f32) {
        match self.shape {
            GalaxyShape::Spiral => (self.scale, self.scale * 0.3),
            GalaxyShape::Elliptical => (self.scale * 0.6, self.scale * 0.4),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DistantGalaxySpec {
    pub count: usize,
}

pub struct DistantGalaxies {
    galaxies: Vec<DistantGalaxy>,
}

impl DistantGalaxies {
    pub fn galaxies(&self) -> &[DistantGalaxy] {
        &self.galaxies
    }
}

impl Decoration for DistantGalaxies {
    type Spec = DistantGalaxySpec;
    const CATEGORY: ObjectCategory = ObjectCategory::DistantGalaxies;

    fn generate(spec: &DistantGalaxySpec, rng: &mut ChaCha8Rng) -> Self {
        let tints: Vec<Rgba> = GALAXY_TINTS.iter().filter_map(|h| Rgba::from_hex(h)).collect();
        let galaxies = (0..checked_count("distant galaxies", spec.count))
            .map(|_| {
                let position = Vec3::new(
                    centered(rng, 600.0),
                    centered(rng, 300.0),
                    -200.0 - rng.random::<f32>() * 400.0,
                );
                let scale = 5.0 + rng.random::<f32>() * 15.0;
                let rotation = rng.random::<f32>() * TAU;
                let color = tints[rng.random_range(0..tints.len())];
                let shape = if rng.random::<f32>() > 0.5 {
                    GalaxyShape::Spiral
                } else {
                    GalaxyShape::Elliptical
                };
                DistantGalaxy {
                    position,
                    scale,
                    rotation,
                    color,
                    shape,
                    roll: rotation,
                }
            })
            .collect();
        Self { galaxies }
    }

    fn animate(&mut self, t: f32, _dt: f32) {
        for g in &mut self.galaxies {
            g.roll = g.rotation + t * 0.01;
        }
    }

    fn pose(&self) -> Pose {
        Pose::IDENTITY
    }

    fn hitboxes(&self) -> Vec<Hitbox> {
        self.galaxies
            .iter()
            .map(|g| Hitbox::Sphere {
                center: g.position,
                radius: g.scale,
            })
            .collect()
    }
}
