//! Gas cloud nebulae with embedded stars.

use glam::Vec3;
use orrery_texture::Rgba;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::category::ObjectCategory;
use crate::generator::Decoration;
use crate::hitbox::Hitbox;
use crate::particles::{ParticleVertex, centered, checked_count, radial_point};
use crate::pose::Pose;

const CLOUD_EXTENT: Vec3 = Vec3::new(100.0, 60.0, 100.0);
const STAR_RADIUS: f32 = 80.0;
const HITBOX_RADII: Vec3 = Vec3::new(80.0, 50.0, 80.0);

#[derive(Clone, Debug)]
pub struct NebulaSpec {
    pub position: Vec3,
    pub scale: f32,
    /// Cloud colors. An empty list falls back to white.
    pub colors: Vec<Rgba>,
    pub cloud_count: usize,
    pub star_count: usize,
}

impl NebulaSpec {
    pub fn new(position: Vec3, scale: f32, colors: Vec<Rgba>) -> Self {
        Self {
            position,
            scale,
            colors,
            cloud_count: 20,
            star_count: 300,
        }
    }
}

/// One translucent back-faced sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cloud {
    pub center: Vec3,
    pub radius: f32,
    pub color: Rgba,
    pub opacity: f32,
}

pub struct Nebula {
    position: Vec3,
    scale: f32,
    clouds: Vec<Cloud>,
    stars: Vec<ParticleVertex>,
    rotation: f32,
}

impl Nebula {
    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }
}

impl Decoration for Nebula {
    type Spec = NebulaSpec;
    const CATEGORY: ObjectCategory = ObjectCategory::Nebula;

    fn generate(spec: &NebulaSpec, rng: &mut ChaCha8Rng) -> Self {
        let palette: &[Rgba] = if spec.colors.is_empty() {
            &[Rgba::WHITE]
        } else {
            &spec.colors
        };

        let clouds = (0..checked_count("nebula clouds", spec.cloud_count))
            .map(|_| Cloud {
                center: Vec3::new(
                    centered(rng, CLOUD_EXTENT.x),
                    centered(rng, CLOUD_EXTENT.y),
                    centered(rng, CLOUD_EXTENT.z),
                ),
                radius: 20.0 + rng.random::<f32>() * 40.0,
                color: palette[rng.random_range(0..palette.len())],
                opacity: 0.05 + rng.random::<f32>() * 0.1,
            })
            .collect();

        let star = Rgba::WHITE.with_alpha(0.9);
        let stars = (0..spec.star_count)
            .map(|_| ParticleVertex::new(radial_point(rng, STAR_RADIUS, 1.0), 0.8, star))
            .collect();

        Self {
            position: spec.position,
            scale: spec.scale.max(0.0),
            clouds,
            stars,
            rotation: 0.0,
        }
    }

    fn animate(&mut self, t: f32, _dt: f32) {
        self.rotation = t * 0.005;
    }

    fn pose(&self) -> Pose {
        Pose::at(self.position)
            .with_uniform_scale(self.scale)
            .with_euler(0.0, self.rotation, 0.0)
    }

    fn hitboxes(&self) -> Vec<Hitbox> {
        vec![Hitbox::Ellipsoid {
            center: self.position,
            radii: HITBOX_RADII * self.scale,
        }]
    }

    fn particles(&self) -> &[ParticleVertex] {
        &self.stars
    }
}
