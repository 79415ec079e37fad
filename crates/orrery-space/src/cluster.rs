//! Globular star clusters: dense cores without a hard edge.

use glam::Vec3;
use orrery_texture::Rgba;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::category::ObjectCategory;
use crate::generator::Decoration;
use crate::hitbox::Hitbox;
use crate::particles::{ParticleVertex, checked_count, radial_point};
use crate::pose::Pose;

/// `r = R * u^0.5` concentrates stars toward the core.
pub const CORE_BIAS: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct ClusterSpec {
    pub position: Vec3,
    pub count: usize,
    pub radius: f32,
    pub color: Rgba,
}

pub struct StarCluster {
    position: Vec3,
    radius: f32,
    particles: Vec<ParticleVertex>,
    tilt: f32,
    rotation: f32,
}

impl StarCluster {
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Decoration for StarCluster {
    type Spec = ClusterSpec;
    const CATEGORY: ObjectCategory = ObjectCategory::StarClusters;

    fn generate(spec: &ClusterSpec, rng: &mut ChaCha8Rng) -> Self {
        let count = checked_count("star cluster", spec.count);
        let radius = spec.radius.max(0.0);
        let color = spec.color.with_alpha(0.9);
        let particles = (0..count)
            .map(|_| {
                let p = radial_point(rng, radius, CORE_BIAS);
                let size = 0.3 + rng.random::<f32>() * 0.7;
                ParticleVertex::new(p, size, color)
            })
            .collect();
        Self {
            position: spec.position,
            radius,
            particles,
            tilt: 0.0,
            rotation: 0.0,
        }
    }

    fn animate(&mut self, t: f32, _dt: f32) {
        self.rotation = t * 0.02;
        self.tilt = (t * 0.01).sin() * 0.1;
    }

    fn pose(&self) -> Pose {
        Pose::at(self.position).with_euler(self.tilt, self.rotation, 0.0)
    }

    fn hitboxes(&self) -> Vec<Hitbox> {
        vec![Hitbox::Sphere {
            center: self.position,
            radius: self.radius,
        }]
    }

    fn particles(&self) -> &[ParticleVertex] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(count: usize) -> ClusterSpec {
        ClusterSpec {
            position: Vec3::new(150.0, 80.0, -200.0),
            count,
            radius: 25.0,
            color: Rgba::WHITE,
        }
    }

    #[test]
    fn test_denser_toward_core() {
        let cluster = StarCluster::from_seed(&spec(4000), 3);
        let inner = cluster
            .particles()
            .iter()
            .filter(|p| p.position().length() < 12.5)
            .count() as f32;
        // With r = R * sqrt(u), P(r < R/2) = 1/4. A uniform ball would give 1/8.
        let fraction = inner / 4000.0;
        assert!((fraction - 0.25).abs() < 0.03, "fraction {fraction}");
        assert!(cluster.particles().iter().all(|p| p.position().length() <= 25.0 + 1e-3));
    }

    #[test]
    fn test_rotation_is_time_driven() {
        let mut cluster = StarCluster::from_seed(&spec(10), 3);
        cluster.animate(100.0, 0.0);
        let a = cluster.pose();
        cluster.animate(100.0, 5.0);
        assert_eq!(a, cluster.pose());
        assert_eq!(a.translation, Vec3::new(150.0, 80.0, -200.0));
    }

    #[test]
    fn test_negative_radius_degrades() {
        let mut s = spec(5);
        s.radius = -3.0;
        let cluster = StarCluster::from_seed(&s, 1);
        assert_eq!(cluster.radius(), 0.0);
        assert!(cluster.hitboxes()[0].intersect(&crate::hitbox::Ray::new(Vec3::ZERO, Vec3::X)).is_none());
    }
}
