//! Closed polylines tracing each planet's ellipse.

use glam::Vec3;
use orrery_orbit::{OrbitalParams, orbit_path};
use orrery_texture::Rgba;

pub const PATH_SEGMENTS: usize = 128;
pub const PATH_OPACITY: f32 = 0.2;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPath {
    pub body: &'static str,
    pub points: Vec<Vec3>,
    pub color: Rgba,
    pub opacity: f32,
}

impl OrbitPath {
    pub fn new(body: &'static str, params: &OrbitalParams, color: Rgba) -> Self {
        Self {
            body,
            points: orbit_path(params.distance, params.eccentricity, PATH_SEGMENTS),
            color,
            opacity: PATH_OPACITY,
        }
    }

    /// Change the tint without rebuilding the point list.
    pub fn retint(&mut self, color: Rgba) {
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_closed() {
        let params = OrbitalParams::new("Mercury", 12.0, 0.205, 88.0, 58.6, 0.03);
        let path = OrbitPath::new("Mercury", &params, Rgba::WHITE);
        assert_eq!(path.points.len(), PATH_SEGMENTS + 1);
        let first = path.points[0];
        let last = path.points[PATH_SEGMENTS];
        assert!(first.abs_diff_eq(last, 1e-3));
        assert!((first.x - 12.0 * (1.0 - 0.205)).abs() < 1e-3);
    }

    #[test]
    fn test_retint_keeps_points() {
        let params = OrbitalParams::new("Earth", 24.0, 0.017, 365.0, 1.0, 23.4);
        let mut path = OrbitPath::new("Earth", &params, Rgba::WHITE);
        let points = path.points.clone();
        path.retint(Rgba::BLACK);
        assert_eq!(path.color, Rgba::BLACK);
        assert_eq!(path.points, points);
        assert_eq!(path.opacity, 0.2);
    }
}
