//! Planar Kepler ellipse and the shared speed constants.

use glam::Vec3;

/// Eccentricities are clamped below this so the path never becomes parabolic.
pub const MAX_ECCENTRICITY: f32 = 0.999;

/// Shared pacing constants. Angular speeds are decorative, scaled so every
/// body moves at a comparable visual rate regardless of real-world period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConstants {
    /// Period that maps to one unit of angular speed before scaling (Earth's).
    pub reference_period: f32,
    pub orbital_speed_scale: f32,
    pub rotation_speed_scale: f32,
}

impl Default for OrbitConstants {
    fn default() -> Self {
        Self {
            reference_period: 365.0,
            orbital_speed_scale: 0.5,
            rotation_speed_scale: 2.0,
        }
    }
}

impl OrbitConstants {
    /// Angular orbital speed in radians per second at speed multiplier 1.
    /// Inversely proportional to the orbital period.
    pub fn orbital_speed(&self, orbital_period: f32) -> f32 {
        (self.reference_period / orbital_period) * self.orbital_speed_scale
    }

    /// Signed spin rate. Negative periods spin backwards.
    pub fn rotation_speed(&self, rotation_period: f32) -> f32 {
        if rotation_period == 0.0 {
            return 0.0;
        }
        rotation_period.signum() * self.rotation_speed_scale / rotation_period.abs()
    }
}

/// Distance from the focus at true anomaly `theta` for semi-major axis `a`
/// and eccentricity `e`.
#[inline]
pub fn orbital_radius(a: f32, e: f32, theta: f32) -> f32 {
    a * (1.0 - e * e) / (1.0 + e * theta.cos())
}

/// Position in the XZ orbital plane, focus at the origin.
#[inline]
pub fn orbital_position(a: f32, e: f32, theta: f32) -> Vec3 {
    let r = orbital_radius(a, e, theta);
    let (sin, cos) = theta.sin_cos();
    Vec3::new(cos * r, 0.0, sin * r)
}

/// Sample a closed orbit as `segments + 1` points; the last equals the first.
pub fn orbit_path(a: f32, e: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
            orbital_position(a, e, theta)
        })
        .collect()
}
