//! Validated orbital elements for one body.

use tracing::warn;

use crate::kepler::MAX_ECCENTRICITY;

/// Smallest accepted semi-major axis and body radius.
pub const MIN_LENGTH: f32 = 1e-3;

/// Orbital and rotational elements of a body. Construct with
/// [`OrbitalParams::new`], which clamps anything that would make the orbit
/// degenerate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalParams {
    /// Semi-major axis.
    pub distance: f32,
    /// In `[0, MAX_ECCENTRICITY]`.
    pub eccentricity: f32,
    /// Time units per revolution; positive.
    pub orbital_period: f32,
    /// Time units per spin; negative for retrograde.
    pub rotation_period: f32,
    /// Axial tilt in degrees. Applied to the body mesh, not the orbit plane.
    pub axial_tilt: f32,
}

impl OrbitalParams {
    pub fn new(
        name: &str,
        distance: f32,
        eccentricity: f32,
        orbital_period: f32,
        rotation_period: f32,
        axial_tilt: f32,
    ) -> Self {
        let e = if eccentricity.is_nan() {
            0.0
        } else {
            eccentricity.clamp(0.0, MAX_ECCENTRICITY)
        };
        if e != eccentricity {
            warn!(body = name, eccentricity, clamped = e, "Eccentricity out of range, clamped");
        }

        let distance = if distance.is_finite() && distance >= MIN_LENGTH {
            distance
        } else {
            warn!(body = name, distance, "Orbital distance must be positive, clamped");
            MIN_LENGTH
        };

        let orbital_period = if orbital_period.is_finite() && orbital_period > 0.0 {
            orbital_period
        } else {
            warn!(body = name, orbital_period, "Orbital period must be positive, body will not orbit");
            f32::INFINITY
        };

        let rotation_period = if rotation_period.is_finite() {
            rotation_period
        } else {
            warn!(body = name, rotation_period, "Rotation period not finite, body will not spin");
            0.0
        };

        Self {
            distance,
            eccentricity: e,
            orbital_period,
            rotation_period,
            axial_tilt: if axial_tilt.is_finite() { axial_tilt } else { 0.0 },
        }
    }

    /// Closest approach to the focus.
    pub fn periapsis(&self) -> f32 {
        self.distance * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the focus.
    pub fn apoapsis(&self) -> f32 {
        self.distance * (1.0 + self.eccentricity)
    }

    pub fn axial_tilt_radians(&self) -> f32 {
        self.axial_tilt.to_radians()
    }

    pub fn is_retrograde(&self) -> bool {
        self.rotation_period < 0.0
    }
}
