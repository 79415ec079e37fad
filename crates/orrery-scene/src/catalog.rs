//! The eight planets and their visual attachments.
//!
//! Distances and radii are scene units, periods are days. Values are scaled
//! for visual pacing, not physical accuracy.

use orrery_texture::{FeatureClass, RingTint};

/// Ring descriptor. Band extents are fractions of the planet radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    pub color: &'static str,
    pub opacity: f32,
    pub tint: RingTint,
}

pub const RING_INNER_BAND: (f32, f32) = (1.3, 1.8);
pub const RING_OUTER_BAND: (f32, f32) = (1.9, 2.5);
/// Outer band opacity relative to the ring opacity.
pub const RING_OUTER_FADE: f32 = 0.6;

pub const DEFAULT_RING_COLOR: &str = "#C9A227";
pub const DEFAULT_RING_OPACITY: f32 = 0.7;

/// Glow shell around a planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereSpec {
    pub color: &'static str,
    pub opacity: f32,
    /// Shell radius relative to the planet radius.
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub radius: f32,
    pub distance: f32,
    pub orbital_period: f32,
    /// Negative for retrograde spin.
    pub rotation_period: f32,
    pub colors: &'static [&'static str],
    /// Degrees.
    pub tilt: f32,
    pub eccentricity: f32,
    pub feature: FeatureClass,
    pub ring: Option<RingSpec>,
    pub has_moon: bool,
    pub atmosphere: Option<AtmosphereSpec>,
    /// Opacity of the white cloud shell, for bodies that carry one.
    pub clouds: Option<f32>,
}

impl PlanetSpec {
    pub fn by_name(name: &str) -> Option<&'static PlanetSpec> {
        PLANETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

pub const PLANETS: [PlanetSpec; 8] = [
    PlanetSpec {
        name: "Mercury",
        radius: 0.5,
        distance: 12.0,
        orbital_period: 88.0,
        rotation_period: 58.6,
        colors: &["#8C8C8C", "#A0A0A0", "#696969"],
        tilt: 0.03,
        eccentricity: 0.205,
        feature: FeatureClass::Craters,
        ring: None,
        has_moon: false,
        atmosphere: None,
        clouds: None,
    },
    PlanetSpec {
        name: "Venus",
        radius: 1.1,
        distance: 18.0,
        orbital_period: 225.0,
        rotation_period: -243.0,
        colors: &["#E6C87A", "#D4A84B", "#C9922A"],
        tilt: 177.4,
        eccentricity: 0.007,
        feature: FeatureClass::Clouds,
        ring: None,
        has_moon: false,
        atmosphere: Some(AtmosphereSpec {
            color: "#E6D5A8",
            opacity: 0.6,
            scale: 1.08,
        }),
        clouds: Some(0.9),
    },
    PlanetSpec {
        name: "Earth",
        radius: 1.2,
        distance: 24.0,
        orbital_period: 365.0,
        rotation_period: 1.0,
        colors: &["#4A90D9", "#2E5A1C", "#8B7355"],
        tilt: 23.4,
        eccentricity: 0.017,
        feature: FeatureClass::Continents,
        ring: None,
        has_moon: true,
        atmosphere: Some(AtmosphereSpec {
            color: "#87CEEB",
            opacity: 0.3,
            scale: 1.05,
        }),
        clouds: Some(0.4),
    },
    PlanetSpec {
        name: "Mars",
        radius: 0.7,
        distance: 32.0,
        orbital_period: 687.0,
        rotation_period: 1.03,
        colors: &["#C1440E", "#8B2500", "#CD5C5C"],
        tilt: 25.2,
        eccentricity: 0.093,
        feature: FeatureClass::Terrain,
        ring: None,
        has_moon: false,
        atmosphere: Some(AtmosphereSpec {
            color: "#FFB6C1",
            opacity: 0.15,
            scale: 1.03,
        }),
        clouds: None,
    },
    PlanetSpec {
        name: "Jupiter",
        radius: 4.0,
        distance: 52.0,
        orbital_period: 4333.0,
        rotation_period: 0.41,
        colors: &["#D8CA9D", "#C4A668", "#8B7355", "#CD853F"],
        tilt: 3.1,
        eccentricity: 0.049,
        feature: FeatureClass::Bands { storm_spot: true },
        ring: None,
        has_moon: false,
        atmosphere: Some(AtmosphereSpec {
            color: "#DEB887",
            opacity: 0.2,
            scale: 1.02,
        }),
        clouds: None,
    },
    PlanetSpec {
        name: "Saturn",
        radius: 3.5,
        distance: 70.0,
        orbital_period: 10759.0,
        rotation_period: 0.45,
        colors: &["#C9A227", "#DAA520", "#F4A460"],
        tilt: 26.7,
        eccentricity: 0.057,
        feature: FeatureClass::Bands { storm_spot: false },
        ring: Some(RingSpec {
            color: DEFAULT_RING_COLOR,
            opacity: DEFAULT_RING_OPACITY,
            tint: RingTint::Warm,
        }),
        has_moon: false,
        atmosphere: Some(AtmosphereSpec {
            color: "#F5DEB3",
            opacity: 0.15,
            scale: 1.02,
        }),
        clouds: None,
    },
    PlanetSpec {
        name: "Uranus",
        radius: 2.2,
        distance: 90.0,
        orbital_period: 30687.0,
        rotation_period: -0.72,
        colors: &["#7FDBFF", "#5CACEE", "#87CEEB"],
        tilt: 97.8,
        eccentricity: 0.046,
        feature: FeatureClass::Ice,
        ring: Some(RingSpec {
            color: "#B0C4DE",
            opacity: 0.3,
            tint: RingTint::Cool,
        }),
        has_moon: false,
        atmosphere: Some(AtmosphereSpec {
            color: "#B0E0E6",
            opacity: 0.3,
            scale: 1.04,
        }),
        clouds: None,
    },
    PlanetSpec {
        name: "Neptune",
        radius: 2.1,
        distance: 110.0,
        orbital_period: 60190.0,
        rotation_period: 0.67,
        colors: &["#4169E1", "#1E90FF", "#0000CD"],
        tilt: 28.3,
        eccentricity: 0.009,
        feature: FeatureClass::Storms,
        ring: None,
        has_moon: false,
        atmosphere: Some(AtmosphereSpec {
            color: "#6495ED",
            opacity: 0.35,
            scale: 1.04,
        }),
        clouds: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_names_are_unique() {
        let names: FxHashSet<_> = PLANETS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), PLANETS.len());
    }

    #[test]
    fn test_catalog_is_valid() {
        for p in &PLANETS {
            assert!(p.radius > 0.0, "{}", p.name);
            assert!(p.distance > 0.0, "{}", p.name);
            assert!(p.orbital_period > 0.0, "{}", p.name);
            assert!((0.0..1.0).contains(&p.eccentricity), "{}", p.name);
            assert!(p.colors.len() >= 3, "{}", p.name);
            assert!(p.distance * (1.0 - p.eccentricity) > 5.0, "{} grazes the sun", p.name);
        }
    }

    #[test]
    fn test_attachments() {
        let ringed: Vec<_> = PLANETS.iter().filter(|p| p.ring.is_some()).map(|p| p.name).collect();
        assert_eq!(ringed, ["Saturn", "Uranus"]);
        let mooned: Vec<_> = PLANETS.iter().filter(|p| p.has_moon).map(|p| p.name).collect();
        assert_eq!(mooned, ["Earth"]);
        let storm: Vec<_> = PLANETS
            .iter()
            .filter(|p| p.feature == FeatureClass::Bands { storm_spot: true })
            .map(|p| p.name)
            .collect();
        assert_eq!(storm, ["Jupiter"]);
    }

    #[test]
    fn test_retrograde_bodies() {
        let retro: Vec<_> = PLANETS
            .iter()
            .filter(|p| p.rotation_period < 0.0)
            .map(|p| p.name)
            .collect();
        assert_eq!(retro, ["Venus", "Uranus"]);
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(PlanetSpec::by_name("saturn").map(|p| p.radius), Some(3.5));
        assert!(PlanetSpec::by_name("Pluto").is_none());
    }
}
