//! Feature classes: which stochastic overlay rule paints a body's surface.

use std::fmt;

/// Selects the overlay rule stamped onto a body's base gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureClass {
    /// Random dark impact circles.
    Craters,
    /// Fixed land masses plus polar ice caps.
    Continents,
    /// Horizontal cloud belts; optionally one large storm spot.
    Bands {
        /// Paint a single large red oval.
        storm_spot: bool,
    },
    /// Reddish-brown speckles plus translucent polar ice.
    Terrain,
    /// A handful of large soft white blotches.
    Storms,
    /// Faint cool horizontal bands.
    Ice,
    /// Elongated translucent streaks at shallow angles.
    Clouds,
    /// Base gradient and noise only.
    Plain,
}

impl FeatureClass {
    /// Parse a feature tag. Unknown tags fall back to [`FeatureClass::Plain`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "craters" | "cratered" => Self::Craters,
            "continents" => Self::Continents,
            "bands" | "banded" => Self::Bands { storm_spot: false },
            "terrain" => Self::Terrain,
            "storms" => Self::Storms,
            "ice" | "icy" => Self::Ice,
            "clouds" => Self::Clouds,
            "" | "plain" => Self::Plain,
            other => {
                tracing::warn!(tag = other, "Unknown feature class, using plain gradient");
                Self::Plain
            }
        }
    }

    /// Canonical tag for this class.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Craters => "craters",
            Self::Continents => "continents",
            Self::Bands { .. } => "bands",
            Self::Terrain => "terrain",
            Self::Storms => "storms",
            Self::Ice => "ice",
            Self::Clouds => "clouds",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for FeatureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bands { storm_spot: true } => write!(f, "bands+storm"),
            other => f.write_str(other.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for class in [
            FeatureClass::Craters,
            FeatureClass::Continents,
            FeatureClass::Bands { storm_spot: false },
            FeatureClass::Terrain,
            FeatureClass::Storms,
            FeatureClass::Ice,
            FeatureClass::Clouds,
            FeatureClass::Plain,
        ] {
            assert_eq!(FeatureClass::from_tag(class.tag()), class);
        }
    }

    #[test]
    fn test_unknown_tag_is_plain() {
        assert_eq!(FeatureClass::from_tag("volcanoes"), FeatureClass::Plain);
    }

    #[test]
    fn test_display_marks_storm_spot() {
        assert_eq!(
            FeatureClass::Bands { storm_spot: true }.to_string(),
            "bands+storm"
        );
    }
}
