//! Decorative object categories and their selection keys.

use std::fmt;

/// One mountable group of decorative objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectCategory {
    MilkyWay,
    StarClusters,
    Wormhole,
    BlackHole,
    Comets,
    Nebula,
    Pulsar,
    ShootingStars,
    DistantGalaxies,
    SpaceDust,
}

impl ObjectCategory {
    pub const ALL: [ObjectCategory; 10] = [
        ObjectCategory::MilkyWay,
        ObjectCategory::StarClusters,
        ObjectCategory::Wormhole,
        ObjectCategory::BlackHole,
        ObjectCategory::Comets,
        ObjectCategory::Nebula,
        ObjectCategory::Pulsar,
        ObjectCategory::ShootingStars,
        ObjectCategory::DistantGalaxies,
        ObjectCategory::SpaceDust,
    ];

    /// Key carried by "space object selected" events and used for info lookup.
    pub fn key(self) -> &'static str {
        match self {
            ObjectCategory::MilkyWay => "milkyWay",
            ObjectCategory::StarClusters => "starClusters",
            ObjectCategory::Wormhole => "wormhole",
            ObjectCategory::BlackHole => "blackHole",
            ObjectCategory::Comets => "comets",
            ObjectCategory::Nebula => "nebula",
            ObjectCategory::Pulsar => "pulsar",
            ObjectCategory::ShootingStars => "shootingStars",
            ObjectCategory::DistantGalaxies => "distantGalaxies",
            ObjectCategory::SpaceDust => "spaceDust",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Whether clicking an object of this category raises a selection event.
    pub fn is_selectable(self) -> bool {
        !matches!(self, ObjectCategory::ShootingStars | ObjectCategory::SpaceDust)
    }
}

impl fmt::Display for ObjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
