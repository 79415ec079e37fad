//! Plain-data inputs the shell hands to the scene.

use orrery_config::{SceneConfig, VisibilityConfig};
use orrery_space::ObjectCategory;
use rustc_hash::FxHashSet;

use crate::theme::SpaceTheme;

/// The set of mounted decorative categories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    mounted: FxHashSet<ObjectCategory>,
}

impl Visibility {
    pub fn all() -> Self {
        Self {
            mounted: ObjectCategory::ALL.into_iter().collect(),
        }
    }

    pub fn from_config(config: &VisibilityConfig) -> Self {
        let flags = [
            (ObjectCategory::MilkyWay, config.milky_way),
            (ObjectCategory::StarClusters, config.star_clusters),
            (ObjectCategory::Wormhole, config.wormhole),
            (ObjectCategory::BlackHole, config.black_hole),
            (ObjectCategory::Comets, config.comets),
            (ObjectCategory::Nebula, config.nebula),
            (ObjectCategory::Pulsar, config.pulsar),
            (ObjectCategory::ShootingStars, config.shooting_stars),
            (ObjectCategory::DistantGalaxies, config.distant_galaxies),
            (ObjectCategory::SpaceDust, config.space_dust),
        ];
        Self {
            mounted: flags
                .into_iter()
                .filter_map(|(category, on)| on.then_some(category))
                .collect(),
        }
    }

    pub fn is_visible(&self, category: ObjectCategory) -> bool {
        self.mounted.contains(&category)
    }

    pub fn set(&mut self, category: ObjectCategory, visible: bool) {
        if visible {
            self.mounted.insert(category);
        } else {
            self.mounted.remove(&category);
        }
    }

    /// Mounted categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = ObjectCategory> + '_ {
        ObjectCategory::ALL
            .into_iter()
            .filter(|c| self.mounted.contains(c))
    }
}

/// Everything the shell can change at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneControls {
    pub speed: f32,
    pub show_orbits: bool,
    pub show_labels: bool,
    pub theme: SpaceTheme,
    pub visibility: Visibility,
}

impl SceneControls {
    pub fn from_config(scene: &SceneConfig, speed: f32) -> Self {
        Self {
            speed,
            show_orbits: scene.show_orbits,
            show_labels: scene.show_labels,
            theme: SpaceTheme::from_config(scene),
            visibility: Visibility::from_config(&scene.visibility),
        }
    }
}

impl Default for SceneControls {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default(), 1.0)
    }
}
