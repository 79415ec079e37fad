//! Where each decorative category sits in the scene and how it is colored.

use glam::Vec3;
use orrery_space::{
    BlackHole, BlackHoleSpec, ClusterSpec, Comet, CometSpec, DecorativeObject, Decoration,
    DistantGalaxies, DistantGalaxySpec, DustSpec, Galaxy, GalaxySpec, Nebula, NebulaSpec,
    ObjectCategory, Pulsar, PulsarSpec, ShootingStarSpec, ShootingStars, SpaceDust, StarCluster,
    Wormhole, WormholeSpec,
};
use orrery_texture::Rgba;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::theme::SpaceTheme;

pub const GALAXY_POSITION: Vec3 = Vec3::new(0.0, -100.0, -400.0);
pub const WORMHOLE_POSITION: Vec3 = Vec3::new(-150.0, 30.0, -100.0);
pub const WORMHOLE_SCALE: f32 = 1.5;
pub const BLACK_HOLE_POSITION: Vec3 = Vec3::new(180.0, -40.0, -150.0);
pub const BLACK_HOLE_SCALE: f32 = 2.0;
pub const PULSAR_POSITION: Vec3 = Vec3::new(-120.0, 100.0, -200.0);
pub const SHOOTING_STAR_COUNT: usize = 8;
pub const DISTANT_GALAXY_COUNT: usize = 15;
pub const DUST_COUNT: usize = 5000;
const MOCCASIN: Rgba = Rgba::new(1.0, 0.894, 0.71, 1.0);
const CYAN: Rgba = Rgba::new(0.0, 1.0, 1.0, 1.0);

/// Whether changing the theme changes how this category looks.
pub fn uses_theme(category: ObjectCategory) -> bool {
    !matches!(
        category,
        ObjectCategory::BlackHole | ObjectCategory::Comets | ObjectCategory::DistantGalaxies
    )
}

fn spawn<D>(spec: &D::Spec, rng: &mut ChaCha8Rng) -> DecorativeObject
where
    D: Decoration + Into<DecorativeObject>,
{
    D::from_seed(spec, rng.random()).into()
}

/// Build every instance of `category`. Each instance draws its parameters
/// from a fresh seed taken from `rng`.
pub fn build_category(
    category: ObjectCategory,
    theme: &SpaceTheme,
    accretion_size: u32,
    rng: &mut ChaCha8Rng,
) -> Vec<DecorativeObject> {
    match category {
        ObjectCategory::MilkyWay => vec![spawn::<Galaxy>(
            &GalaxySpec {
                position: GALAXY_POSITION,
                accent: theme.accent,
                ..GalaxySpec::default()
            },
            rng,
        )],
        ObjectCategory::StarClusters => [
            (Vec3::new(150.0, 80.0, -200.0), 400, 25.0, Rgba::WHITE),
            (Vec3::new(-180.0, 60.0, -180.0), 300, 20.0, theme.stars),
            (Vec3::new(80.0, -50.0, -250.0), 350, 22.0, MOCCASIN),
        ]
        .into_iter()
        .map(|(position, count, radius, color)| {
            spawn::<StarCluster>(
                &ClusterSpec {
                    position,
                    count,
                    radius,
                    color,
                },
                rng,
            )
        })
        .collect(),
        ObjectCategory::Wormhole => vec![spawn::<Wormhole>(
            &WormholeSpec::new(WORMHOLE_POSITION, WORMHOLE_SCALE, theme.accent),
            rng,
        )],
        ObjectCategory::BlackHole => vec![spawn::<BlackHole>(
            &BlackHoleSpec {
                position: BLACK_HOLE_POSITION,
                scale: BLACK_HOLE_SCALE,
                texture_size: accretion_size,
            },
            rng,
        )],
        ObjectCategory::Comets => [
            CometSpec::new(Vec3::new(100.0, 50.0, -50.0), 0.8, CYAN),
            CometSpec::new(Vec3::new(-80.0, 30.0, -80.0), 1.2, Rgba::WHITE),
        ]
        .iter()
        .map(|spec| spawn::<Comet>(spec, rng))
        .collect(),
        ObjectCategory::Nebula => [
            NebulaSpec::new(
                Vec3::new(200.0, 100.0, -350.0),
                1.5,
                theme.nebula_colors.clone(),
            ),
            NebulaSpec::new(
                Vec3::new(-250.0, -50.0, -300.0),
                1.2,
                theme.secondary_nebula_colors(),
            ),
        ]
        .iter()
        .map(|spec| spawn::<Nebula>(spec, rng))
        .collect(),
        ObjectCategory::Pulsar => vec![spawn::<Pulsar>(
            &PulsarSpec {
                position: PULSAR_POSITION,
                color: theme.accent,
            },
            rng,
        )],
        ObjectCategory::ShootingStars => vec![spawn::<ShootingStars>(
            &ShootingStarSpec {
                count: SHOOTING_STAR_COUNT,
                color: theme.stars,
            },
            rng,
        )],
        ObjectCategory::DistantGalaxies => vec![spawn::<DistantGalaxies>(
            &DistantGalaxySpec {
                count: DISTANT_GALAXY_COUNT,
            },
            rng,
        )],
        ObjectCategory::SpaceDust => vec![spawn::<SpaceDust>(
            &DustSpec {
                count: DUST_COUNT,
                color: theme.stars,
            },
            rng,
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_every_category_builds_its_own_kind() {
        let theme = SpaceTheme::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for category in ObjectCategory::ALL {
            let objects = build_category(category, &theme, 16, &mut rng);
            assert!(!objects.is_empty(), "{category}");
            assert!(objects.iter().all(|o| o.category() == category), "{category}");
        }
    }

    #[test]
    fn test_instance_counts() {
        let theme = SpaceTheme::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let count = |c, rng: &mut ChaCha8Rng| build_category(c, &theme, 16, rng).len();
        assert_eq!(count(ObjectCategory::StarClusters, &mut rng), 3);
        assert_eq!(count(ObjectCategory::Comets, &mut rng), 2);
        assert_eq!(count(ObjectCategory::Nebula, &mut rng), 2);
        assert_eq!(count(ObjectCategory::Pulsar, &mut rng), 1);
    }

    #[test]
    fn test_placements() {
        let theme = SpaceTheme::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let pulsar = build_category(ObjectCategory::Pulsar, &theme, 16, &mut rng);
        assert_eq!(pulsar[0].anchor(), PULSAR_POSITION);
        let hole = build_category(ObjectCategory::BlackHole, &theme, 16, &mut rng);
        assert_eq!(hole[0].anchor(), BLACK_HOLE_POSITION);
        assert_eq!(hole[0].pose().scale, Vec3::splat(BLACK_HOLE_SCALE));
    }

    #[test]
    fn test_successive_builds_draw_fresh_parameters() {
        let theme = SpaceTheme::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let a = build_category(ObjectCategory::SpaceDust, &theme, 16, &mut rng);
        let b = build_category(ObjectCategory::SpaceDust, &theme, 16, &mut rng);
        assert_ne!(a[0].particles()[0].position, b[0].particles()[0].position);
    }

    #[test]
    fn test_theme_dependence() {
        assert!(uses_theme(ObjectCategory::MilkyWay));
        assert!(uses_theme(ObjectCategory::SpaceDust));
        assert!(!uses_theme(ObjectCategory::BlackHole));
        assert!(!uses_theme(ObjectCategory::Comets));
    }
}
