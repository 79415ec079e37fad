//! Decorative deep-space objects: each is a one-time seeded parameter draw
//! plus a continuous per-frame animation rule.

pub mod black_hole;
pub mod category;
pub mod cluster;
pub mod comet;
pub mod corona;
pub mod distant_galaxy;
pub mod dust;
pub mod galaxy;
pub mod generator;
pub mod hitbox;
pub mod nebula;
pub mod object;
pub mod particles;
pub mod pose;
pub mod pulsar;
pub mod shooting_star;
pub mod wormhole;

pub use black_hole::{BlackHole, BlackHoleSpec};
pub use category::ObjectCategory;
pub use cluster::{ClusterSpec, StarCluster};
pub use comet::{Comet, CometSpec};
pub use corona::SunCorona;
pub use distant_galaxy::{DistantGalaxies, DistantGalaxy, DistantGalaxySpec, GalaxyShape};
pub use dust::{DustSpec, SpaceDust};
pub use galaxy::{Galaxy, GalaxySpec};
pub use generator::Decoration;
pub use hitbox::{Hitbox, Ray, nearest_hit};
pub use nebula::{Nebula, NebulaSpec};
pub use object::DecorativeObject;
pub use particles::ParticleVertex;
pub use pose::Pose;
pub use pulsar::{Pulsar, PulsarSpec};
pub use shooting_star::{ShootingStarSpec, ShootingStars};
pub use wormhole::{Wormhole, WormholeSpec};
