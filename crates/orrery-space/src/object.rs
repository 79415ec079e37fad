//! Tagged union over every decorative object kind.

use glam::Vec3;

use crate::black_hole::BlackHole;
use crate::category::ObjectCategory;
use crate::cluster::StarCluster;
use crate::comet::Comet;
use crate::distant_galaxy::DistantGalaxies;
use crate::dust::SpaceDust;
use crate::galaxy::Galaxy;
use crate::generator::Decoration;
use crate::hitbox::{Hitbox, Ray};
use crate::nebula::Nebula;
use crate::particles::ParticleVertex;
use crate::pose::Pose;
use crate::pulsar::Pulsar;
use crate::shooting_star::ShootingStars;
use crate::wormhole::Wormhole;

pub enum DecorativeObject {
    Galaxy(Galaxy),
    Cluster(StarCluster),
    Wormhole(Wormhole),
    BlackHole(BlackHole),
    Comet(Comet),
    Nebula(Nebula),
    Pulsar(Pulsar),
    ShootingStars(ShootingStars),
    DistantGalaxies(DistantGalaxies),
    Dust(SpaceDust),
}

macro_rules! dispatch {
    ($self:expr, $obj:ident => $body:expr) => {
        match $self {
            DecorativeObject::Galaxy($obj) => $body,
            DecorativeObject::Cluster($obj) => $body,
            DecorativeObject::Wormhole($obj) => $body,
            DecorativeObject::BlackHole($obj) => $body,
            DecorativeObject::Comet($obj) => $body,
            DecorativeObject::Nebula($obj) => $body,
            DecorativeObject::Pulsar($obj) => $body,
            DecorativeObject::ShootingStars($obj) => $body,
            DecorativeObject::DistantGalaxies($obj) => $body,
            DecorativeObject::Dust($obj) => $body,
        }
    };
}

impl DecorativeObject {
    pub fn category(&self) -> ObjectCategory {
        fn of<D: Decoration>(_: &D) -> ObjectCategory {
            D::CATEGORY
        }
        dispatch!(self, o => of(o))
    }

    pub fn animate(&mut self, t: f32, dt: f32) {
        dispatch!(self, o => o.animate(t, dt))
    }

    pub fn pose(&self) -> Pose {
        dispatch!(self, o => o.pose())
    }

    pub fn hitboxes(&self) -> Vec<Hitbox> {
        dispatch!(self, o => o.hitboxes())
    }

    pub fn particles(&self) -> &[ParticleVertex] {
        dispatch!(self, o => o.particles())
    }

    pub fn pick(&self, ray: &Ray) -> Option<f32> {
        dispatch!(self, o => o.pick(ray))
    }

    /// World-space anchor, used for logging and info panels.
    pub fn anchor(&self) -> Vec3 {
        self.pose().translation
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(impl From<$ty> for DecorativeObject {
            fn from(value: $ty) -> Self {
                DecorativeObject::$variant(value)
            }
        })*
    };
}

impl_from!(
    Galaxy(Galaxy),
    Cluster(StarCluster),
    Wormhole(Wormhole),
    BlackHole(BlackHole),
    Comet(Comet),
    Nebula(Nebula),
    Pulsar(Pulsar),
    ShootingStars(ShootingStars),
    DistantGalaxies(DistantGalaxies),
    Dust(SpaceDust),
);
