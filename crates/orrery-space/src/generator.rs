//! The two-function contract every decorative object follows: a one-time
//! parameter draw from a seed, then continuous per-frame animation.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::category::ObjectCategory;
use crate::hitbox::{Hitbox, Ray, nearest_hit};
use crate::particles::ParticleVertex;
use crate::pose::Pose;

pub trait Decoration: Sized {
    /// Placement and look, supplied by the scene.
    type Spec;

    const CATEGORY: ObjectCategory;

    /// Draw every random parameter. Called exactly once per instance.
    fn generate(spec: &Self::Spec, rng: &mut ChaCha8Rng) -> Self;

    /// Build from a seed.
    fn from_seed(spec: &Self::Spec, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate(spec, &mut rng)
    }

    /// Advance to elapsed time `t`. `dt` drives in-place buffer flow.
    fn animate(&mut self, t: f32, dt: f32);

    /// Root transform after the last `animate`.
    fn pose(&self) -> Pose;

    /// World-space selection volumes. Empty when not selectable.
    fn hitboxes(&self) -> Vec<Hitbox> {
        Vec::new()
    }

    /// Object-local point sprites, if any.
    fn particles(&self) -> &[ParticleVertex] {
        &[]
    }

    /// Nearest hit distance along `ray`.
    fn pick(&self, ray: &Ray) -> Option<f32> {
        if !Self::CATEGORY.is_selectable() {
            return None;
        }
        nearest_hit(&self.hitboxes(), ray)
    }
}
