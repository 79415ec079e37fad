//! The sun at the origin: a procedurally textured core wrapped in a pulsing
//! corona. Not selectable.

use std::sync::Arc;

use orrery_orbit::FrameTime;
use orrery_space::corona::SUN_RADIUS;
use orrery_space::{Pose, SunCorona};
use orrery_texture::{Texture, generate_sun};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const CORONA_PARTICLES: usize = 2000;

pub struct Sun {
    surface: Arc<Texture>,
    corona: SunCorona,
}

impl Sun {
    pub fn new(texture_size: u32, noise_amplitude: f32, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self {
            surface: Arc::new(generate_sun(texture_size, noise_amplitude, &mut rng)),
            corona: SunCorona::generate(CORONA_PARTICLES, &mut rng),
        }
    }

    pub fn radius(&self) -> f32 {
        SUN_RADIUS
    }

    pub fn surface(&self) -> &Arc<Texture> {
        &self.surface
    }

    pub fn corona(&self) -> &SunCorona {
        &self.corona
    }

    /// The sun keeps turning while planets are paused, so only unscaled time
    /// is used.
    pub fn update(&mut self, frame: FrameTime) {
        self.corona.animate(frame.elapsed, frame.dt);
    }

    pub fn core_pose(&self) -> Pose {
        Pose::IDENTITY.with_euler(0.0, self.corona.core_spin(), 0.0)
    }

    pub fn corona_pose(&self) -> Pose {
        let (nod, spin) = self.corona.corona_rotation();
        Pose::IDENTITY.with_euler(nod, spin, 0.0)
    }

    pub fn flare_pose(&self) -> Pose {
        let (spin, tilt) = self.corona.flare_rotation();
        Pose::IDENTITY.with_euler(0.0, spin, tilt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_spins_while_paused() {
        let mut sun = Sun::new(32, 10.0, 1);
        let before = sun.core_pose();
        sun.update(FrameTime {
            elapsed: 2.0,
            dt: 1.0,
            speed: 0.0,
        });
        assert_ne!(sun.core_pose(), before);
        assert_eq!(sun.corona().particles().len(), CORONA_PARTICLES);
        assert_eq!(sun.surface().dimensions(), (32, 32));
    }
}
