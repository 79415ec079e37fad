//! Frame driver. Measures (or synthesizes) each frame's duration and feeds it
//! to the scene, which runs its fixed-timestep updates.

use std::time::Instant;

use orrery_scene::Scene;
use tracing::trace;

/// Where frame durations come from.
#[derive(Clone, Copy, Debug)]
pub enum FrameSource {
    /// Real elapsed time between calls to [`FrameLoop::tick`].
    WallClock { previous: Instant },
    /// A constant duration per frame, for headless runs and tests.
    Fixed(f64),
}

pub struct FrameLoop {
    source: FrameSource,
    frame_count: u64,
    update_count: u64,
}

impl FrameLoop {
    /// Loop timed by the wall clock, starting now.
    pub fn wall_clock() -> Self {
        Self::with_source(FrameSource::WallClock {
            previous: Instant::now(),
        })
    }

    /// Loop where every frame lasts exactly `frame_time` seconds.
    pub fn fixed(frame_time: f64) -> Self {
        Self::with_source(FrameSource::Fixed(frame_time))
    }

    fn with_source(source: FrameSource) -> Self {
        Self {
            source,
            frame_count: 0,
            update_count: 0,
        }
    }

    fn next_frame_time(&mut self) -> f64 {
        match &mut self.source {
            FrameSource::WallClock { previous } => {
                let now = Instant::now();
                let frame_time = now.duration_since(*previous).as_secs_f64();
                *previous = now;
                frame_time
            }
            FrameSource::Fixed(dt) => *dt,
        }
    }

    /// Run one frame. Returns the number of fixed updates the scene ran.
    pub fn tick(&mut self, scene: &mut Scene) -> u32 {
        let frame_time = self.next_frame_time();
        let steps = scene.advance(frame_time);
        self.frame_count += 1;
        self.update_count += u64::from(steps);
        trace!(frame = self.frame_count, frame_time, steps, "Frame");
        steps
    }

    /// Run `frames` frames back to back.
    pub fn run(&mut self, scene: &mut Scene, frames: u64) {
        for _ in 0..frames {
            self.tick(scene);
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_config::Config;
    use orrery_scene::EventSink;

    fn small_scene(fixed_dt: f64) -> Scene {
        let mut config = Config::default();
        config.scene.seed = Some(1);
        config.simulation.fixed_dt = fixed_dt;
        let t = &mut config.textures;
        (t.planet_width, t.planet_height) = (16, 8);
        (t.bump_width, t.bump_height) = (8, 4);
        (t.ring_width, t.ring_height) = (16, 2);
        t.sun_size = 8;
        t.accretion_size = 8;
        Scene::new(&config, EventSink::channel().0)
    }

    #[test]
    fn test_fixed_updates_per_frame() {
        let mut scene = small_scene(0.125);
        let mut frame_loop = FrameLoop::fixed(0.25);
        assert_eq!(frame_loop.tick(&mut scene), 2);
        frame_loop.run(&mut scene, 4);
        assert_eq!(frame_loop.frame_count(), 5);
        assert_eq!(frame_loop.update_count(), 10);
        assert_eq!(scene.clock().update_count(), 10);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut scene = small_scene(0.5);
        let mut frame_loop = FrameLoop::fixed(0.125);
        let steps: Vec<u32> = (0..8).map(|_| frame_loop.tick(&mut scene)).collect();
        assert_eq!(steps, [0, 0, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_long_frame_clamped() {
        let mut scene = small_scene(0.125);
        let mut frame_loop = FrameLoop::fixed(10.0);
        assert_eq!(frame_loop.tick(&mut scene), 2);
    }

    #[test]
    fn test_wall_clock_first_tick_is_small() {
        let mut scene = small_scene(1.0);
        let mut frame_loop = FrameLoop::wall_clock();
        assert_eq!(frame_loop.tick(&mut scene), 0);
        assert_eq!(frame_loop.frame_count(), 1);
    }
}
