//! Shared simulation clock with a fixed-step accumulator.
//!
//! The clock is written only by the loop driver. Every per-frame update
//! receives a [`FrameTime`] by value instead of reading ambient state.

use tracing::warn;

/// Default fixed step: 60 Hz.
pub const DEFAULT_FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame the accumulator will absorb. Longer frames are clamped and
/// the simulation slows down instead of running dozens of catch-up steps.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Clock parameters for one update step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Monotonic elapsed time in seconds, unscaled.
    pub elapsed: f32,
    /// Step length in seconds, unscaled.
    pub dt: f32,
    /// Non-negative speed multiplier.
    pub speed: f32,
}

impl FrameTime {
    /// Elapsed time scaled by the speed multiplier.
    pub fn scaled_elapsed(&self) -> f32 {
        self.elapsed * self.speed
    }
}

/// Monotonic elapsed time plus the user-controlled speed multiplier.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    elapsed: f64,
    speed: f32,
    fixed_dt: f64,
    accumulator: f64,
    frame_count: u64,
    update_count: u64,
}

impl SimulationClock {
    pub fn new(speed: f32, fixed_dt: f64) -> Self {
        let fixed_dt = if fixed_dt.is_finite() && fixed_dt > 0.0 {
            fixed_dt
        } else {
            warn!(fixed_dt, "Invalid fixed timestep, using 60 Hz");
            DEFAULT_FIXED_DT
        };
        let mut clock = Self {
            elapsed: 0.0,
            speed: 1.0,
            fixed_dt,
            accumulator: 0.0,
            frame_count: 0,
            update_count: 0,
        };
        clock.set_speed(speed);
        clock
    }

    /// Set the speed multiplier. Negative or non-finite values become 0.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = if speed.is_finite() && speed >= 0.0 {
            speed
        } else {
            warn!(speed, "Speed multiplier must be non-negative, pausing");
            0.0
        };
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.speed == 0.0
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn fixed_dt(&self) -> f64 {
        self.fixed_dt
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Interpolation factor between the last two fixed steps, in `[0, 1)`.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / self.fixed_dt
        } else {
            0.0
        }
    }

    /// Feed one real frame of `frame_time` seconds. Runs `update` zero or more
    /// times at the fixed rate and returns the number of steps taken.
    pub fn tick(&mut self, frame_time: f64, mut update: impl FnMut(FrameTime)) -> u32 {
        let mut frame_time = if frame_time.is_finite() { frame_time.max(0.0) } else { 0.0 };
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;
        let mut steps = 0;
        while self.accumulator >= self.fixed_dt {
            self.elapsed += self.fixed_dt;
            self.accumulator -= self.fixed_dt;
            self.update_count += 1;
            steps += 1;
            update(self.frame_time());
        }
        self.frame_count += 1;
        steps
    }

    /// Clock parameters for an update at the current elapsed time.
    pub fn frame_time(&self) -> FrameTime {
        FrameTime {
            elapsed: self.elapsed as f32,
            dt: self.fixed_dt as f32,
            speed: self.speed,
        }
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(1.0, DEFAULT_FIXED_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step() {
        let mut clock = SimulationClock::default();
        let mut updates = 0;
        clock.tick(DEFAULT_FIXED_DT, |_| updates += 1);
        assert_eq!(updates, 1);
        assert!(clock.alpha().abs() < 1e-9);
    }

    #[test]
    fn test_partial_step_accumulates() {
        let mut clock = SimulationClock::default();
        assert_eq!(clock.tick(0.5 * DEFAULT_FIXED_DT, |_| {}), 0);
        assert!((clock.alpha() - 0.5).abs() < 1e-9);
        assert_eq!(clock.tick(0.5 * DEFAULT_FIXED_DT, |_| {}), 1);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut clock = SimulationClock::default();
        let steps = clock.tick(5.0, |_| {});
        let max_steps = (MAX_FRAME_TIME / DEFAULT_FIXED_DT).ceil() as u32;
        assert!(steps > 0 && steps <= max_steps);
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let mut clock = SimulationClock::default();
        let mut last = -1.0_f32;
        for ft in [0.017, 0.015, 0.020, 0.0, -1.0, f64::NAN, 0.033] {
            clock.tick(ft, |frame| {
                assert!(frame.elapsed > last);
                last = frame.elapsed;
            });
        }
        let expected = clock.update_count() as f64 * DEFAULT_FIXED_DT;
        assert!((clock.elapsed() - expected).abs() < 1e-9);
        assert_eq!(clock.frame_count(), 7);
    }

    #[test]
    fn test_speed_is_never_negative() {
        let mut clock = SimulationClock::new(-2.0, DEFAULT_FIXED_DT);
        assert!(clock.is_paused());
        clock.set_speed(f32::NAN);
        assert_eq!(clock.speed(), 0.0);
        clock.set_speed(3.0);
        assert_eq!(clock.speed(), 3.0);
        let frame = clock.frame_time();
        assert_eq!(frame.speed, 3.0);
        assert_eq!(frame.scaled_elapsed(), 0.0);
    }

    #[test]
    fn test_pause_still_advances_elapsed() {
        let mut clock = SimulationClock::new(0.0, DEFAULT_FIXED_DT);
        clock.tick(0.1, |frame| assert_eq!(frame.speed, 0.0));
        assert!(clock.elapsed() > 0.0);
    }

    #[test]
    fn test_invalid_fixed_dt_uses_default() {
        let clock = SimulationClock::new(1.0, 0.0);
        assert_eq!(clock.fixed_dt(), DEFAULT_FIXED_DT);
    }
}
