//! Per-body orbit and spin integration.
//!
//! Every angle accumulates from frame deltas scaled by the speed multiplier,
//! so a multiplier of zero freezes the body where it is and a speed change
//! never moves it discontinuously.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::clock::FrameTime;
use crate::kepler::{OrbitConstants, orbital_position, orbital_radius};
use crate::params::OrbitalParams;

/// Cloud shells spin this much faster than the surface.
pub const CLOUD_SPIN_FACTOR: f32 = 1.2;
/// Atmosphere shell spin rate, radians per second.
pub const ATMOSPHERE_SPIN_RATE: f32 = 0.05;
/// Ring plane precession rate, radians per second.
pub const RING_PRECESSION_RATE: f32 = 0.02;
/// Moon revolution rate, radians per second.
pub const MOON_ORBIT_RATE: f32 = 3.0;
/// Moon orbit radius as a multiple of the host radius.
pub const MOON_DISTANCE_FACTOR: f32 = 2.5;
/// Moon radius as a multiple of the host radius.
pub const MOON_SIZE_FACTOR: f32 = 0.27;
/// Amplitude of the moon's vertical wobble.
pub const MOON_WOBBLE: f32 = 0.3;

/// The wobble runs at half the revolution rate, so the moon angle wraps at
/// two turns.
const MOON_ANGLE_PERIOD: f32 = 2.0 * TAU;

/// Moon position relative to its host at revolution angle `angle`.
pub fn moon_offset(host_radius: f32, angle: f32) -> Vec3 {
    let distance = host_radius * MOON_DISTANCE_FACTOR;
    let (sin, cos) = angle.sin_cos();
    Vec3::new(cos * distance, (angle * 0.5).sin() * MOON_WOBBLE, sin * distance)
}

/// Snapshot of everything that moves on a body during one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPose {
    /// Orbital angle in radians, wrapped to `[0, TAU)`.
    pub theta: f32,
    /// Body center relative to the system origin.
    pub position: Vec3,
    /// Surface rotation about the body's tilted y axis.
    pub spin: f32,
    pub cloud_spin: f32,
    pub atmosphere_spin: f32,
    /// Ring group rotation about its own normal.
    pub ring_angle: f32,
    /// Moon offset from the body center and its own spin, if it has one.
    pub moon: Option<(Vec3, f32)>,
}

/// Integrator state for one body. The start phase is fixed at construction.
#[derive(Clone, Debug)]
pub struct Orbit {
    params: OrbitalParams,
    start_phase: f32,
    orbital_speed: f32,
    rotation_speed: f32,
    theta: f32,
    spin: f32,
    cloud_spin: f32,
    atmosphere_spin: f32,
    ring_angle: f32,
    moon_angle: f32,
    moon_spin: f32,
}

impl Orbit {
    pub fn new(params: OrbitalParams, constants: &OrbitConstants, start_phase: f32) -> Self {
        Self {
            params,
            start_phase,
            orbital_speed: constants.orbital_speed(params.orbital_period),
            rotation_speed: constants.rotation_speed(params.rotation_period),
            theta: start_phase.rem_euclid(TAU),
            spin: 0.0,
            cloud_spin: 0.0,
            atmosphere_spin: 0.0,
            ring_angle: 0.0,
            moon_angle: 0.0,
            moon_spin: 0.0,
        }
    }

    pub fn params(&self) -> &OrbitalParams {
        &self.params
    }

    pub fn start_phase(&self) -> f32 {
        self.start_phase
    }

    pub fn orbital_speed(&self) -> f32 {
        self.orbital_speed
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Current orbital angle, wrapped to `[0, TAU)`.
    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    /// Orbital angle after running at a constant multiplier `s` for `t`
    /// seconds from the start phase.
    pub fn theta_at(&self, t: f32, s: f32) -> f32 {
        self.start_phase + t * self.orbital_speed * s
    }

    /// Distance from the focus at the current angle.
    pub fn radius(&self) -> f32 {
        orbital_radius(self.params.distance, self.params.eccentricity, self.theta)
    }

    /// Advance every accumulated angle by one frame and return the resulting
    /// pose. `host_radius` positions the moon when `has_moon` is set.
    pub fn advance(&mut self, frame: FrameTime, host_radius: f32, has_moon: bool) -> OrbitPose {
        let FrameTime { dt, speed: s, .. } = frame;
        let step = dt * s;

        self.theta = (self.theta + step * self.orbital_speed).rem_euclid(TAU);
        self.spin += step * self.rotation_speed;
        self.cloud_spin += step * self.rotation_speed * CLOUD_SPIN_FACTOR;
        self.atmosphere_spin += step * ATMOSPHERE_SPIN_RATE;
        self.ring_angle += step * RING_PRECESSION_RATE;

        let moon = if has_moon {
            self.moon_angle =
                (self.moon_angle + step * MOON_ORBIT_RATE).rem_euclid(MOON_ANGLE_PERIOD);
            self.moon_spin += step;
            Some((moon_offset(host_radius, self.moon_angle), self.moon_spin))
        } else {
            None
        };

        OrbitPose {
            theta: self.theta,
            position: orbital_position(self.params.distance, self.params.eccentricity, self.theta),
            spin: self.spin,
            cloud_spin: self.cloud_spin,
            atmosphere_spin: self.atmosphere_spin,
            ring_angle: self.ring_angle,
            moon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn earth() -> Orbit {
        let params = OrbitalParams::new("Earth", 24.0, 0.017, 365.0, 1.0, 23.4);
        Orbit::new(params, &OrbitConstants::default(), 0.7)
    }

    fn frame(elapsed: f32, dt: f32, speed: f32) -> FrameTime {
        FrameTime { elapsed, dt, speed }
    }

    #[test]
    fn test_zero_speed_freezes_everything() {
        let mut orbit = earth();
        let first = orbit.advance(frame(0.0, 0.016, 0.0), 1.2, true);
        let mut last = first;
        for i in 1..500 {
            last = orbit.advance(frame(i as f32 * 0.37, 0.016, 0.0), 1.2, true);
        }
        assert_eq!(first.theta, last.theta);
        assert_eq!(first.position, last.position);
        assert_eq!(last.spin, 0.0);
        assert_eq!(last.cloud_spin, 0.0);
        assert_eq!(last.atmosphere_spin, 0.0);
        assert_eq!(last.ring_angle, 0.0);
        assert_eq!(first.moon, last.moon);
    }

    #[test]
    fn test_theta_is_periodic() {
        let orbit = earth();
        let s = 1.5;
        let period = TAU / (orbit.orbital_speed() * s);
        for t in [0.0_f32, 3.0, 17.5] {
            let a = orbit.theta_at(t, s).rem_euclid(TAU);
            let b = orbit.theta_at(t + period, s).rem_euclid(TAU);
            let diff = (a - b).abs().min(TAU - (a - b).abs());
            assert!(diff < 1e-3, "t={t} a={a} b={b}");
        }
    }

    #[test]
    fn test_prograde_and_retrograde_spin() {
        let constants = OrbitConstants::default();
        let mut pro = Orbit::new(
            OrbitalParams::new("Pro", 10.0, 0.0, 100.0, 10.0, 0.0),
            &constants,
            0.0,
        );
        let mut retro = Orbit::new(
            OrbitalParams::new("Retro", 10.0, 0.0, 100.0, -10.0, 0.0),
            &constants,
            0.0,
        );
        let mut prev_pro = pro.spin();
        let mut prev_retro = retro.spin();
        for i in 0..100 {
            let f = frame(i as f32 * 0.1, 0.1, 1.0);
            let p = pro.advance(f, 1.0, false).spin;
            let r = retro.advance(f, 1.0, false).spin;
            assert!(p > prev_pro);
            assert!(r < prev_retro);
            prev_pro = p;
            prev_retro = r;
        }
        assert!((pro.spin() + retro.spin()).abs() < 1e-4);
    }

    #[test]
    fn test_spin_rate_scales_with_inverse_period() {
        let constants = OrbitConstants::default();
        let mut fast = Orbit::new(
            OrbitalParams::new("Fast", 10.0, 0.0, 100.0, 2.0, 0.0),
            &constants,
            0.0,
        );
        let mut slow = Orbit::new(
            OrbitalParams::new("Slow", 10.0, 0.0, 100.0, 8.0, 0.0),
            &constants,
            0.0,
        );
        let f = frame(1.0, 0.5, 1.0);
        let ratio = fast.advance(f, 1.0, false).spin / slow.advance(f, 1.0, false).spin;
        assert!((ratio - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_secondary_rates() {
        let mut orbit = earth();
        let pose = orbit.advance(frame(1.0, 1.0, 1.0), 1.2, true);
        assert!((pose.cloud_spin - pose.spin * CLOUD_SPIN_FACTOR).abs() < 1e-6);
        assert!((pose.atmosphere_spin - ATMOSPHERE_SPIN_RATE).abs() < 1e-6);
        assert!((pose.ring_angle - RING_PRECESSION_RATE).abs() < 1e-6);
        let (offset, moon_spin) = pose.moon.expect("earth has a moon");
        assert!((moon_spin - 1.0).abs() < 1e-6);
        let planar = (offset.x * offset.x + offset.z * offset.z).sqrt();
        assert!((planar - 1.2 * MOON_DISTANCE_FACTOR).abs() < 1e-4);
    }

    #[test]
    fn test_moon_wobble_is_bounded() {
        for i in 0..200 {
            let off = moon_offset(1.2, i as f32 * 0.13);
            assert!(off.y.abs() <= MOON_WOBBLE + 1e-6);
        }
    }

    #[test]
    fn test_position_matches_radius() {
        let mut orbit = earth();
        for _ in 0..3 {
            let pose = orbit.advance(frame(0.0, 2.5, 1.0), 1.2, false);
            assert!((pose.position.length() - orbit.radius()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_accumulated_theta_matches_closed_form() {
        let mut orbit = earth();
        let dt = 0.25;
        for i in 1..=80 {
            orbit.advance(frame(i as f32 * dt, dt, 2.0), 1.2, false);
        }
        let expected = orbit.theta_at(80.0 * dt, 2.0).rem_euclid(TAU);
        assert!((orbit.theta() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_pause_holds_current_position() {
        let mut orbit = earth();
        let mut running = orbit.advance(frame(0.0, 0.0, 1.0), 1.2, true);
        for i in 1..600 {
            running = orbit.advance(frame(i as f32 / 60.0, 1.0 / 60.0, 1.0), 1.2, true);
        }
        let paused = orbit.advance(frame(10.0, 1.0 / 60.0, 0.0), 1.2, true);
        assert_eq!(paused.position, running.position);
        assert_eq!(paused.theta, running.theta);
        assert_eq!(paused.moon, running.moon);
        assert_ne!(paused.theta, orbit.start_phase());
    }

    #[test]
    fn test_speed_change_is_continuous() {
        let mut orbit = earth();
        let dt = 1.0 / 60.0;
        let mut prev = orbit.advance(frame(0.0, 0.0, 1.0), 1.2, false).position;
        for (i, s) in [1.0, 1.0, 5.0, 5.0, 0.5, 3.0].into_iter().enumerate() {
            let pos = orbit.advance(frame(i as f32 * dt, dt, s), 1.2, false).position;
            let max_step = dt * s * orbit.orbital_speed() * 25.0;
            assert!(pos.distance(prev) <= max_step + 1e-4, "step {i} jumped");
            prev = pos;
        }
    }

    #[test]
    fn test_theta_stays_wrapped_in_long_runs() {
        let mut orbit = earth();
        for i in 0..100_000 {
            let pose = orbit.advance(frame(i as f32, 1.0, 10.0), 1.2, false);
            assert!((0.0..TAU).contains(&pose.theta));
        }
        let before = orbit.theta();
        orbit.advance(frame(1.0e6, 1.0 / 60.0, 1.0), 1.2, false);
        assert!(orbit.theta() != before);
    }
}
