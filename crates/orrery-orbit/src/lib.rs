//! Orbit and rotation integration: Kepler-ellipse positions, accumulated
//! spins, secondary motions and the shared simulation clock.

pub mod clock;
pub mod kepler;
pub mod orbit;
pub mod params;

pub use clock::{DEFAULT_FIXED_DT, FrameTime, MAX_FRAME_TIME, SimulationClock};
pub use kepler::{
    MAX_ECCENTRICITY, OrbitConstants, orbit_path, orbital_position, orbital_radius,
};
pub use orbit::{MOON_DISTANCE_FACTOR, MOON_SIZE_FACTOR, Orbit, OrbitPose, moon_offset};
pub use params::OrbitalParams;
