//! Scene assembly: the planet catalog, composed celestial bodies, the sun,
//! the asteroid belt, orbit paths, decorative categories and selection.

pub mod belt;
pub mod body;
pub mod catalog;
pub mod controls;
pub mod events;
pub mod layout;
pub mod orbit_path;
pub mod scene;
pub mod sun;
pub mod theme;

pub use belt::AsteroidBelt;
pub use body::{CelestialBody, MoonState, RingBand};
pub use catalog::{AtmosphereSpec, PLANETS, PlanetSpec, RingSpec};
pub use controls::{SceneControls, Visibility};
pub use events::{EventSink, SceneEvent};
pub use orbit_path::OrbitPath;
pub use scene::{AUTO_ROTATE_SPEED, Label, PickHit, Scene, SceneStats};
pub use sun::Sun;
pub use theme::SpaceTheme;
