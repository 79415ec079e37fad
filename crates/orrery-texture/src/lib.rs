//! Procedural textures: planet surfaces, bump maps, ring bands, the sun's
//! photosphere and the black hole's accretion disk. No stored image assets.

pub mod accretion;
pub mod cache;
pub mod canvas;
pub mod color;
pub mod error;
pub mod feature;
pub mod gradient;
pub mod ring;
pub mod sun;
pub mod surface;
pub mod texture;

pub use accretion::generate_accretion_disk;
pub use cache::{BodyTextures, TextureKey, TextureSet, TextureSettings};
pub use canvas::Canvas;
pub use color::Rgba;
pub use error::TextureError;
pub use feature::FeatureClass;
pub use gradient::{Gradient, Palette};
pub use ring::{RingTint, generate_ring, ring_band_profile};
pub use sun::generate_sun;
pub use surface::{SurfaceRequest, generate_bump, generate_surface};
pub use texture::Texture;
