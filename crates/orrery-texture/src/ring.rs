//! Ring band maps for ringed planets.

use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::texture::Texture;

const REFERENCE_COLUMNS: usize = 512;

/// Color treatment for a ring map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RingTint {
    /// Sandy, fully weighted bands.
    Warm,
    /// Pale blue-gray bands at half strength.
    Cool,
}

impl RingTint {
    fn base(self) -> (f32, f32, f32) {
        match self {
            RingTint::Warm => (210.0, 180.0, 140.0),
            RingTint::Cool => (180.0, 200.0, 220.0),
        }
    }

    fn strength(self) -> f32 {
        match self {
            RingTint::Warm => 1.0,
            RingTint::Cool => 0.5,
        }
    }
}

/// Deterministic band envelope at reference column `x`: a coarse density
/// wave multiplied by a fine on/off gap pattern.
pub fn ring_band_profile(x: f32) -> f32 {
    let density = (x * 0.1).sin() * 0.5 + 0.5;
    let gap = if (x * 0.3).sin() > 0.8 { 0.0 } else { 1.0 };
    density * gap
}

/// Build a ring map. Bands vary along x only; each column draws one random
/// brightness factor.
pub fn generate_ring(name: &str, tint: RingTint, width: u32, height: u32, rng: &mut impl Rng) -> Texture {
    let alphas: Vec<f32> = (0..REFERENCE_COLUMNS)
        .map(|x| ring_band_profile(x as f32) * (0.3 + rng.random::<f32>() * 0.5) * tint.strength())
        .collect();

    let (r, g, b) = tint.base();
    let mut canvas = Canvas::new(width, height);
    let scale = REFERENCE_COLUMNS as f32 / canvas.width() as f32;
    canvas.paint(|x, _| {
        let column = ((x * scale) as usize).min(REFERENCE_COLUMNS - 1);
        Rgba::from_rgb8(r, g, b, alphas[column])
    });

    tracing::debug!(body = name, ?tint, width, height, "Generated ring map");
    canvas.finish(format!("{name}/ring"))
}
