//! Accretion disk texture for the black hole.

use std::f32::consts::TAU;

use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::gradient::Gradient;
use crate::surface::Scaled;
use crate::texture::Texture;

const REFERENCE_SIZE: f32 = 512.0;
const SWIRL_POINTS: usize = 1000;

fn disk_gradient() -> Gradient {
    Gradient::new([
        (0.0, Rgba::TRANSPARENT),
        (0.2, Rgba::from_rgb8(255.0, 100.0, 0.0, 0.8)),
        (0.5, Rgba::from_rgb8(255.0, 200.0, 50.0, 1.0)),
        (0.7, Rgba::from_rgb8(255.0, 100.0, 0.0, 0.6)),
        (1.0, Rgba::TRANSPARENT),
    ])
}

/// Transparent-bright-transparent annulus overlaid with a swirl of warm
/// points.
pub fn generate_accretion_disk(size: u32, rng: &mut impl Rng) -> Texture {
    let mut canvas = Canvas::new(size, size);
    let half = canvas.width() as f32 * 0.5;
    let inner = half * (50.0 / 256.0);
    canvas.fill_radial_gradient(&disk_gradient(), (half, half), inner, half);

    {
        let mut paint = Scaled::new(&mut canvas, REFERENCE_SIZE, REFERENCE_SIZE);
        let center = REFERENCE_SIZE * 0.5;
        for _ in 0..SWIRL_POINTS {
            let angle = rng.random::<f32>() * TAU;
            let radius = 80.0 + rng.random::<f32>() * 150.0;
            let size = 1.0 + rng.random::<f32>() * 3.0;
            let color = Rgba::from_rgb8(
                255.0,
                150.0 + rng.random::<f32>() * 105.0,
                rng.random::<f32>() * 100.0,
                0.5 + rng.random::<f32>() * 0.5,
            );
            paint.circle(
                center + angle.cos() * radius,
                center + angle.sin() * radius,
                size,
                color,
            );
        }
    }

    tracing::debug!(size, "Generated accretion disk texture");
    canvas.finish("BlackHole/accretion")
}
