//! Photosphere texture for the central star.

use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::gradient::Gradient;
use crate::surface::Scaled;
use crate::texture::Texture;

const REFERENCE_SIZE: f32 = 512.0;
const GRANULES: usize = 500;
const SUNSPOTS: usize = 8;

fn photosphere_gradient() -> Gradient {
    Gradient::new([
        (0.0, Rgba::from_rgb8(255.0, 255.0, 255.0, 1.0)),
        (0.3, Rgba::from_rgb8(255.0, 245.0, 220.0, 1.0)),
        (0.6, Rgba::from_rgb8(255.0, 215.0, 0.0, 1.0)),
        (0.8, Rgba::from_rgb8(255.0, 140.0, 0.0, 1.0)),
        (1.0, Rgba::from_rgb8(255.0, 69.0, 0.0, 1.0)),
    ])
}

/// Radial white-to-red-orange disk with granulation speckles and a few dark
/// sunspots.
pub fn generate_sun(size: u32, noise_amplitude: f32, rng: &mut impl Rng) -> Texture {
    let mut canvas = Canvas::new(size, size);
    let half = canvas.width() as f32 * 0.5;
    canvas.fill_radial_gradient(&photosphere_gradient(), (half, half), 0.0, half);

    {
        let mut paint = Scaled::new(&mut canvas, REFERENCE_SIZE, REFERENCE_SIZE);
        let bright = Rgba::from_rgb8(255.0, 255.0, 200.0, 0.3);
        let hot = Rgba::from_rgb8(255.0, 100.0, 0.0, 0.2);
        for _ in 0..GRANULES {
            let x = rng.random::<f32>() * REFERENCE_SIZE;
            let y = rng.random::<f32>() * REFERENCE_SIZE;
            let r = 2.0 + rng.random::<f32>() * 10.0;
            let color = if rng.random::<f32>() > 0.5 { bright } else { hot };
            paint.circle(x, y, r, color);
        }

        let spot = Rgba::from_rgb8(100.0, 50.0, 0.0, 0.4);
        for _ in 0..SUNSPOTS {
            let x = 100.0 + rng.random::<f32>() * 312.0;
            let y = 100.0 + rng.random::<f32>() * 312.0;
            let r = 5.0 + rng.random::<f32>() * 20.0;
            paint.circle(x, y, r, spot);
        }
    }

    canvas.add_noise(rng, noise_amplitude);
    tracing::debug!(size, layers = canvas.layer_count(), "Generated sun texture");
    canvas.finish("Sun/surface")
}
