//! Planet color maps and bump maps.
//!
//! Rules are authored against a 512x256 reference canvas and scaled to the
//! requested size, so every resolution gets the same composition.

use std::f32::consts::{FRAC_PI_2, PI};

use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::feature::FeatureClass;
use crate::gradient::Palette;
use crate::texture::Texture;

/// Reference width the surface rules are authored against.
pub const REFERENCE_WIDTH: f32 = 512.0;
/// Reference height the surface rules are authored against.
pub const REFERENCE_HEIGHT: f32 = 256.0;

const CRATER_COUNT: usize = 50;
const TERRAIN_SPECKLES: usize = 100;
const STORM_COUNT: usize = 5;
const CLOUD_STREAKS: usize = 30;
const BAND_SPACING: usize = 12;
const ICE_BAND_SPACING: usize = 20;
const BUMP_BLOTS: usize = 200;

/// Land masses: (x, y, rx, ry, rotation) in reference coordinates.
const CONTINENTS: [(f32, f32, f32, f32, f32); 4] = [
    (150.0, 100.0, 60.0, 40.0, 0.3),
    (350.0, 80.0, 40.0, 50.0, -0.2),
    (400.0, 160.0, 30.0, 25.0, 0.5),
    (100.0, 180.0, 35.0, 30.0, 0.1),
];

/// Paints reference-space shapes onto a canvas of arbitrary size.
pub(crate) struct Scaled<'a> {
    canvas: &'a mut Canvas,
    sx: f32,
    sy: f32,
}

impl<'a> Scaled<'a> {
    pub(crate) fn new(canvas: &'a mut Canvas, reference_w: f32, reference_h: f32) -> Self {
        let sx = canvas.width() as f32 / reference_w;
        let sy = canvas.height() as f32 / reference_h;
        Self { canvas, sx, sy }
    }

    pub(crate) fn circle(&mut self, x: f32, y: f32, r: f32, color: Rgba) {
        let s = (self.sx + self.sy) * 0.5;
        self.canvas.fill_circle(x * self.sx, y * self.sy, r * s, color);
    }

    pub(crate) fn ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, rot: f32, color: Rgba) {
        self.canvas
            .fill_ellipse(x * self.sx, y * self.sy, rx * self.sx, ry * self.sy, rot, color);
    }

    pub(crate) fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.canvas
            .fill_rect(x * self.sx, y * self.sy, w * self.sx, h * self.sy, color);
    }
}

/// Everything that identifies a body's surface texture.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceRequest<'a> {
    /// Unique body name.
    pub name: &'a str,
    /// Base colors, evenly spread along the diagonal gradient.
    pub palette: &'a Palette,
    /// Overlay rule.
    pub feature: FeatureClass,
}

/// Build a body's color map: diagonal palette gradient, feature overlay,
/// then per-pixel noise.
pub fn generate_surface(
    request: &SurfaceRequest<'_>,
    width: u32,
    height: u32,
    noise_amplitude: f32,
    rng: &mut impl Rng,
) -> Texture {
    let mut canvas = Canvas::new(width, height);
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    canvas.fill_linear_gradient(&request.palette.gradient(), (0.0, 0.0), (w, h));

    {
        let mut paint = Scaled::new(&mut canvas, REFERENCE_WIDTH, REFERENCE_HEIGHT);
        apply_feature(&mut paint, request.feature, rng);
    }

    canvas.add_noise(rng, noise_amplitude);

    tracing::debug!(
        body = request.name,
        feature = %request.feature,
        width,
        height,
        layers = canvas.layer_count(),
        "Generated surface texture"
    );
    canvas.finish(format!("{}/surface", request.name))
}

fn apply_feature(paint: &mut Scaled<'_>, feature: FeatureClass, rng: &mut impl Rng) {
    let (rw, rh) = (REFERENCE_WIDTH, REFERENCE_HEIGHT);
    match feature {
        FeatureClass::Craters => {
            for _ in 0..CRATER_COUNT {
                let x = rng.random::<f32>() * rw;
                let y = rng.random::<f32>() * rh;
                let r = 2.0 + rng.random::<f32>() * 15.0;
                let alpha = 0.1 + rng.random::<f32>() * 0.2;
                paint.circle(x, y, r, Rgba::BLACK.with_alpha(alpha));
            }
        }
        FeatureClass::Continents => {
            let land = Rgba::from_rgb8(0x2E as f32, 0x5A as f32, 0x1C as f32, 1.0);
            for (x, y, rx, ry, rot) in CONTINENTS {
                paint.ellipse(x, y, rx, ry, rot, land);
            }
            paint.rect(0.0, 0.0, rw, 15.0, Rgba::WHITE);
            paint.rect(0.0, rh - 15.0, rw, 15.0, Rgba::WHITE);
        }
        FeatureClass::Bands { storm_spot } => {
            for y in (0..rh as usize).step_by(BAND_SPACING) {
                let alpha = 0.1 + rng.random::<f32>() * 0.3;
                let hue = if rng.random::<f32>() > 0.5 { 30.0 } else { 40.0 };
                let lightness = 0.4 + rng.random::<f32>() * 0.2;
                let thickness = 8.0 + rng.random::<f32>() * 8.0;
                paint.rect(
                    0.0,
                    y as f32,
                    rw,
                    thickness,
                    Rgba::from_hsla(hue, 0.5, lightness, alpha),
                );
            }
            if storm_spot {
                let spot = Rgba::from_rgb8(0xCD as f32, 0x5C as f32, 0x5C as f32, 1.0);
                paint.ellipse(300.0, 120.0, 25.0, 15.0, 0.2, spot);
            }
        }
        FeatureClass::Terrain => {
            for _ in 0..TERRAIN_SPECKLES {
                let x = rng.random::<f32>() * rw;
                let y = rng.random::<f32>() * rh;
                let r = 1.0 + rng.random::<f32>() * 8.0;
                let red = 100.0 + rng.random::<f32>() * 50.0;
                let green = 30.0 + rng.random::<f32>() * 20.0;
                let alpha = 0.2 + rng.random::<f32>() * 0.3;
                paint.circle(x, y, r, Rgba::from_rgb8(red, green, 0.0, alpha));
            }
            let ice = Rgba::WHITE.with_alpha(0.7);
            paint.rect(0.0, 0.0, rw, 10.0, ice);
            paint.rect(0.0, rh - 10.0, rw, 10.0, ice);
        }
        FeatureClass::Storms => {
            for _ in 0..STORM_COUNT {
                let x = rng.random::<f32>() * rw;
                // Keep storms off the poles.
                let y = 50.0 + rng.random::<f32>() * (rh - 100.0);
                let rx = 20.0 + rng.random::<f32>() * 30.0;
                let ry = 10.0 + rng.random::<f32>() * 15.0;
                let rot = rng.random::<f32>() * PI;
                let alpha = 0.2 + rng.random::<f32>() * 0.2;
                paint.ellipse(x, y, rx, ry, rot, Rgba::WHITE.with_alpha(alpha));
            }
        }
        FeatureClass::Ice => {
            for y in (0..rh as usize).step_by(ICE_BAND_SPACING) {
                let alpha = 0.05 + rng.random::<f32>() * 0.1;
                let thickness = 10.0 + rng.random::<f32>() * 10.0;
                paint.rect(
                    0.0,
                    y as f32,
                    rw,
                    thickness,
                    Rgba::from_rgb8(200.0, 220.0, 255.0, alpha),
                );
            }
        }
        FeatureClass::Clouds => {
            for _ in 0..CLOUD_STREAKS {
                let x = rng.random::<f32>() * rw;
                let y = rng.random::<f32>() * rh;
                let rx = 30.0 + rng.random::<f32>() * 50.0;
                let ry = 5.0 + rng.random::<f32>() * 10.0;
                let rot = rng.random::<f32>() * FRAC_PI_2;
                let alpha = 0.1 + rng.random::<f32>() * 0.15;
                paint.ellipse(x, y, rx, ry, rot, Rgba::from_rgb8(255.0, 240.0, 200.0, alpha));
            }
        }
        FeatureClass::Plain => {}
    }
}

/// Build a feature-agnostic height field: neutral gray with small blots of
/// random brightness.
pub fn generate_bump(name: &str, width: u32, height: u32, rng: &mut impl Rng) -> Texture {
    let mut canvas = Canvas::new(width, height);
    {
        let mut paint = Scaled::new(&mut canvas, 256.0, 128.0);
        let gray = 128.0;
        paint.rect(0.0, 0.0, 256.0, 128.0, Rgba::from_rgb8(gray, gray, gray, 1.0));
        for _ in 0..BUMP_BLOTS {
            let x = rng.random::<f32>() * 256.0;
            let y = rng.random::<f32>() * 128.0;
            let r = 1.0 + rng.random::<f32>() * 5.0;
            let level = 100.0 + rng.random::<f32>() * 100.0;
            paint.circle(x, y, r, Rgba::from_rgb8(level, level, level, 1.0));
        }
    }
    tracing::debug!(body = name, width, height, "Generated bump map");
    canvas.finish(format!("{name}/bump"))
}
