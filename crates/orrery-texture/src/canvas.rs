//! Mutable RGBA raster with source-over compositing primitives.
//!
//! Every generator paints into a [`Canvas`] and then freezes it into an
//! immutable [`Texture`]. Each primitive call composites exactly one layer,
//! so the layer count of a generated texture depends only on the generator's
//! rule, never on the random draw.

use rand::Rng;

use crate::color::Rgba;
use crate::gradient::Gradient;
use crate::texture::Texture;

/// Pixel count of a `width` x `height` raster, computed without `u32`
/// overflow.
pub(crate) fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// An RGBA f32 pixel buffer, row-major, origin top-left.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
    layers: u32,
}

impl Canvas {
    /// Create a fully transparent canvas. Zero dimensions are raised to 1.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; pixel_count(width, height)],
            layers: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of composited layers so far.
    pub fn layer_count(&self) -> u32 {
        self.layers
    }

    /// Read a pixel. Coordinates outside the canvas return `None`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, a] = self.pixels[self.index(x, y)];
        Some(Rgba::new(r, g, b, a))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Source-over blend `src` onto the pixel at `idx`.
    fn blend(&mut self, idx: usize, src: Rgba) {
        let dst = &mut self.pixels[idx];
        let sa = src.a.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let da = dst[3];
        let out_a = sa + da * (1.0 - sa);
        let mix = |s: f32, d: f32| (s * sa + d * da * (1.0 - sa)) / out_a;
        dst[0] = mix(src.r, dst[0]);
        dst[1] = mix(src.g, dst[1]);
        dst[2] = mix(src.b, dst[2]);
        dst[3] = out_a;
    }

    /// Composite a per-pixel shader over the whole canvas as one layer.
    /// The closure receives pixel-center coordinates.
    pub fn paint(&mut self, mut shader: impl FnMut(f32, f32) -> Rgba) {
        for y in 0..self.height {
            for x in 0..self.width {
                let color = shader(x as f32 + 0.5, y as f32 + 0.5);
                self.blend(self.index(x, y), color);
            }
        }
        self.layers += 1;
    }

    /// Fill with a linear gradient running from `from` to `to`.
    pub fn fill_linear_gradient(&mut self, gradient: &Gradient, from: (f32, f32), to: (f32, f32)) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let len_sq = (dx * dx + dy * dy).max(f32::EPSILON);
        self.paint(|x, y| {
            let t = ((x - from.0) * dx + (y - from.1) * dy) / len_sq;
            gradient.sample(t)
        });
    }

    /// Fill with a concentric radial gradient: offset 0 at `inner` radius,
    /// offset 1 at `outer` radius.
    pub fn fill_radial_gradient(
        &mut self,
        gradient: &Gradient,
        center: (f32, f32),
        inner: f32,
        outer: f32,
    ) {
        let span = (outer - inner).max(f32::EPSILON);
        self.paint(|x, y| {
            let dist = ((x - center.0).powi(2) + (y - center.1).powi(2)).sqrt();
            gradient.sample((dist - inner) / span)
        });
    }

    /// Composite a rectangle. Parts outside the canvas are clipped.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let (x0, x1) = self.clip_span(x, x + w, self.width);
        let (y0, y1) = self.clip_span(y, y + h, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(self.index(px, py), color);
            }
        }
        self.layers += 1;
    }

    /// Composite a filled circle.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        self.fill_ellipse(cx, cy, radius, radius, 0.0, color);
    }

    /// Composite a filled ellipse with radii `rx`, `ry` rotated by `rotation`
    /// radians (clockwise in screen space, y down).
    pub fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, rotation: f32, color: Rgba) {
        self.layers += 1;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let extent = rx.max(ry);
        let (x0, x1) = self.clip_span(cx - extent, cx + extent, self.width);
        let (y0, y1) = self.clip_span(cy - extent, cy + extent, self.height);
        let (sin, cos) = rotation.sin_cos();
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                // Rotate into the ellipse's local frame.
                let lx = dx * cos + dy * sin;
                let ly = -dx * sin + dy * cos;
                if (lx / rx).powi(2) + (ly / ry).powi(2) <= 1.0 {
                    self.blend(self.index(px, py), color);
                }
            }
        }
    }

    /// Add an independent uniform delta in `[-amplitude/2, amplitude/2]`
    /// (8-bit levels) to each pixel's color channels, clamped to range.
    pub fn add_noise(&mut self, rng: &mut impl Rng, amplitude: f32) {
        let scale = amplitude / 255.0;
        for pixel in &mut self.pixels {
            let delta = (rng.random::<f32>() - 0.5) * scale;
            for channel in pixel.iter_mut().take(3) {
                *channel = (*channel + delta).clamp(0.0, 1.0);
            }
        }
        self.layers += 1;
    }

    /// Freeze into an immutable texture.
    pub fn finish(self, label: impl Into<String>) -> Texture {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for [r, g, b, a] in self.pixels {
            bytes.extend_from_slice(&Rgba::new(r, g, b, a).to_rgba8());
        }
        Texture::from_rgba8(label.into(), self.width, self.height, bytes, self.layers)
    }

    /// Convert a float span into a clipped pixel index range.
    fn clip_span(&self, start: f32, end: f32, limit: u32) -> (u32, u32) {
        let lo = start.floor().max(0.0) as u32;
        let hi = (end.ceil().max(0.0) as u32).min(limit);
        (lo.min(hi), hi)
    }
}
