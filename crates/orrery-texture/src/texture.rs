//! Immutable RGBA8 texture produced by a generator.

use std::path::Path;

use crate::canvas::pixel_count;
use crate::error::TextureError;

/// A frozen RGBA8 pixel buffer. Cheap to share behind an `Arc`; never
/// modified after generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    label: String,
    width: u32,
    height: u32,
    layers: u32,
    bytes: Vec<u8>,
}

impl Texture {
    pub(crate) fn from_rgba8(
        label: String,
        width: u32,
        height: u32,
        bytes: Vec<u8>,
        layers: u32,
    ) -> Self {
        debug_assert_eq!(bytes.len(), pixel_count(width, height) * 4);
        Self {
            label,
            width,
            height,
            layers,
            bytes,
        }
    }

    /// Human-readable identifier, e.g. `"Earth/surface"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of alpha-composited layers that built this texture.
    pub fn layer_count(&self) -> u32 {
        self.layers
    }

    /// Raw RGBA8 bytes, row-major, suitable for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Read one pixel. Panics if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.bytes[i],
            self.bytes[i + 1],
            self.bytes[i + 2],
            self.bytes[i + 3],
        ]
    }

    /// Mean of each channel over the whole texture, in `[0, 255]`.
    pub fn mean_rgba(&self) -> [f32; 4] {
        let mut sum = [0u64; 4];
        for px in self.bytes.chunks_exact(4) {
            for (s, &v) in sum.iter_mut().zip(px) {
                *s += v as u64;
            }
        }
        let n = pixel_count(self.width, self.height).max(1) as f32;
        sum.map(|s| s as f32 / n)
    }

    /// Write the texture as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), TextureError> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.bytes.clone())
            .ok_or(TextureError::BufferSize {
                width: self.width,
                height: self.height,
            })?;
        img.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
