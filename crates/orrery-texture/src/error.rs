//! Texture export error types.

/// Errors that can occur when exporting a generated texture.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// The pixel buffer does not match the declared dimensions.
    #[error("pixel buffer does not match {width}x{height}")]
    BufferSize {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },

    /// The image encoder failed.
    #[error("failed to encode texture: {0}")]
    Encode(#[from] image::ImageError),

    /// Creating the output directory failed.
    #[error("failed to create export directory: {0}")]
    Io(#[from] std::io::Error),
}
