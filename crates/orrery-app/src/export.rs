//! PNG export of every texture the scene generated.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use orrery_texture::{Texture, TextureError};
use tracing::{debug, info};

/// File name for a texture label such as `"Earth/surface"`.
pub fn export_file_name(label: &str) -> String {
    let stem: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.png")
}

/// Write each texture into `dir`, creating it if needed. Returns the written
/// paths in input order.
pub fn export_textures(textures: &[Arc<Texture>], dir: &Path) -> Result<Vec<PathBuf>, TextureError> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(textures.len());
    for texture in textures {
        let path = dir.join(export_file_name(texture.label()));
        texture.save_png(&path)?;
        debug!(path = %path.display(), width = texture.width(), height = texture.height(), "Exported texture");
        written.push(path);
    }
    info!(count = written.len(), dir = %dir.display(), "Textures exported");
    Ok(written)
}
