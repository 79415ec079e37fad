//! Color theme handed in by the shell.

use orrery_config::SceneConfig;
use orrery_texture::Rgba;
use tracing::warn;

/// Parse a `#rrggbb` color, falling back when it is malformed.
pub(crate) fn parse_color(hex: &str, fallback: Rgba) -> Rgba {
    Rgba::from_hex(hex).unwrap_or_else(|| {
        warn!(color = hex, "Invalid color, using fallback");
        fallback
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpaceTheme {
    /// Orbit paths, the galaxy's saturated arm color, wormhole, pulsar.
    pub accent: Rgba,
    pub stars: Rgba,
    pub nebula: Rgba,
    /// Cloud colors of the primary nebula.
    pub nebula_colors: Vec<Rgba>,
}

impl Default for SpaceTheme {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

impl SpaceTheme {
    pub fn from_config(scene: &SceneConfig) -> Self {
        let accent = parse_color(&scene.accent_color, Rgba::new(0.66, 0.33, 0.97, 1.0));
        let nebula_colors: Vec<Rgba> = scene
            .nebula_colors
            .iter()
            .filter_map(|hex| Rgba::from_hex(hex))
            .collect();
        Self {
            accent,
            stars: parse_color(&scene.star_color, Rgba::WHITE),
            nebula: parse_color(&scene.nebula_color, accent),
            nebula_colors: if nebula_colors.is_empty() {
                vec![accent]
            } else {
                nebula_colors
            },
        }
    }

    /// Colors of the secondary nebula.
    pub fn secondary_nebula_colors(&self) -> Vec<Rgba> {
        vec![self.accent, self.nebula, self.stars]
    }
}
