//! Multi-stop color gradients and the palette type that seeds them.

use crate::color::Rgba;

/// Fallback palette used when fewer than two colors are supplied.
pub const DEFAULT_PALETTE: [Rgba; 2] = [
    Rgba::new(0.55, 0.55, 0.55, 1.0),
    Rgba::new(0.25, 0.25, 0.25, 1.0),
];

/// An ordered list of base colors with at least two entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Build a palette, substituting [`DEFAULT_PALETTE`] when fewer than two
    /// colors are given.
    pub fn new(colors: Vec<Rgba>) -> Self {
        if colors.len() < 2 {
            tracing::warn!(
                count = colors.len(),
                "Palette needs at least two colors, using default"
            );
            return Self::default();
        }
        Self { colors }
    }

    /// Parse a list of hex strings. Unparseable entries are skipped.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Self {
        let colors = hex
            .iter()
            .filter_map(|h| {
                let parsed = Rgba::from_hex(h.as_ref());
                if parsed.is_none() {
                    tracing::warn!(color = h.as_ref(), "Skipping invalid palette color");
                }
                parsed
            })
            .collect();
        Self::new(colors)
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Gradient with stops evenly spaced across the palette order.
    pub fn gradient(&self) -> Gradient {
        Gradient::even(&self.colors)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

/// A piecewise-linear color ramp over `[0, 1]`.
///
/// Positions before the first stop or after the last stop take the end color.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<(f32, Rgba)>,
}

impl Gradient {
    /// Create a gradient from explicit `(offset, color)` stops. Stops are
    /// sorted by offset; offsets are clamped to `[0, 1]`.
    pub fn new(stops: impl IntoIterator<Item = (f32, Rgba)>) -> Self {
        let mut stops: Vec<(f32, Rgba)> = stops
            .into_iter()
            .map(|(t, c)| (t.clamp(0.0, 1.0), c))
            .collect();
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { stops }
    }

    /// Stops at `i / (n - 1)` for each color.
    pub fn even(colors: &[Rgba]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        Self::new(
            colors
                .iter()
                .enumerate()
                .map(|(i, &c)| (i as f32 / last, c)),
        )
    }

    pub fn stops(&self) -> &[(f32, Rgba)] {
        &self.stops
    }

    /// Sample the ramp at `t`.
    pub fn sample(&self, t: f32) -> Rgba {
        let Some(&(first_t, first)) = self.stops.first() else {
            return Rgba::TRANSPARENT;
        };
        if t <= first_t {
            return first;
        }
        for pair in self.stops.windows(2) {
            let (t0, c0) = pair[0];
            let (t1, c1) = pair[1];
            if t <= t1 {
                let span = t1 - t0;
                if span <= f32::EPSILON {
                    return c1;
                }
                return c0.lerp(c1, (t - t0) / span);
            }
        }
        self.stops[self.stops.len() - 1].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_palette_falls_back() {
        assert_eq!(Palette::new(vec![Rgba::WHITE]), Palette::default());
        assert_eq!(Palette::new(Vec::new()).len(), 2);
    }

    #[test]
    fn test_palette_from_hex_skips_invalid() {
        let palette = Palette::from_hex(&["#ffffff", "nope", "#000000"]);
        assert_eq!(palette.colors(), &[Rgba::WHITE, Rgba::BLACK]);
    }

    #[test]
    fn test_even_stops_are_spaced() {
        let g = Gradient::even(&[Rgba::BLACK, Rgba::WHITE, Rgba::BLACK]);
        let offsets: Vec<f32> = g.stops().iter().map(|s| s.0).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_sample_interpolates_and_clamps() {
        let g = Gradient::even(&[Rgba::BLACK, Rgba::WHITE]);
        let mid = g.sample(0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert_eq!(g.sample(-1.0), Rgba::BLACK);
        assert_eq!(g.sample(2.0), Rgba::WHITE);
    }

    #[test]
    fn test_empty_gradient_is_transparent() {
        assert_eq!(Gradient::new(Vec::new()).sample(0.3), Rgba::TRANSPARENT);
    }
}
