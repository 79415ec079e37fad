//! Per-body texture cache.
//!
//! A body's texture set is generated on first request and reused until the
//! generating inputs change. Frame and camera updates never touch it.

use std::sync::Arc;

use rand::Rng;

use crate::feature::FeatureClass;
use crate::ring::{RingTint, generate_ring};
use crate::surface::{SurfaceRequest, generate_bump, generate_surface};
use crate::texture::Texture;

/// Pixel dimensions and noise strength used for planet texture sets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureSettings {
    pub surface_size: (u32, u32),
    pub bump_size: (u32, u32),
    pub ring_size: (u32, u32),
    pub noise_amplitude: f32,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            surface_size: (512, 256),
            bump_size: (256, 128),
            ring_size: (512, 64),
            noise_amplitude: 20.0,
        }
    }
}

/// Identity of a generated texture set. Palette colors are quantized to
/// 8-bit so float noise in a theme round-trip does not force regeneration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureKey {
    pub name: String,
    pub palette: Vec<[u8; 4]>,
    pub feature: FeatureClass,
    pub ring: Option<RingTint>,
}

impl TextureKey {
    pub fn new(request: &SurfaceRequest<'_>, ring: Option<RingTint>) -> Self {
        Self {
            name: request.name.to_owned(),
            palette: request
                .palette
                .colors()
                .iter()
                .map(|c| c.to_rgba8())
                .collect(),
            feature: request.feature,
            ring,
        }
    }
}

/// Shared, immutable textures for one body.
#[derive(Clone, Debug)]
pub struct TextureSet {
    pub surface: Arc<Texture>,
    pub bump: Arc<Texture>,
    pub ring: Option<Arc<Texture>>,
}

impl TextureSet {
    /// Iterate over every texture in the set.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Texture>> {
        [&self.surface, &self.bump].into_iter().chain(self.ring.as_ref())
    }
}

/// Owns the cached texture set of a single body.
#[derive(Debug, Default)]
pub struct BodyTextures {
    cached: Option<(TextureKey, TextureSet)>,
    generations: u32,
}

impl BodyTextures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached set, generating it first if nothing is cached or the
    /// key differs from the cached one.
    pub fn get_or_generate(
        &mut self,
        request: &SurfaceRequest<'_>,
        ring: Option<RingTint>,
        settings: &TextureSettings,
        rng: &mut impl Rng,
    ) -> &TextureSet {
        let key = TextureKey::new(request, ring);
        let entry = match self.cached.take() {
            Some((cached_key, set)) if cached_key == key => {
                tracing::trace!(body = request.name, "Texture cache hit");
                (cached_key, set)
            }
            _ => {
                let (sw, sh) = settings.surface_size;
                let (bw, bh) = settings.bump_size;
                let (rw, rh) = settings.ring_size;
                let set = TextureSet {
                    surface: Arc::new(generate_surface(
                        request,
                        sw,
                        sh,
                        settings.noise_amplitude,
                        rng,
                    )),
                    bump: Arc::new(generate_bump(request.name, bw, bh, rng)),
                    ring: ring.map(|tint| Arc::new(generate_ring(request.name, tint, rw, rh, rng))),
                };
                self.generations += 1;
                (key, set)
            }
        };
        &self.cached.insert(entry).1
    }

    /// The cached set, if one has been generated.
    pub fn current(&self) -> Option<&TextureSet> {
        self.cached.as_ref().map(|(_, set)| set)
    }

    /// How many times a set has been generated for this body.
    pub fn generations(&self) -> u32 {
        self.generations
    }

    /// Drop the cached set. The next request regenerates.
    pub fn release(&mut self) {
        if let Some((key, _)) = self.cached.take() {
            tracing::debug!(body = %key.name, "Released body textures");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::Palette;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small() -> TextureSettings {
        TextureSettings {
            surface_size: (32, 16),
            bump_size: (16, 8),
            ring_size: (32, 4),
            noise_amplitude: 20.0,
        }
    }

    #[test]
    fn test_repeated_requests_hit_cache() {
        let palette = Palette::from_hex(&["#C9A227", "#DAA520", "#F4A460"]);
        let request = SurfaceRequest {
            name: "Saturn",
            palette: &palette,
            feature: FeatureClass::Bands { storm_spot: false },
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut cache = BodyTextures::new();

        let first = cache
            .get_or_generate(&request, Some(RingTint::Warm), &small(), &mut rng)
            .clone();
        for _ in 0..10 {
            let again = cache.get_or_generate(&request, Some(RingTint::Warm), &small(), &mut rng);
            assert!(Arc::ptr_eq(&first.surface, &again.surface));
        }
        assert_eq!(cache.generations(), 1);
        assert_eq!(first.iter().count(), 3);
    }

    #[test]
    fn test_changed_inputs_regenerate() {
        let warm = Palette::from_hex(&["#8C8C8C", "#A0A0A0", "#696969"]);
        let cool = Palette::from_hex(&["#4169E1", "#1E90FF", "#0000CD"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut cache = BodyTextures::new();

        let mut request = SurfaceRequest {
            name: "Mercury",
            palette: &warm,
            feature: FeatureClass::Craters,
        };
        cache.get_or_generate(&request, None, &small(), &mut rng);
        request.feature = FeatureClass::Storms;
        cache.get_or_generate(&request, None, &small(), &mut rng);
        request.palette = &cool;
        cache.get_or_generate(&request, None, &small(), &mut rng);
        cache.get_or_generate(&request, None, &small(), &mut rng);
        assert_eq!(cache.generations(), 3);
    }

    #[test]
    fn test_release_drops_set() {
        let palette = Palette::default();
        let request = SurfaceRequest {
            name: "Plain",
            palette: &palette,
            feature: FeatureClass::Plain,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut cache = BodyTextures::new();
        let held = Arc::clone(&cache.get_or_generate(&request, None, &small(), &mut rng).surface);
        cache.release();
        assert!(cache.current().is_none());
        assert_eq!(Arc::strong_count(&held), 1);
        cache.get_or_generate(&request, None, &small(), &mut rng);
        assert_eq!(cache.generations(), 2);
    }
}
