//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level orrery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Clock and kinematics tuning.
    pub simulation: SimulationConfig,
    /// Scene composition and shell-controlled toggles.
    pub scene: SceneConfig,
    /// Procedural texture dimensions.
    pub textures: TextureConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Simulation clock and orbital pacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Initial speed multiplier (0 pauses orbital and rotational motion).
    pub speed_multiplier: f64,
    /// Reference orbital period that maps to `orbital_speed_scale` rad/s.
    /// Earth's 365 days by default.
    pub reference_period: f64,
    /// Angular speed (rad per time unit) of a body whose period equals
    /// `reference_period`.
    pub orbital_speed_scale: f64,
    /// Spin speed (rad per time unit) of a body with a rotation period of 1.
    pub rotation_speed_scale: f64,
    /// Fixed simulation step in seconds used by the frame driver.
    pub fixed_dt: f64,
}

/// Scene composition toggles and theme colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Draw the elliptical orbit path of every planet.
    pub show_orbits: bool,
    /// Expose label anchors above every planet.
    pub show_labels: bool,
    /// Accent color (`#RRGGBB`) tinting orbit paths and some deep-space objects.
    pub accent_color: String,
    /// Star color used by dust, shooting stars and one star cluster.
    pub star_color: String,
    /// Nebula base color.
    pub nebula_color: String,
    /// Palette used by the primary nebula.
    pub nebula_colors: Vec<String>,
    /// Master seed for procedural generation. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Which decorative categories are mounted.
    pub visibility: VisibilityConfig,
}

/// Per-category mount flags for decorative deep-space objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VisibilityConfig {
    pub milky_way: bool,
    pub star_clusters: bool,
    pub wormhole: bool,
    pub black_hole: bool,
    pub comets: bool,
    pub nebula: bool,
    pub pulsar: bool,
    pub shooting_stars: bool,
    pub distant_galaxies: bool,
    pub space_dust: bool,
}

/// Largest accepted texture edge, in pixels.
pub const MAX_TEXTURE_SIZE: u32 = 8192;

/// Pixel dimensions of the procedurally generated textures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextureConfig {
    /// Planet color map width.
    pub planet_width: u32,
    /// Planet color map height.
    pub planet_height: u32,
    /// Bump map width.
    pub bump_width: u32,
    /// Bump map height.
    pub bump_height: u32,
    /// Ring band map width.
    pub ring_width: u32,
    /// Ring band map height.
    pub ring_height: u32,
    /// Sun texture edge length (square).
    pub sun_size: u32,
    /// Accretion disk texture edge length (square).
    pub accretion_size: u32,
    /// Peak-to-peak amplitude of the per-pixel noise pass, in 8-bit levels.
    pub noise_amplitude: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// When set, every generated texture is written to this directory as PNG.
    pub texture_export_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
            reference_period: 365.0,
            orbital_speed_scale: 0.5,
            rotation_speed_scale: 2.0,
            fixed_dt: 1.0 / 60.0,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            show_orbits: true,
            show_labels: true,
            accent_color: "#a855f7".to_string(),
            star_color: "#e879f9".to_string(),
            nebula_color: "#4a044e".to_string(),
            nebula_colors: vec![
                "#a855f7".to_string(),
                "#7c3aed".to_string(),
                "#c084fc".to_string(),
            ],
            seed: None,
            visibility: VisibilityConfig::default(),
        }
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            milky_way: true,
            star_clusters: true,
            wormhole: true,
            black_hole: true,
            comets: true,
            nebula: true,
            pulsar: true,
            shooting_stars: true,
            distant_galaxies: true,
            space_dust: true,
        }
    }
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            planet_width: 512,
            planet_height: 256,
            bump_width: 256,
            bump_height: 128,
            ring_width: 512,
            ring_height: 64,
            sun_size: 512,
            accretion_size: 512,
            noise_amplitude: 20.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            texture_export_dir: None,
        }
    }
}

// --- Validation ---

impl Config {
    /// Returns a copy with out-of-range values clamped into their valid domain.
    ///
    /// Negative or non-finite speed multipliers become 0, zero texture
    /// dimensions become 1 and a non-positive timestep falls back to 60 Hz.
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();

        let speed = config.simulation.speed_multiplier;
        if !speed.is_finite() || speed < 0.0 {
            log::warn!("Speed multiplier {speed} out of range, clamping to 0");
            config.simulation.speed_multiplier = 0.0;
        }
        if config.simulation.fixed_dt.is_nan() || config.simulation.fixed_dt <= 0.0 {
            config.simulation.fixed_dt = SimulationConfig::default().fixed_dt;
        }
        if config.simulation.reference_period.is_nan() || config.simulation.reference_period <= 0.0
        {
            config.simulation.reference_period = SimulationConfig::default().reference_period;
        }

        let t = &mut config.textures;
        for dim in [
            &mut t.planet_width,
            &mut t.planet_height,
            &mut t.bump_width,
            &mut t.bump_height,
            &mut t.ring_width,
            &mut t.ring_height,
            &mut t.sun_size,
            &mut t.accretion_size,
        ] {
            if *dim > MAX_TEXTURE_SIZE {
                log::warn!("Texture size {} too large, clamping to {MAX_TEXTURE_SIZE}", *dim);
            }
            *dim = (*dim).clamp(1, MAX_TEXTURE_SIZE);
        }
        t.noise_amplitude = t.noise_amplitude.max(0.0);

        config
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
