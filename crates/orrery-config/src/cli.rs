//! Command-line argument parsing for the orrery driver.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Procedural solar system simulation")]
pub struct CliArgs {
    /// Simulation speed multiplier (0 pauses orbital motion).
    #[arg(long)]
    pub speed: Option<f64>,

    /// Number of frames to simulate before exiting.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Master seed for procedural generation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide orbit paths.
    #[arg(long)]
    pub no_orbits: bool,

    /// Hide planet labels.
    #[arg(long)]
    pub no_labels: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write every generated texture as PNG into this directory.
    #[arg(long)]
    pub export_textures: Option<PathBuf>,

    /// Select a planet name or space object key after the run, as if clicked
    /// from the default camera. May be repeated.
    #[arg(long)]
    pub pick: Vec<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(speed) = args.speed {
            self.simulation.speed_multiplier = speed;
        }
        if let Some(seed) = args.seed {
            self.scene.seed = Some(seed);
        }
        if args.no_orbits {
            self.scene.show_orbits = false;
        }
        if args.no_labels {
            self.scene.show_labels = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref dir) = args.export_textures {
            self.debug.texture_export_dir = Some(dir.clone());
        }
    }
}
