//! Configuration for the orrery.
//!
//! Settings persist to disk as RON, accept CLI overrides via clap, and can be
//! hot-reloaded. Every section tolerates missing or unknown fields.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, MAX_TEXTURE_SIZE, SceneConfig, SimulationConfig, TextureConfig,
    VisibilityConfig,
};
pub use error::ConfigError;
