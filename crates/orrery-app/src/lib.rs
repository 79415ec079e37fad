//! Headless orrery driver.
//!
//! Loads configuration, assembles the scene, steps it for a number of frames,
//! replays any requested selections, optionally exports the generated
//! textures and records a JSON summary of the run.

pub mod export;
pub mod frame_loop;
pub mod platform;

use std::path::{Path, PathBuf};

use glam::Vec3;
use orrery_config::{CliArgs, Config, ConfigError};
use orrery_scene::{EventSink, PlanetSpec, Scene, SceneEvent};
use orrery_space::{ObjectCategory, Ray};
use orrery_texture::TextureError;
use serde::Serialize;
use tracing::{info, warn};

use crate::export::export_textures;
use crate::frame_loop::FrameLoop;
use crate::platform::{PlatformDirs, PlatformError};

/// Camera position used when replaying picks.
pub const DEFAULT_CAMERA: Vec3 = Vec3::new(0.0, 80.0, 180.0);

pub const SUMMARY_FILE_NAME: &str = "last_run.json";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Texture(#[from] TextureError),
    #[error("failed to write run summary: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode run summary: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanetSummary {
    pub name: String,
    pub theta: f32,
    pub position: [f32; 3],
    pub spin: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub updates: u64,
    pub elapsed: f64,
    pub speed: f32,
    pub mounted: Vec<String>,
    pub particles: usize,
    pub asteroids: usize,
    pub planets: Vec<PlanetSummary>,
    pub events: Vec<String>,
    pub exported: Vec<PathBuf>,
}

impl RunSummary {
    fn collect(scene: &Scene, frame_loop: &FrameLoop, events: Vec<String>, exported: Vec<PathBuf>) -> Self {
        let stats = scene.stats();
        Self {
            seed: scene.seed(),
            frames: frame_loop.frame_count(),
            updates: frame_loop.update_count(),
            elapsed: scene.clock().elapsed(),
            speed: scene.clock().speed(),
            mounted: ObjectCategory::ALL
                .into_iter()
                .filter(|c| scene.is_mounted(*c))
                .map(|c| c.key().to_string())
                .collect(),
            particles: stats.particles,
            asteroids: stats.asteroids,
            planets: scene
                .bodies()
                .iter()
                .map(|b| PlanetSummary {
                    name: b.name().to_string(),
                    theta: b.orbit_pose().theta,
                    position: b.position().to_array(),
                    spin: b.orbit_pose().spin,
                })
                .collect(),
            events,
            exported,
        }
    }

    pub fn write(&self, dir: &Path) -> Result<PathBuf, AppError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(SUMMARY_FILE_NAME);
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}

/// Load `config.ron` (creating it if missing), apply CLI overrides and clamp
/// out-of-range values.
pub fn load_config(args: &CliArgs, dirs: &PlatformDirs) -> Result<Config, AppError> {
    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    Ok(config.sanitized())
}

/// World point to aim at for a planet name or space object key.
pub fn pick_target(scene: &Scene, target: &str) -> Option<Vec3> {
    if let Some(spec) = PlanetSpec::by_name(target) {
        return scene.body(spec.name).map(|b| b.position());
    }
    let category = ObjectCategory::from_key(target)?;
    let object = scene.decorations(category).first()?;
    Some(
        object
            .hitboxes()
            .first()
            .map_or_else(|| object.anchor(), |h| h.center()),
    )
}

pub fn describe_event(event: &SceneEvent) -> String {
    match event {
        SceneEvent::PlanetSelected(name) => format!("planet:{name}"),
        SceneEvent::SpaceObjectSelected(category) => format!("object:{}", category.key()),
    }
}

/// Run the scene for `args.frames` fixed-length frames.
pub fn run(args: &CliArgs, dirs: &PlatformDirs, config: &Config) -> Result<RunSummary, AppError> {
    let (sink, receiver) = EventSink::channel();
    let mut scene = Scene::new(config, sink);
    let mut frame_loop = FrameLoop::fixed(scene.clock().fixed_dt());
    frame_loop.run(&mut scene, args.frames);
    info!(
        frames = frame_loop.frame_count(),
        updates = frame_loop.update_count(),
        elapsed = scene.clock().elapsed(),
        "Simulation finished"
    );

    for target in &args.pick {
        let Some(point) = pick_target(&scene, target) else {
            warn!(target = %target, "Unknown pick target");
            continue;
        };
        if scene.pick(&Ray::toward(DEFAULT_CAMERA, point)).is_none() {
            warn!(target = %target, "Pick missed");
        }
    }
    let events: Vec<String> = receiver.try_iter().map(|e| describe_event(&e)).collect();
    for event in &events {
        info!(event = %event, "Selection");
    }

    let exported = match &config.debug.texture_export_dir {
        Some(dir) => export_textures(&scene.textures(), dir)?,
        None => Vec::new(),
    };

    let summary = RunSummary::collect(&scene, &frame_loop, events, exported);
    let path = summary.write(&dirs.data_dir)?;
    info!(path = %path.display(), "Run summary written");
    Ok(summary)
}
