//! `orrery` binary entry point.

use std::process::ExitCode;

use clap::Parser;
use orrery_app::platform::PlatformDirs;
use orrery_config::CliArgs;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let dirs = match PlatformDirs::resolve_and_create() {
        Ok(dirs) => dirs.with_config_dir(args.config.as_deref()),
        Err(e) => {
            eprintln!("Failed to initialize platform directories: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = match orrery_app::load_config(&args, &dirs) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    orrery_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    info!(
        config = %dirs.config_dir.display(),
        data = %dirs.data_dir.display(),
        logs = %dirs.log_dir.display(),
        "Orrery starting"
    );

    match orrery_app::run(&args, &dirs, &config) {
        Ok(summary) => {
            info!(
                seed = summary.seed,
                frames = summary.frames,
                events = summary.events.len(),
                exported = summary.exported.len(),
                "Orrery finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Orrery run failed");
            ExitCode::FAILURE
        }
    }
}
