use bevy::prelude::*;

use bevy::window::WindowResolution;

use badwater::game::config::{InitialConfig, INITIAL_CONFIG_PATH};
use badwater::game::GamePlugin;

use bevy::log::LogPlugin;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use std::fs;
use std::path::{Path, PathBuf};

const LOG_DIR: &str = "logs";
const LOG_PREFIX: &str = "badwater_";
const LOGS_KEPT: usize = 25;
const DEFAULT_FILTER: &str = "wgpu=error,bevy_render=info,bevy_ecs=info,badwater=info";

/// Install stdout logging plus, when `logs/` is writable, a per-run log file.
/// Returns the file path if one was opened.
fn setup_logging() -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

    let log_dir = PathBuf::from(LOG_DIR);
    if let Err(e) = fs::create_dir_all(&log_dir) {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stdout).with_target(false))
            .init();
        warn!("No file logging, cannot create {}: {}", log_dir.display(), e);
        return None;
    }
    prune_logs(&log_dir, LOGS_KEPT);

    // One file per run, so never rotate
    let file_name = format!("{}{}.log", LOG_PREFIX, chrono::Local::now().format("%Y%m%d_%H%M%S"));
    let file_layer = fmt::layer()
        .with_writer(RollingFileAppender::new(Rotation::NEVER, &log_dir, &file_name))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Some(log_dir.join(file_name))
}

/// Delete the oldest run logs so at most `keep` remain before this run's file.
fn prune_logs(log_dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(log_dir) else { return };
    let mut runs: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(LOG_PREFIX) && name.ends_with(".log"))
        })
        .collect();

    if runs.len() < keep {
        return;
    }
    runs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());
    for stale in &runs[..=runs.len() - keep] {
        let _ = fs::remove_file(stale.path());
    }
}

fn main() {
    if let Some(log_file) = setup_logging() {
        info!("Logging to {}", log_file.display());
    }

    // Window size comes from the initial config, so read it before the app exists
    let initial_config = InitialConfig::load_or_default(INITIAL_CONFIG_PATH);
    let resolution = WindowResolution::new(initial_config.window_width, initial_config.window_height);

    App::new()
        .insert_resource(initial_config)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Badwater".into(),
                resolution,
                resizable: false,
                ..default()
            }),
            ..default()
        }).build().disable::<LogPlugin>()) // Disable Bevy's default logging since we set up our own
        .add_plugins(GamePlugin)
        .run();
}
