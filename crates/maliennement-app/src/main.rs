mod app_state;
mod cli;
mod content;
mod lifecycle;
mod splash;
mod ui;

#[cfg(test)]
mod test_support;

use std::path::Path;

use maliennement_common::ConfigError;
use maliennement_config::{LoadedConfig, ShellConfig};
use maliennement_platform::SavedStateStore;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "maliennement=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = maliennement_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Maliennement crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("----------------------------\n");

        default_hook(info);
    }));
}

/// Load the config from `--config` or the default location.
fn load_config(override_path: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    match override_path {
        Some(path) => maliennement_config::load_config_from(Path::new(path)),
        None => maliennement_config::load_config(),
    }
}

fn main() {
    // Install panic hook for crash reports
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Config comes before logging since it carries the log level; its
    // outcome is reported once the subscriber is up.
    let loaded = load_config(args.config.as_deref());
    let mut config = match &loaded {
        Ok(loaded) => loaded.config.clone(),
        Err(_) => ShellConfig::default(),
    };
    args.apply_to(&mut config);

    // Initialize logging
    let log_directive = args.log_directive(&config);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Maliennement v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    match loaded {
        Ok(loaded) => {
            for problem in &loaded.reset {
                tracing::warn!("Config value reset to default: {problem}");
            }
            tracing::info!(
                restore = config.session.restore,
                devtools = config.surface.devtools,
                "Config loaded"
            );
        }
        Err(e) => tracing::warn!("Config load failed, using defaults: {e}"),
    }

    // Ensure platform directories exist
    if let Err(e) = maliennement_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let saved_state = match SavedStateStore::default_location() {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::warn!("Saved state unavailable: {e}");
            None
        }
    };

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut app = app_state::ShellApp::new(config, saved_state);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
