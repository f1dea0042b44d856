//! Maliennement shell configuration.
//!
//! TOML-based configuration for the window, splash panel, content surface,
//! saved-state handling, and logging. Every section uses `serde(default)` so
//! a partial (or empty) file works out of the box.
//!
//! The destination address and the splash delay are deliberately absent:
//! both are fixed constants of the shell.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use maliennement_config::load_config;
//!
//! let loaded = load_config().expect("failed to load config");
//! for problem in &loaded.reset {
//!     eprintln!("reset to default: {problem}");
//! }
//! println!("{}", loaded.config.window.title);
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::ShellConfig;

use std::path::Path;

use maliennement_common::ConfigError;

/// A config as the shell will use it.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ShellConfig,
    /// Fields that failed validation and were put back to their defaults.
    pub reset: Vec<String>,
}

impl LoadedConfig {
    fn repaired(mut config: ShellConfig) -> Self {
        let reset = validation::reset_invalid(&mut config);
        Self { config, reset }
    }
}

/// Load config from the platform default path.
///
/// Creates a commented default file if none exists. Invalid fields fall
/// back to their defaults; the rest of the file is kept.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    toml_loader::load_default().map(LoadedConfig::repaired)
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    toml_loader::load_from_path(path).map(LoadedConfig::repaired)
}
