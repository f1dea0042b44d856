//! Configuration schema types for the shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod session;
mod splash;
mod surface;
mod window;

pub use logging::*;
pub use session::*;
pub use splash::*;
pub use surface::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the shell.
///
/// All options have defaults; only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub splash: SplashConfig,
    pub window: WindowConfig,
    pub surface: SurfaceConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: ShellConfig = toml::from_str("").unwrap();
        assert_eq!(config.splash.title, "Maliennement");
        assert_eq!(config.window.title, "Maliennement");
        assert!(config.session.restore);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_other_sections() {
        let toml_str = r##"
[splash]
title = "Bienvenue"

[surface]
devtools = true
"##;
        let config: ShellConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.splash.title, "Bienvenue");
        assert_eq!(config.splash.background, "#6650a4");
        assert!(config.surface.devtools);
        assert_eq!(config.surface.pull_threshold, 80);
        assert_eq!(config.window.height, 915);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: ShellConfig = toml::from_str("[splash]\nmusic = true\n").unwrap();
        assert_eq!(config.splash.fade_ms, 300);
    }
}
