//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Host window settings.
///
/// Defaults approximate a phone-sized portrait window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 320-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 240-4320).
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Maliennement".into(),
            width: 412,
            height: 915,
            resizable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Maliennement");
        assert_eq!(config.width, 412);
        assert_eq!(config.height, 915);
        assert!(config.resizable);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
width = 1280
resizable = false
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.width, 1280);
        assert!(!config.resizable);
        assert_eq!(config.height, 915);
    }
}
