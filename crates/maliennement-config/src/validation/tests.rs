//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = ShellConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_fade_too_long() {
    let mut config = ShellConfig::default();
    config.splash.fade_ms = 5000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splash.fade_ms"));
}

#[test]
fn catches_bad_splash_colors() {
    let mut config = ShellConfig::default();
    config.splash.background = "purple".into();
    config.splash.text_color = "#12".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splash.background"));
    assert!(err.contains("splash.text_color"));
}

#[test]
fn catches_blank_title() {
    let mut config = ShellConfig::default();
    config.splash.title = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splash.title"));
}

#[test]
fn catches_window_too_small() {
    let mut config = ShellConfig::default();
    config.window.width = 100;
    config.window.height = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
    assert!(err.contains("window.height"));
}

#[test]
fn catches_pull_threshold_out_of_range() {
    let mut config = ShellConfig::default();
    config.surface.pull_threshold = 1000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("surface.pull_threshold"));
}

#[test]
fn catches_empty_user_agent() {
    let mut config = ShellConfig::default();
    config.surface.user_agent = Some(String::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("surface.user_agent"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ShellConfig::default();
    config.splash.fade_ms = 9999;
    config.window.width = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert_eq!(err.matches("; ").count(), 1);
}

#[test]
fn reset_invalid_keeps_valid_fields() {
    let mut config = ShellConfig::default();
    config.session.restore = false;
    config.splash.title = "Bienvenue".into();
    config.splash.fade_ms = 5000;
    config.window.width = 800;

    let problems = reset_invalid(&mut config);
    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("splash.fade_ms"));
    assert_eq!(config.splash.fade_ms, ShellConfig::default().splash.fade_ms);
    assert!(!config.session.restore);
    assert_eq!(config.splash.title, "Bienvenue");
    assert_eq!(config.window.width, 800);
}

#[test]
fn reset_invalid_fixes_every_bad_field() {
    let mut config = ShellConfig::default();
    config.splash.background = "purple".into();
    config.window.height = 1;
    config.surface.user_agent = Some("  ".into());

    let problems = reset_invalid(&mut config);
    assert_eq!(problems.len(), 3);
    assert_eq!(config.splash.background, "#6650a4");
    assert_eq!(config.window.height, ShellConfig::default().window.height);
    assert!(config.surface.user_agent.is_none());
    assert!(validate(&config).is_ok());
}

#[test]
fn reset_invalid_on_valid_config_changes_nothing() {
    let mut config = ShellConfig::default();
    config.surface.user_agent = Some("Maliennement/1.0".into());
    assert!(reset_invalid(&mut config).is_empty());
    assert_eq!(config.surface.user_agent.as_deref(), Some("Maliennement/1.0"));
}
