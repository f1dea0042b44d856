//! Full configuration validation.
//!
//! Checks numeric ranges, blank strings and color formats. `validate`
//! collects every problem into one `ConfigError`; `reset_invalid` puts the
//! offending fields back to their defaults.

mod helpers;

#[cfg(test)]
mod tests;

use maliennement_common::ConfigError;

use crate::colors::validate_color;
use crate::schema::ShellConfig;

use helpers::{blank, out_of_range, reset_if};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let problems = reset_invalid(&mut config.clone());
    if problems.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(problems.join("; ")))
    }
}

/// Put every invalid field back to its default, leaving the valid ones as
/// the user wrote them. Returns one message per field reset.
pub fn reset_invalid(config: &mut ShellConfig) -> Vec<String> {
    let defaults = ShellConfig::default();
    let mut problems = Vec::new();

    reset_splash(&mut problems, config, &defaults);
    reset_window(&mut problems, config, &defaults);
    reset_surface(&mut problems, config, &defaults);

    problems
}

fn reset_splash(problems: &mut Vec<String>, config: &mut ShellConfig, defaults: &ShellConfig) {
    let splash = &mut config.splash;
    let default = &defaults.splash;
    reset_if(problems, &mut splash.title, &default.title, |v| {
        blank("splash.title", v)
    });
    reset_if(problems, &mut splash.fade_ms, &default.fade_ms, |v| {
        out_of_range("splash.fade_ms", *v, 0, 2000)
    });
    reset_if(problems, &mut splash.background, &default.background, |v| {
        not_a_color("splash.background", v)
    });
    reset_if(problems, &mut splash.text_color, &default.text_color, |v| {
        not_a_color("splash.text_color", v)
    });
}

fn reset_window(problems: &mut Vec<String>, config: &mut ShellConfig, defaults: &ShellConfig) {
    let window = &mut config.window;
    reset_if(problems, &mut window.width, &defaults.window.width, |v| {
        out_of_range("window.width", *v, 320, 7680)
    });
    reset_if(problems, &mut window.height, &defaults.window.height, |v| {
        out_of_range("window.height", *v, 240, 4320)
    });
}

fn reset_surface(problems: &mut Vec<String>, config: &mut ShellConfig, defaults: &ShellConfig) {
    let surface = &mut config.surface;
    let default = &defaults.surface;
    reset_if(
        problems,
        &mut surface.pull_threshold,
        &default.pull_threshold,
        |v| out_of_range("surface.pull_threshold", *v, 20, 400),
    );
    reset_if(problems, &mut surface.user_agent, &default.user_agent, |v| {
        v.as_deref().and_then(|ua| blank("surface.user_agent", ua))
    });
}

fn not_a_color(name: &str, value: &str) -> Option<String> {
    (!validate_color(value)).then(|| format!("{name} = {value:?} is not a hex color"))
}
