//! Default TOML config template with inline documentation comments.

/// The default config file content. Every value is commented out so the
/// file documents the defaults without pinning them.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Maliennement Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[splash]
# title = "Maliennement"
# background = "#6650a4"
# text_color = "#ffffff"
# fade_ms = 300          # 0-2000

[window]
# title = "Maliennement"
# width = 412            # 320-7680
# height = 915           # 240-4320
# resizable = true

[surface]
# devtools = false
# user_agent = "Maliennement/0.1"
# pull_threshold = 80    # 20-400

[session]
# restore = true

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
