use clap::Parser;

use maliennement_config::ShellConfig;

/// Maliennement: a desktop shell for www.maliennement.com.
#[derive(Parser, Debug)]
#[command(name = "maliennement", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error, or a full
    /// filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start at the destination page, ignoring and not writing saved state.
    #[arg(long)]
    pub no_restore: bool,

    /// Enable the web inspector on the content surface.
    #[arg(long)]
    pub devtools: bool,
}

impl Args {
    /// Fold command-line switches into the loaded config.
    pub fn apply_to(&self, config: &mut ShellConfig) {
        if self.no_restore {
            config.session.restore = false;
        }
        if self.devtools {
            config.surface.devtools = true;
        }
    }

    /// `EnvFilter` directive: the flag if given, else the configured level.
    pub fn log_directive(&self, config: &ShellConfig) -> String {
        match &self.log_level {
            Some(level) if level.contains('=') => level.clone(),
            Some(level) => format!("maliennement={level}"),
            None => format!("maliennement={}", config.logging.level.as_str()),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
