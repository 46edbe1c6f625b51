//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so stdout stays free for the shell itself.
//!
//! # Log Levels
//!
//! - `warn`: config or word list problems, clipboard failures (default)
//! - `info`: config location, word list counts, shutdown progress
//! - `debug`: orientation changes, accepted passwords' lengths
//! - `trace`: everything else

use std::io::{self, IsTerminal};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_target: bool,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_target: false,
            with_ansi: io::stderr().is_terminal(),
        }
    }
}

impl LogConfig {
    /// - 0: warn
    /// - 1 (`--verbose`): info
    /// - 2: debug
    /// - 3+: trace
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            with_target: verbosity >= 2,
            ..Default::default()
        }
    }
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(config.with_target)
        .with_ansi(config.with_ansi)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()?;
    Ok(())
}

/// `RUST_LOG` overrides the configured level.
fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,dicepass={}", level_str)))
}
