//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! All diagnostics are routed through `tracing`; the CLI chooses the
//! level from verbosity flags and the format from `--log-format`.
//! `RUST_LOG` overrides the level when no explicit verbosity is given.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level to emit.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override the configured level.
    pub use_env_filter: bool,
    /// Output format.
    pub format: LogFormat,
    /// Whether to use ANSI colors on stderr.
    pub with_ansi: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            format: LogFormat::default(),
            with_ansi: true,
        }
    }
}

/// Initialize the global tracing subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    let filter = build_env_filter(config);
    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(false);
            registry.with(layer).try_init()
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            registry.with(layer).try_init()
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            registry.with(layer).try_init()
        }
    }
}

/// Build an `EnvFilter` for the configured level. External crates stay
/// at warn to reduce noise.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let level = config.level_filter.to_string().to_lowercase();
    let default_filter = || {
        EnvFilter::new(format!(
            "warn,tidytab_cli={level},tidytab_clean={level},tidytab_ingest={level},\
             tidytab_model={level},tidytab_output={level},tidytab_profile={level}",
            level = level
        ))
    };
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter())
    } else {
        default_filter()
    }
}
