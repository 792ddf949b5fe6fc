//! Log subscriber setup shared by depot binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is the
//! binary's job, driven by a [`LogConfig`] the binary builds from its own
//! configuration.

use core::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Output encoding for log lines.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable single-line text.
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" => Ok(LogFormat::Text),
            other => Err(format!("unknown log format '{other}' (expected json or text)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directive used when `RUST_LOG` is unset or unparsable.
    pub default_filter: String,
    pub format: LogFormat,
}

/// Install the process-wide subscriber. `RUST_LOG` overrides the configured filter.
///
/// Returns `false` when a subscriber was already installed (the call is then a no-op).
pub fn init(config: &LogConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match config.format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Text => builder.compact().try_init().is_ok(),
    }
}
