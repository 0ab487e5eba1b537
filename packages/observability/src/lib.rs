//! # Observability
//!
//! Logging setup shared by every Emerge binary.
//!
//! Crates only ever use `tracing` macros. A binary calls
//! [`init_with_config`] once at startup and every event is written as one
//! JSON object per line to the configured log file
//! (`~/.emerge/logs/emerge.jsonl` by default), optionally mirrored to
//! stderr in compact form.
//!
//! ```rust,ignore
//! observability::init_with_config(observability::LogConfig {
//!     service_name: "emerge".into(),
//!     default_level: "debug".into(),
//!     also_stderr: true,
//!     ..Default::default()
//! });
//! tracing::info!("ready");
//! ```
//!
//! `RUST_LOG` always wins over `default_level`.

mod file;
mod json_layer;

use std::path::PathBuf;

pub use file::{default_log_path, JsonlWriter};
pub use json_layer::{JsonLayer, LogEntry};

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Name written into every log line
    pub service_name: String,

    /// Default filter directive, overridden by `RUST_LOG`
    pub default_level: String,

    /// Log file path. `None` uses [`default_log_path`].
    pub log_path: Option<PathBuf>,

    /// Mirror events to stderr
    pub also_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "emerge".into(),
            default_level: "info".into(),
            log_path: None,
            also_stderr: false,
        }
    }
}

/// Initialize logging.
///
/// Never panics: if the log file cannot be opened, events go to stderr
/// only, and a second call in the same process is a no-op.
pub fn init_with_config(config: LogConfig) {
    file::init_subscriber(&config);
}

pub use tracing::{debug, error, info, instrument, trace, warn, Level};
