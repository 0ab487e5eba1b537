//! Logging initialization.
//!
//! Thin wrapper over the observability crate: structured JSONL goes to
//! `<base>/logs/emerge.jsonl`, `RUST_LOG` overrides the configured level.

use crate::{Config, Paths, DEFAULT_LOG_LEVEL};

/// Initialize logging for the `emerge` binary.
///
/// `also_stderr` mirrors events to the terminal in compact form.
pub fn init_logging(config: &Config, paths: &Paths, also_stderr: bool) {
    let directive = level_directive(&config.log_level);
    observability::init_with_config(observability::LogConfig {
        service_name: "emerge".into(),
        default_level: directive.unwrap_or(DEFAULT_LOG_LEVEL).to_string(),
        log_path: Some(paths.log_file()),
        also_stderr,
    });

    if directive.is_none() {
        tracing::warn!(
            configured = %config.log_level,
            fallback = DEFAULT_LOG_LEVEL,
            "Unknown log level"
        );
    }
}

/// Filter directive for a configured level.
///
/// Bare level names are normalized (`WARNING` becomes `warn`). Anything that
/// looks like a full `EnvFilter` directive (`emerge_store=debug,info`) is
/// passed through untouched. Unknown bare words give `None`.
pub fn level_directive(level: &str) -> Option<&str> {
    let trimmed = level.trim();
    if trimmed.contains('=') || trimmed.contains(',') {
        return Some(trimmed);
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" => Some("error"),
        "off" => Some("off"),
        _ => None,
    }
}
