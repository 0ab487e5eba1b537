//! Configuration management.

use crate::{CoreError, CoreResult, Paths};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default request timeout for the analysis endpoint, in seconds.
pub const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 10;

const LOG_LEVEL_ENV: &str = "EMERGE_LOG_LEVEL";
const ANALYSIS_URL_ENV: &str = "EMERGE_ANALYSIS_URL";

/// Main configuration, stored as JSON at `<base>/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory for the user record. Defaults to `<base>/store`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Base URL of the optional reflection analysis service.
    #[serde(default)]
    pub analysis_url: Option<String>,
    #[serde(default = "default_analysis_timeout")]
    pub analysis_timeout_secs: u64,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_analysis_timeout() -> u64 {
    DEFAULT_ANALYSIS_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            data_dir: None,
            analysis_url: None,
            analysis_timeout_secs: DEFAULT_ANALYSIS_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load from `paths`, falling back to defaults when no file exists,
    /// then apply environment overrides.
    pub fn load(paths: &Paths) -> CoreResult<Self> {
        let config_path = paths.config_file();

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, paths: &Paths) -> CoreResult<()> {
        paths.ensure_dirs()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.config_file(), content)?;
        Ok(())
    }

    /// Override fields from environment lookups. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(level) = non_empty(LOG_LEVEL_ENV) {
            self.log_level = level;
        }
        if let Some(url) = non_empty(ANALYSIS_URL_ENV) {
            self.analysis_url = Some(url);
        }
    }

    /// Paths with `data_dir` applied.
    pub fn resolve_paths(&self, paths: Paths) -> Paths {
        match &self.data_dir {
            Some(dir) => paths.with_store_dir(dir.clone()),
            None => paths,
        }
    }

    /// Parsed analysis endpoint, `None` when not configured.
    pub fn analysis_url(&self) -> CoreResult<Option<Url>> {
        let Some(raw) = self.analysis_url.as_deref() else {
            return Ok(None);
        };
        let url = Url::parse(raw)?;
        match url.scheme() {
            "http" | "https" => Ok(Some(url)),
            other => Err(CoreError::Config(format!(
                "analysis_url must be http or https, got {other}"
            ))),
        }
    }
}
