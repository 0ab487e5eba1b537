//! File system layout under the Emerge base directory.

use crate::{CoreError, CoreResult};
use std::path::PathBuf;

/// Environment variable that relocates the base directory.
pub const HOME_ENV: &str = "EMERGE_HOME";

/// Resolves every path Emerge reads or writes.
///
/// ```text
/// ~/.emerge/
///   config.json
///   store/            one file per storage key
///   logs/emerge.jsonl
/// ```
#[derive(Debug, Clone)]
pub struct Paths {
    base_dir: PathBuf,
    store_dir: Option<PathBuf>,
}

impl Paths {
    /// `$EMERGE_HOME` if set, otherwise `~/.emerge`.
    pub fn new() -> CoreResult<Self> {
        if let Some(base) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_base_dir(PathBuf::from(base)));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Path("Could not determine home directory".to_string()))?;
        Ok(Self::with_base_dir(home.join(".emerge")))
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            store_dir: None,
        }
    }

    /// Keep the record somewhere other than `<base>/store`.
    pub fn with_store_dir(mut self, store_dir: PathBuf) -> Self {
        self.store_dir = Some(store_dir);
        self
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// `<base>/config.json`
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory holding the user record and session flag.
    pub fn store_dir(&self) -> PathBuf {
        self.store_dir
            .clone()
            .unwrap_or_else(|| self.base_dir.join("store"))
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// `<base>/logs/emerge.jsonl`
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join("emerge.jsonl")
    }

    /// Ensure all required directories exist.
    pub fn ensure_dirs(&self) -> CoreResult<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        std::fs::create_dir_all(self.store_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}
