//! CLI command implementations.

mod insights;
mod journal;
mod mood;
mod pet;
mod preferences;
mod session;

pub use insights::{insights, wrapped};
pub use journal::{journal_add, journal_list};
pub use mood::{mood_catalogue, mood_history, mood_log, mood_today};
pub use pet::{pet_interact, pet_rename, pet_show};
pub use preferences::{preferences, PreferencesArgs};
pub use session::{login, logout, onboard, reset, status, OnboardArgs};

use crate::output::OutputFormat;
use anyhow::Result;
use emerge_config_and_utils::{init_logging, Config, Paths};
use emerge_store::{Gate, RecordStore, UserRecord};
use reflection_client::ReflectionClient;
use std::path::PathBuf;
use std::time::Duration;

/// Opened store plus the settings each command needs.
pub struct Context {
    pub store: RecordStore,
    pub config: Config,
    pub paths: Paths,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve paths and config, start logging and open the store.
    ///
    /// Command line values win over the config file and environment.
    pub fn open(
        data_dir: Option<PathBuf>,
        log_level: Option<String>,
        format: OutputFormat,
    ) -> Result<Self> {
        let paths = Paths::new()?;
        let mut config = Config::load(&paths)?;
        if let Some(dir) = data_dir {
            config.data_dir = Some(dir);
        }
        if let Some(level) = log_level {
            config.log_level = level;
        }

        let paths = config.resolve_paths(paths);
        paths.ensure_dirs()?;
        init_logging(&config, &paths, false);

        let storage = emerge_storage::create_storage(&paths.store_dir())?;
        tracing::debug!(store_dir = %paths.store_dir().display(), "Opened store");

        Ok(Self {
            store: RecordStore::new(storage),
            config,
            paths,
            format,
        })
    }

    /// Build a context around an existing store, skipping config and logging.
    #[cfg(test)]
    pub fn with_store(store: RecordStore) -> Self {
        let paths = Paths::with_base_dir(std::env::temp_dir().join("emerge-cli-test"));
        Self {
            store,
            config: Config::default(),
            paths,
            format: OutputFormat::Text,
        }
    }

    /// Client for the analysis service, `None` when it is not configured
    /// or the configured URL is unusable.
    pub fn analysis_client(&self) -> Option<ReflectionClient> {
        let url = match self.config.analysis_url() {
            Ok(Some(url)) => url,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring invalid analysis URL");
                return None;
            }
        };

        let timeout = Duration::from_secs(self.config.analysis_timeout_secs);
        match ReflectionClient::new(url, timeout) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to build analysis client");
                None
            }
        }
    }

    /// The current record, or an error telling the user what to run next.
    pub fn require_ready(&self) -> Result<UserRecord> {
        match self.store.gate() {
            Gate::Ready(record) => Ok(*record),
            Gate::Onboarding => anyhow::bail!("Onboarding not finished. Run 'emerge onboard'"),
            Gate::LoggedOut => anyhow::bail!("Not logged in. Run 'emerge login'"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support;

    #[test]
    fn require_ready_names_the_next_step() {
        let ctx = test_support::empty();
        let err = ctx.require_ready().unwrap_err().to_string();
        assert!(err.contains("emerge login"));

        ctx.store.login().unwrap();
        let err = ctx.require_ready().unwrap_err().to_string();
        assert!(err.contains("emerge onboard"));

        let ctx = test_support::ready();
        assert_eq!(ctx.require_ready().unwrap().pet.name, "Mochi");
    }

    #[test]
    fn analysis_client_only_for_http_urls() {
        let mut ctx = test_support::empty();
        assert!(ctx.analysis_client().is_none());

        ctx.config.analysis_url = Some("ftp://example.com/api".into());
        assert!(ctx.analysis_client().is_none());

        ctx.config.analysis_url = Some("http://localhost:8000/api/v1".into());
        let client = ctx.analysis_client().unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/api/v1/");
    }
}
