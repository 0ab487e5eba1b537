//! Configuration, file system layout and logging setup for Emerge.

mod config;
mod error;
mod logging;
mod paths;

pub use config::{Config, DEFAULT_ANALYSIS_TIMEOUT_SECS, DEFAULT_LOG_LEVEL};
pub use error::{CoreError, CoreResult};
pub use logging::{init_logging, level_directive};
pub use paths::Paths;
