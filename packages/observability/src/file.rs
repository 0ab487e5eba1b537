//! JSONL file output and subscriber installation.
//!
//! Lines are appended and flushed one at a time so several processes can
//! share the same file.

use crate::json_layer::JsonLayer;
use crate::LogConfig;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// `~/.emerge/logs/emerge.jsonl`, if a home directory exists.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".emerge").join("logs").join("emerge.jsonl"))
}

/// Shared append-only handle to the log file.
#[derive(Clone)]
pub struct JsonlWriter {
    inner: Arc<Mutex<BufWriter<File>>>,
}

impl JsonlWriter {
    /// Open `path` for appending, creating parent directories.
    pub fn open(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            inner: Arc::new(Mutex::new(BufWriter::with_capacity(8192, file))),
        })
    }
}

impl Write for JsonlWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.inner.lock();
        let written = guard.write(buf)?;
        guard.flush()?;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

impl<'a> MakeWriter<'a> for JsonlWriter {
    type Writer = JsonlWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

pub(crate) fn init_subscriber(config: &LogConfig) {
    let log_path = config.log_path.clone().or_else(default_log_path);

    let mut open_error = None;
    let writer = match &log_path {
        Some(path) => match JsonlWriter::open(path) {
            Ok(writer) => Some(writer),
            Err(e) => {
                open_error = Some(e);
                None
            }
        },
        None => None,
    };
    let file_ok = writer.is_some();

    let json_layer = writer.map(|writer| {
        JsonLayer::new(config.service_name.clone(), writer)
            .with_filter(env_filter(&config.default_level))
    });

    // Without a file, stderr is the only place events can go.
    let stderr_layer = (config.also_stderr || !file_ok).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .with_writer(io::stderr)
            .with_filter(env_filter(&config.default_level))
    });

    let installed = tracing_subscriber::registry()
        .with(json_layer)
        .with(stderr_layer)
        .try_init()
        .is_ok();

    if !installed {
        return;
    }

    match (&log_path, open_error) {
        (Some(path), None) => {
            tracing::debug!(log_path = %path.display(), "logging initialized")
        }
        (Some(path), Some(e)) => tracing::warn!(
            log_path = %path.display(),
            error = %e,
            "could not open log file, logging to stderr only"
        ),
        (None, _) => tracing::warn!("no home directory, logging to stderr only"),
    }
}
