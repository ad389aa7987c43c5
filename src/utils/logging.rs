//! Tracing subscriber setup for arbor.
//!
//! The TUI owns the terminal, so log records go to a file: `ARBOR_LOG` if set, else
//! `<cache dir>/arbor/arbor.log`. `RUST_LOG` filters, defaulting to `info`.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Where the log file goes.
pub fn log_path() -> PathBuf {
    if let Ok(path) = std::env::var("ARBOR_LOG") {
        return PathBuf::from(path);
    }
    dirs::cache_dir()
        .map(|dir| dir.join("arbor"))
        .unwrap_or_else(std::env::temp_dir)
        .join("arbor.log")
}

/// Installs the global subscriber writing to `path`, truncating it.
pub fn init_global(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    build_subscriber(file)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

/// File logging with `RUST_LOG` filtering.
pub fn build_subscriber(file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
