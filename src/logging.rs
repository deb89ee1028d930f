//! Tracing setup.
//!
//! The alternate screen owns the terminal while the UI runs, so events are
//! written to a log file in the platform data directory rather than stderr.
//! `RUST_LOG` overrides the default filter.

use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "landing_tui=info";

/// Get the log file path
pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("io", "landing", "landing-tui")
        .map(|dirs| dirs.data_dir().join("landing-tui.log"))
}

/// Open the log file for appending, creating parent directories
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// The log file, or a sink when there is no usable path
fn log_writer(path: Option<&Path>) -> BoxMakeWriter {
    match path.map(open_log_file) {
        Some(Ok(file)) => BoxMakeWriter::new(Mutex::new(file)),
        _ => BoxMakeWriter::new(io::sink),
    }
}

fn subscriber(
    filter: EnvFilter,
    path: Option<&Path>,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(log_writer(path)))
}

/// Install the global subscriber and return where it writes
pub fn init() -> Option<PathBuf> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let path = log_path();
    subscriber(filter, path.as_deref()).init();
    path
}
