//! Log setup.
//!
//! The terminal belongs to the UI, so logs go to a file in the platform data
//! directory. The level comes from `GLINT_LOG` (default `warn`), or `debug`
//! with `--verbose`.

use std::{fs, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GLINT_LOG";

/// Install the global subscriber. Logging is skipped if the file can't be
/// opened; it never keeps the app from starting.
pub fn init(verbose: bool, path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = fs::OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}
