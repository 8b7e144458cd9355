//! File logging
//!
//! The terminal belongs to the UI, so log records go to
//! `<cache dir>/ikigai/ikigai.log`. `IKIGAI_LOG` takes an env_logger filter
//! such as `debug` or `ikigai::suggest=trace`.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Target};

use crate::error::IkigaiError;

pub const LOG_ENV: &str = "IKIGAI_LOG";
const DEFAULT_FILTER: &str = "warn";
const LOG_DIR: &str = "ikigai";
const LOG_FILE: &str = "ikigai.log";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Filter spec from the environment value, `warn` when unset or blank
pub fn filter_spec(env_value: Option<&str>) -> &str {
    match env_value.map(str::trim) {
        Some(spec) if !spec.is_empty() => spec,
        _ => DEFAULT_FILTER,
    }
}

/// Start logging to the default file. Failures leave logging off.
pub fn init() {
    let Some(path) = log_path() else {
        return;
    };
    let env_value = std::env::var(LOG_ENV).ok();

    // Nowhere to report this but stderr, before the UI takes over
    if let Err(e) = init_to_path(&path, filter_spec(env_value.as_deref())) {
        eprintln!("ikigai: logging disabled: {}", e);
    }
}

/// Start logging to `path` with the given filter spec
pub fn init_to_path(path: &Path, filter: &str) -> Result<(), IkigaiError> {
    let file = open_log_file(path)?;

    let result = Builder::new()
        .parse_filters(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)))
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialised");
    }
    Ok(())
}

/// Open `path` for appending, creating parent directories
pub fn open_log_file(path: &Path) -> Result<File, IkigaiError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod logging_tests;
