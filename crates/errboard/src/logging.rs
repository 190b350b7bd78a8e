//! Logging setup
//!
//! The panel owns the terminal, so interactive runs log to a file under the
//! XDG state directory. The `list` command logs to stderr.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log file location
pub const LOG_FILE_ENV: &str = "ERRBOARD_LOG_FILE";

const LOG_SUBPATH: &str = "errboard/errboard.log";

/// Log file path with fallback chain
///
/// Priority:
/// 1. $ERRBOARD_LOG_FILE (explicit override)
/// 2. $XDG_STATE_HOME/errboard/errboard.log
/// 3. ~/.local/state/errboard/errboard.log
pub fn log_path_from(
    explicit: Option<String>,
    xdg_state_home: Option<String>,
    home: Option<String>,
) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    if let Some(state) = xdg_state_home.filter(|p| !p.is_empty()) {
        return Some(Path::new(&state).join(LOG_SUBPATH));
    }
    home.filter(|p| !p.is_empty())
        .map(|home| Path::new(&home).join(".local/state").join(LOG_SUBPATH))
}

pub fn discover_log_path() -> Option<PathBuf> {
    log_path_from(
        std::env::var(LOG_FILE_ENV).ok(),
        std::env::var("XDG_STATE_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

/// `RUST_LOG` wins over the configured level
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Send logs to the discovered file. Returns the path in use, or None when
/// no file could be opened (logging is then disabled).
pub fn init_file_logging(level: &str) -> Option<PathBuf> {
    let path = discover_log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}

pub fn init_stderr_logging(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
