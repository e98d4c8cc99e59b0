//! Where the signup CLI keeps its config and log files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const LOG_NAME: &str = "signup.log";
const PREVIOUS_LOG_NAME: &str = "signup.previous.log";

fn dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "signup", "signup")
}

/// `config.json` in the platform config dir (e.g. `~/.config/signup`).
pub fn config_file() -> Option<PathBuf> {
    dirs().map(|d| d.config_dir().join("config.json"))
}

/// Log file for this run, in the platform cache dir (e.g. `~/.cache/signup`).
pub fn log_file() -> Option<PathBuf> {
    dirs().map(|d| d.cache_dir().join(LOG_NAME))
}

/// Prepares `log` for a fresh run: creates its directory and keeps the
/// last run's log as `signup.previous.log`, replacing any older one.
pub fn prepare_log(log: &Path) -> io::Result<()> {
    let Some(dir) = log.parent() else { return Ok(()) };
    fs::create_dir_all(dir)?;
    if log.exists() {
        fs::rename(log, dir.join(PREVIOUS_LOG_NAME))?;
    }
    Ok(())
}
