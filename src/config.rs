//! Runtime configuration.

use crate::notify::DEFAULT_BANNER_DURATION;
use std::path::PathBuf;
use std::time::Duration;

/// Database file used when none is given.
pub const DEFAULT_DB_PATH: &str = "todo.db";

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub banner_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            banner_duration: DEFAULT_BANNER_DURATION,
        }
    }
}

impl Config {
    /// Build from the optional command-line values, falling back to defaults.
    pub fn from_args(db: Option<PathBuf>, banner_secs: Option<u64>) -> Self {
        let defaults = Config::default();
        Config {
            db_path: db.unwrap_or(defaults.db_path),
            banner_duration: banner_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.banner_duration),
        }
    }
}
