//! Resolved runtime settings for one CLI invocation.

use crate::cli::Cli;
use std::path::PathBuf;
use tasklist_core::default_log_level;

const DEFAULT_DB_FILE_NAME: &str = "tasklist.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_dir: Option<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let db_path = cli
            .db
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_dir = cli
            .log_dir
            .as_deref()
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .map(str::to_string);
        let log_level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());

        Self {
            db_path,
            log_dir,
            log_level,
        }
    }
}
