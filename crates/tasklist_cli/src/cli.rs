//! Command-line surface: global render options plus one intent per invocation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tasklist_core::{StatusFilter, TaskId};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(about = "A persistent to-do list")]
#[command(version)]
pub struct Cli {
    /// SQLite file holding the task list
    #[arg(long, env = "TASKLIST_DB_PATH")]
    pub db: Option<PathBuf>,

    /// Absolute directory for rolling log files (logging is off when omitted)
    #[arg(long, env = "TASKLIST_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "TASKLIST_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Status filter applied when rendering (all|active|pending|completed)
    #[arg(long, short = 'f', global = true, default_value = "all")]
    pub filter: StatusFilter,

    /// Case-insensitive text search applied when rendering
    #[arg(long, short = 's', global = true, default_value = "")]
    pub search: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a task
    Add {
        /// Task text
        text: String,
    },
    /// Show the list
    List,
    /// Flip a task between active and completed
    Toggle {
        /// Task id
        id: TaskId,
    },
    /// Mark a task completed
    Done {
        /// Task id
        id: TaskId,
    },
    /// Mark a task active again
    Undo {
        /// Task id
        id: TaskId,
    },
    /// Replace a task's text (omit the text to cancel)
    Edit {
        /// Task id
        id: TaskId,
        /// Replacement text
        text: Option<String>,
    },
    /// Delete a task
    Rm {
        /// Task id
        id: TaskId,
    },
    /// Delete every task
    Clear,
    /// Print core linkage info
    Ping,
}
