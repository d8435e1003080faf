//! Terminal host for the task list.
//!
//! # Responsibility
//! - Treat each invocation as one host event: open, apply one intent, render.
//! - Keep all state in the core session; this binary only projects it.

mod cli;
mod config;
mod render;

use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use log::error;
use std::process::ExitCode;
use tasklist_core::db::open_db;
use tasklist_core::{init_logging, KeyValueStore, SqliteKeyValueStore, TaskId, TaskSession};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(&cli, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("tasklist: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(Command::Ping) = cli.command {
        return Ok(format!(
            "tasklist_core ping={} version={}",
            tasklist_core::ping(),
            tasklist_core::core_version()
        ));
    }

    let conn = open_db(&config.db_path)?;
    let mut session = TaskSession::open(SqliteKeyValueStore::new(&conn))?;
    let notice = apply(&mut session, cli.command.as_ref().unwrap_or(&Command::List))?;

    session.set_status_filter(cli.filter);
    session.set_search(&cli.search);
    let list = render::render_list(&session.snapshot());

    Ok(match notice {
        Some(notice) => format!("{notice}\n{list}"),
        None => list,
    })
}

/// Applies one intent and returns an optional notice for the user.
fn apply<S: KeyValueStore>(
    session: &mut TaskSession<S>,
    command: &Command,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let notice = match command {
        Command::Add { text } => session
            .add(text)?
            .map(|task| format!("added {}", task.id)),
        Command::Toggle { id } => session
            .toggle(*id)?
            .map(|completed| status_notice(*id, completed)),
        Command::Done { id } => session
            .set_completed(*id, true)?
            .then(|| status_notice(*id, true)),
        Command::Undo { id } => session
            .set_completed(*id, false)?
            .then(|| status_notice(*id, false)),
        Command::Edit { id, text } => session
            .edit(*id, text.as_deref())?
            .then(|| format!("edited {id}")),
        Command::Rm { id } => session.remove(*id)?.map(|task| format!("removed {}", task.id)),
        Command::Clear => Some(format!("cleared {}", session.clear()?)),
        Command::List | Command::Ping => None,
    };
    Ok(notice)
}

fn status_notice(id: TaskId, completed: bool) -> String {
    if completed {
        format!("completed {id}")
    } else {
        format!("reopened {id}")
    }
}
