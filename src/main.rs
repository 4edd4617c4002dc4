//! # taskcli
//!
//! A small command-line task tracker that persists its task list to a
//! single JSON file in the working directory.
//!
//! ## Key Commands
//!
//! - `taskcli add <description>` - Create a new task
//! - `taskcli update <id> <description>` - Replace a task's description
//! - `taskcli delete <id>` - Remove a task
//! - `taskcli list [status]` - Print tasks, optionally filtered by status
//! - `taskcli mark-done <id>` / `taskcli mark-in-progress <id>` - Set status
//!
//! Every invocation reads `tasks.json` in full, applies one change in
//! memory, and rewrites the whole file. There is no locking: concurrent
//! invocations against the same file race, last writer wins.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod db;
pub mod error;
pub mod task;

use cli::Cli;
use cmd::*;
use db::Repository;
use error::TaskError;
use task::Status;

/// Storage file, relative to the working directory.
const TASKS_FILE: &str = "tasks.json";

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), TaskError> {
    let mut repo = Repository::load(Path::new(TASKS_FILE))?;

    match cli.command {
        Commands::Add { description } => cmd_add(&mut repo, description),
        Commands::Update { id, description } => cmd_update(&mut repo, id, description),
        Commands::Delete { id } => cmd_delete(&mut repo, id),
        Commands::List { status } => cmd_list(&repo, status),
        Commands::MarkDone { id } => cmd_mark(&mut repo, id, Status::Done),
        Commands::MarkInProgress { id } => cmd_mark(&mut repo, id, Status::InProgress),
    }
}
