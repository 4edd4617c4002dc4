//! Command implementations for the CLI interface.
//!
//! Every command follows the same template: the caller loads the
//! repository, the command mutates it in memory, saves (except `list`),
//! and reports. Failures travel back to `main` as `TaskError`.

use chrono::Utc;
use clap::Subcommand;

use crate::db::{format_status, print_tasks, Repository};
use crate::error::TaskError;
use crate::task::{Status, StatusFilter, Task};

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Task description.
        description: String,
    },

    /// Replace a task's description.
    Update {
        /// Task ID to update.
        id: u64,
        /// New description.
        description: String,
    },

    /// Delete a task by ID.
    Delete {
        /// Task ID to delete.
        id: u64,
    },

    /// List tasks, optionally filtered by status.
    List {
        /// Status filter: all | todo | in-progress | done.
        #[arg(value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,
    },

    /// Mark a task done.
    MarkDone {
        /// Task ID to mark.
        id: u64,
    },

    /// Mark a task in progress.
    MarkInProgress {
        /// Task ID to mark.
        id: u64,
    },
}

/// Add a new task to the collection and save.
pub fn cmd_add(repo: &mut Repository, description: String) -> Result<(), TaskError> {
    let id = repo.next_id();
    repo.tasks.push(Task::new(id, description, Utc::now()));
    repo.save()?;
    println!("Added task {id}");
    Ok(())
}

/// Replace the description of an existing task.
pub fn cmd_update(repo: &mut Repository, id: u64, description: String) -> Result<(), TaskError> {
    let Some(t) = repo.get_mut(id) else {
        return Err(TaskError::NotFound(id));
    };
    t.description = description;
    t.updated_at = Utc::now();
    repo.save()?;
    println!("Updated task {id}");
    Ok(())
}

/// Set a task's status to `status`.
pub fn cmd_mark(repo: &mut Repository, id: u64, status: Status) -> Result<(), TaskError> {
    let Some(t) = repo.get_mut(id) else {
        return Err(TaskError::NotFound(id));
    };
    t.status = status;
    t.updated_at = Utc::now();
    repo.save()?;
    println!("Marked task {id} as {}", format_status(status));
    Ok(())
}

/// Delete a task by ID.
///
/// A missing ID is reported but is not an error here, unlike update and
/// mark where it is fatal. The asymmetry is long-standing behaviour.
pub fn cmd_delete(repo: &mut Repository, id: u64) -> Result<(), TaskError> {
    if repo.remove(id) {
        repo.save()?;
        println!("Deleted task {id}");
    } else {
        println!("Task with ID {id} not found");
    }
    Ok(())
}

/// Print tasks matching the status filter. Never saves.
pub fn cmd_list(repo: &Repository, status: StatusFilter) -> Result<(), TaskError> {
    let filtered = repo.filter(status);
    if filtered.is_empty() {
        return Err(TaskError::NoTasks);
    }
    print_tasks(&filtered);
    Ok(())
}
