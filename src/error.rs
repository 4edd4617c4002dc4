//! Error types for CLI operations.
//!
//! Every command returns a `Result` up to `main`, which prints the message
//! and picks the exit code. Nothing below `main` terminates the process.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a single invocation.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The storage file is missing or unreadable.
    #[error("can't read tasks file {path}: {source}")]
    StorageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing the storage file failed.
    #[error("can't write tasks file {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The collection could not be serialised.
    #[error("can't serialise tasks: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Update or mark targeted an ID that does not exist.
    #[error("Task with ID {0} not found")]
    NotFound(u64),

    /// The list filter matched nothing.
    #[error("No tasks found")]
    NoTasks,
}
