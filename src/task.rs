//! Task data structure and status types.
//!
//! This module defines the core `Task` struct persisted to the JSON file,
//! along with the `Status` enum and the filter used by the `list` command.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Task completion status.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

/// Status filter for the `list` command. `All` means no filtering.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Todo,
    InProgress,
    Done,
}

impl StatusFilter {
    /// Whether a task with `status` passes this filter.
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Todo => status == Status::Todo,
            StatusFilter::InProgress => status == Status::InProgress,
            StatusFilter::Done => status == Status::Done,
        }
    }
}

/// Zero value for timestamp fields that are absent from the JSON.
fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// A single trackable unit of work.
///
/// Tasks are stored as a JSON array in insertion order. Empty or absent
/// fields are tolerated on read and default to their zero values;
/// missing timestamps read as the Unix epoch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default = "unix_epoch")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "unix_epoch")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with status `todo` and both timestamps set to `now`.
    pub fn new(id: u64, description: String, now: DateTime<Utc>) -> Self {
        Task {
            id,
            description,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }
}
