// Ports define what callers need from a task store, without implementing it.
//
// Purpose
// - Describe the five store operations plus stats as an async trait.
//
// Responsibilities
// - Keep transports (HTTP handlers, tests) coding against the trait, not the in memory adapter.
// - Own the error taxonomy surfaced to callers: validation, not found, conflict.

use crate::modules::tasks::core::stats::TaskStats;
use crate::modules::tasks::core::task::{Task, ValidationError};
use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use crate::modules::tasks::use_cases::update_task::command::{ExpectedVersion, UpdateTask};
use crate::modules::tasks::use_cases::update_task::decide::UpdateRejected;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("task not found: {id}")]
    NotFound { id: String },

    #[error("version mismatch: expected {expected}, actual {actual}")]
    Conflict { expected: u64, actual: u64 },
}

impl From<UpdateRejected> for TaskStoreError {
    fn from(rejected: UpdateRejected) -> Self {
        match rejected {
            UpdateRejected::VersionMismatch { expected, actual } => {
                TaskStoreError::Conflict { expected, actual }
            }
            UpdateRejected::Invalid(e) => TaskStoreError::Validation(e),
        }
    }
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn create(&self, command: CreateTask) -> Result<Task, TaskStoreError>;

    async fn get_by_id(&self, id: &str) -> Option<Task>;

    /// Newest first by `created_at`. Equal timestamps list the later insert first.
    async fn get_all(&self) -> Vec<Task>;

    async fn update(
        &self,
        id: &str,
        command: UpdateTask,
        expected_version: ExpectedVersion,
    ) -> Result<Task, TaskStoreError>;

    /// Returns whether a task was removed. Deleting an unknown id is not an error.
    async fn delete(&self, id: &str) -> bool;

    async fn stats(&self) -> TaskStats;
}
