// Pure decision function for a partial update.
//
// Purpose
// - Compute the next version of a task, or reject the update as a whole.
//
// Responsibilities
// - Check the expected version before anything else. A stale version leaves the task untouched.
// - Validate the new title. An invalid title rejects every other field too.
// - Bump the version by exactly one and move updated_at forward, never backward.

use crate::modules::tasks::core::task::{
    Task, ValidationError, normalize_description, normalize_title,
};
use crate::modules::tasks::use_cases::update_task::command::{ExpectedVersion, UpdateTask};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UpdateRejected {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: u64, actual: u64 },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

pub fn decide_update(
    current: &Task,
    command: &UpdateTask,
    expected_version: ExpectedVersion,
    now: i64,
) -> Result<Task, UpdateRejected> {
    if let ExpectedVersion::Exact(expected) = expected_version {
        if expected != current.version {
            return Err(UpdateRejected::VersionMismatch {
                expected,
                actual: current.version,
            });
        }
    }

    let title = match command.title.as_deref() {
        Some(title) => normalize_title(title)?,
        None => current.title.clone(),
    };
    let description = normalize_description(command.description.as_deref())
        .or_else(|| current.description.clone());

    Ok(Task {
        id: current.id.clone(),
        title,
        description,
        completed: command.completed.unwrap_or(current.completed),
        created_at: current.created_at,
        updated_at: now.max(current.updated_at),
        version: current.version + 1,
    })
}
