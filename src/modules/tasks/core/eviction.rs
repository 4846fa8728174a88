// Eviction policy for the capacity-bounded store.
//
// Purpose
// - Pick which tasks can be dropped when the store reaches its soft capacity.
//
// Responsibilities
// - Only completed tasks are candidates. Pending tasks are never selected, whatever the pressure.
// - Oldest-touched first: ascending updated_at, then ascending mutation sequence.
// - At most batch_size tasks per run. Fewer candidates means fewer removals, never an error.

use crate::modules::tasks::core::task::Task;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvictionPolicy {
    batch_size: NonZeroUsize,
}

impl EvictionPolicy {
    pub fn new(batch_size: NonZeroUsize) -> Self {
        Self { batch_size }
    }

    /// Returns the ids to remove. Each item pairs a task with the store's
    /// mutation sequence for it, which orders tasks sharing an `updated_at`.
    pub fn select<'a, I>(&self, tasks: I) -> Vec<String>
    where
        I: IntoIterator<Item = (&'a Task, u64)>,
    {
        let mut candidates: Vec<(&Task, u64)> = tasks
            .into_iter()
            .filter(|(task, _)| task.completed)
            .collect();
        candidates.sort_by_key(|(task, touched)| (task.updated_at, *touched));
        candidates
            .into_iter()
            .take(self.batch_size.get())
            .map(|(task, _)| task.id.clone())
            .collect()
    }
}
