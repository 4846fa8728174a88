use crate::modules::tasks::core::task::Task;
use serde::Serialize;

/// Live counts over the store. Always recomputed from the records, never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    pub fn tally<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let (total, completed) = tasks
            .into_iter()
            .fold((0, 0), |(total, completed), task| {
                (total + 1, completed + usize::from(task.completed))
            });
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}
