// Builder for the CreateTask command, pre-filled with the canonical "Buy milk" task.

use crate::modules::tasks::use_cases::create_task::command::CreateTask;

pub struct CreateTaskBuilder {
    inner: CreateTask,
}

impl Default for CreateTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateTaskBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateTask::new("Buy milk"),
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn build(self) -> CreateTask {
        self.inner
    }
}

#[cfg(test)]
mod create_task_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = CreateTaskBuilder::default().build();
        assert_eq!(built, CreateTask::new("Buy milk"));
    }

    #[rstest]
    fn setters_override_fields() {
        let built = CreateTaskBuilder::new()
            .title("Walk the dog")
            .description("before noon")
            .build();
        assert_eq!(
            built,
            CreateTask::new("Walk the dog").with_description("before noon")
        );
    }
}
