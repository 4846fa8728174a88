// Pure decision function for task creation.
//
// Responsibilities
// - Validate the command and produce the first version of the task.
// - The caller supplies the id and the time. Never perform input or output.

use crate::modules::tasks::core::task::{
    Task, ValidationError, normalize_description, normalize_title,
};
use crate::modules::tasks::use_cases::create_task::command::CreateTask;

pub fn decide_create(command: CreateTask, id: String, now: i64) -> Result<Task, ValidationError> {
    let title = normalize_title(&command.title)?;
    Ok(Task {
        id,
        title,
        description: normalize_description(command.description.as_deref()),
        completed: false,
        created_at: now,
        updated_at: now,
        version: 1,
    })
}

#[cfg(test)]
mod create_task_decide_tests {
    use super::*;
    use crate::tests::fixtures::commands::CreateTaskBuilder;
    use rstest::{fixture, rstest};

    const NOW: i64 = 1_700_000_000_000;

    #[fixture]
    fn command() -> CreateTask {
        CreateTaskBuilder::new().build()
    }

    #[rstest]
    fn it_should_decide_the_first_version_of_the_task(command: CreateTask) {
        let task = decide_create(command, "task-0001".into(), NOW).expect("decide failed");
        assert_eq!(task.id, "task-0001");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.version, 1);
        assert!(!task.completed);
        assert_eq!(task.created_at, NOW);
        assert_eq!(task.updated_at, NOW);
    }

    #[rstest]
    fn it_should_trim_title_and_description() {
        let command = CreateTaskBuilder::new()
            .title("  Buy milk  ")
            .description("  two litres ")
            .build();
        let task = decide_create(command, "task-0001".into(), NOW).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description.as_deref(), Some("two litres"));
    }

    #[rstest]
    fn it_should_reject_a_whitespace_only_title() {
        let command = CreateTaskBuilder::new().title(" \t ").build();
        let decision = decide_create(command, "task-0001".into(), NOW);
        assert_eq!(decision, Err(ValidationError::EmptyTitle));
    }
}
