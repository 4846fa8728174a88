// Command data type for creating a task.
//
// Purpose
// - Express caller intent to track a new piece of work.
//
// Responsibilities
// - Carry raw input for the decider to validate. Be independent of the transport layer.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
}

impl CreateTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
