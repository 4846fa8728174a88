// Command data type for a partial task update.
//
// Purpose
// - Express which fields the caller wants to change, and on which version the change is based.
//
// Responsibilities
// - Absent fields mean "keep the stored value".
// - The expected version is always stated explicitly. Skipping conflict detection is a
//   deliberate choice of ExpectedVersion::Any, never a default.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedVersion {
    /// Last writer wins.
    Any,
    /// Reject the update unless the stored version matches.
    Exact(u64),
}

impl From<Option<u64>> for ExpectedVersion {
    fn from(version: Option<u64>) -> Self {
        version.map_or(ExpectedVersion::Any, ExpectedVersion::Exact)
    }
}
