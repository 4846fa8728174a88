// The task record and its field rules.
//
// Purpose
// - Define the single entity the store manages, in its wire shape.
//
// Responsibilities
// - Normalize titles and descriptions the same way on every write path.
// - Never perform input or output.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub version: u64,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required")]
    EmptyTitle,
}

/// Trims the title and rejects it when nothing is left.
pub fn normalize_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

pub fn normalize_description(description: Option<&str>) -> Option<String> {
    description.map(|d| d.trim().to_string())
}
