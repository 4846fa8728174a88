use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::tasks::use_cases::update_task::command::{ExpectedVersion, UpdateTask};
use crate::shell::envelope::{failure, store_error, success};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateTaskBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    /// Version the client last read. Leaving it out opts into last-writer-wins.
    pub version: Option<u64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return failure(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = UpdateTask {
        title: body.title,
        description: body.description,
        completed: body.completed,
    };

    match state
        .tasks
        .update(&id, command, ExpectedVersion::from(body.version))
        .await
    {
        Ok(task) => success(StatusCode::OK, task),
        Err(e) => store_error(e),
    }
}
