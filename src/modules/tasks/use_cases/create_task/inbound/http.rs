use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use crate::shell::envelope::{failure, store_error, success};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateTaskBody {
    // Missing, null and blank titles are all reported by the store as validation errors.
    pub title: Option<String>,
    pub description: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return failure(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = CreateTask {
        title: body.title.unwrap_or_default(),
        description: body.description,
    };

    match state.tasks.create(command).await {
        Ok(task) => success(StatusCode::CREATED, task),
        Err(e) => store_error(e),
    }
}
