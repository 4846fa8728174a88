use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::envelope::{failure, success};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.tasks.get_by_id(&id).await {
        Some(task) => success(StatusCode::OK, task),
        None => failure(StatusCode::NOT_FOUND, format!("task not found: {id}")),
    }
}
