use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::envelope::success;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    success(StatusCode::OK, state.tasks.stats().await)
}
