use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::modules::tasks::use_cases::create_task::inbound::http as create_http;
use crate::modules::tasks::use_cases::delete_task::inbound::http as delete_http;
use crate::modules::tasks::use_cases::get_task::inbound::http as get_http;
use crate::modules::tasks::use_cases::list_tasks::inbound::http as list_http;
use crate::modules::tasks::use_cases::task_stats::inbound::http as stats_http;
use crate::modules::tasks::use_cases::update_task::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(list_http::handle).post(create_http::handle))
        .route("/tasks/stats", get(stats_http::handle))
        .route(
            "/tasks/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
