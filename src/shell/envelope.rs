// JSON envelope shared by every task endpoint.
//
// Responsibilities
// - Wrap payloads as { success, data?, error? }.
// - Translate store errors into status codes: validation 400, not found 404, conflict 409.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::tasks::core::ports::TaskStoreError;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    let body = ApiResponse {
        success: true,
        data: Some(data),
        error: None,
    };
    (status, Json(body)).into_response()
}

pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    let body: ApiResponse<()> = ApiResponse {
        success: false,
        data: None,
        error: Some(message.into()),
    };
    (status, Json(body)).into_response()
}

pub fn store_error(err: TaskStoreError) -> Response {
    let status = match &err {
        TaskStoreError::Validation(_) => StatusCode::BAD_REQUEST,
        TaskStoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        TaskStoreError::Conflict { .. } => StatusCode::CONFLICT,
    };
    failure(status, err.to_string())
}
