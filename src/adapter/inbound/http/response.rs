//! Success body shapes shared by the handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// `200 {"data": value}`.
pub fn data<T: Serialize>(value: T) -> Response {
    Json(json!({ "data": value })).into_response()
}

/// `201 {"data": value}`.
pub fn created<T: Serialize>(value: T) -> Response {
    (StatusCode::CREATED, Json(json!({ "data": value }))).into_response()
}

/// `200 {"success": true}`.
pub fn success() -> Response {
    Json(json!({ "success": true })).into_response()
}

/// `status {"success": true, "user": value}`, used by the users and login
/// routes.
pub fn user<T: Serialize>(status: StatusCode, value: T) -> Response {
    (status, Json(json!({ "success": true, "user": value }))).into_response()
}
