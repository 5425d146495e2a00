//! Dashboard user management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::catalog::IdQuery;
use crate::adapter::inbound::http::error::ApiError;
use crate::adapter::inbound::http::extract::{AdminSession, JsonBody, QueryParams};
use crate::adapter::inbound::http::response::{data, success, user};
use crate::application::state::AppServices;
use crate::domain::id::AdminUserId;
use crate::domain::staff::{AdminUserDraft, AdminUserUpdate};

pub async fn list_users(
    _admin: AdminSession,
    State(services): State<AppServices>,
) -> Result<Response, ApiError> {
    Ok(data(services.staff.list_users().await?))
}

pub async fn create_user(
    _admin: AdminSession,
    State(services): State<AppServices>,
    JsonBody(draft): JsonBody<AdminUserDraft>,
) -> Result<Response, ApiError> {
    let created = services.staff.create_user(draft).await?;
    Ok(user(StatusCode::OK, created))
}

pub async fn update_user(
    _admin: AdminSession,
    State(services): State<AppServices>,
    JsonBody(update): JsonBody<AdminUserUpdate>,
) -> Result<Response, ApiError> {
    let updated = services.staff.update_user(update).await?;
    Ok(user(StatusCode::OK, updated))
}

pub async fn toggle_user(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let toggled = services.staff.toggle_user(&AdminUserId::from(id)).await?;
    Ok(user(StatusCode::OK, toggled))
}

pub async fn delete_user(
    _admin: AdminSession,
    State(services): State<AppServices>,
    QueryParams(query): QueryParams<IdQuery>,
) -> Result<Response, ApiError> {
    services.staff.delete_user(query.id).await?;
    Ok(success())
}

pub async fn list_roles(
    _admin: AdminSession,
    State(services): State<AppServices>,
) -> Result<Response, ApiError> {
    Ok(data(services.staff.list_roles().await?))
}
