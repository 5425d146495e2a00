//! Banner management.

use axum::extract::{Path, State};
use axum::response::Response;

use crate::adapter::inbound::http::error::ApiError;
use crate::adapter::inbound::http::extract::{AdminSession, JsonBody};
use crate::adapter::inbound::http::response::{created, data, success};
use crate::application::state::AppServices;
use crate::domain::banner::BannerDraft;
use crate::domain::id::BannerId;

pub async fn list(
    _admin: AdminSession,
    State(services): State<AppServices>,
) -> Result<Response, ApiError> {
    Ok(data(services.banners.list().await?))
}

pub async fn create(
    _admin: AdminSession,
    State(services): State<AppServices>,
    JsonBody(draft): JsonBody<BannerDraft>,
) -> Result<Response, ApiError> {
    Ok(created(services.banners.create(draft).await?))
}

pub async fn update(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<BannerDraft>,
) -> Result<Response, ApiError> {
    let id = BannerId::from(id);
    Ok(data(services.banners.update(&id, draft).await?))
}

pub async fn toggle(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = BannerId::from(id);
    Ok(data(services.banners.toggle(&id).await?))
}

pub async fn delete(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    services.banners.delete(&BannerId::from(id)).await?;
    Ok(success())
}
