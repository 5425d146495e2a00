//! Category and menu item management.

use axum::extract::{Path, State};
use axum::response::Response;
use serde::Deserialize;

use crate::adapter::inbound::http::error::ApiError;
use crate::adapter::inbound::http::extract::{AdminSession, JsonBody, QueryParams};
use crate::adapter::inbound::http::response::{created, data, success};
use crate::application::state::AppServices;
use crate::domain::category::CategoryDraft;
use crate::domain::id::CategoryId;
use crate::domain::menu::{MenuItemDraft, MenuItemPatch};

/// `?id=` on delete routes that carry the id in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

pub async fn list_categories(
    _admin: AdminSession,
    State(services): State<AppServices>,
) -> Result<Response, ApiError> {
    Ok(data(services.catalog.list_categories().await?))
}

pub async fn create_category(
    _admin: AdminSession,
    State(services): State<AppServices>,
    JsonBody(draft): JsonBody<CategoryDraft>,
) -> Result<Response, ApiError> {
    Ok(created(services.catalog.create_category(draft).await?))
}

pub async fn update_category(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<CategoryDraft>,
) -> Result<Response, ApiError> {
    let id = CategoryId::from(id);
    Ok(data(services.catalog.update_category(&id, draft).await?))
}

pub async fn toggle_category(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = CategoryId::from(id);
    Ok(data(services.catalog.toggle_category(&id).await?))
}

pub async fn delete_category(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    services.catalog.delete_category(&CategoryId::from(id)).await?;
    Ok(success())
}

pub async fn list_items(
    _admin: AdminSession,
    State(services): State<AppServices>,
) -> Result<Response, ApiError> {
    Ok(data(services.catalog.list_items().await?))
}

pub async fn create_item(
    _admin: AdminSession,
    State(services): State<AppServices>,
    JsonBody(draft): JsonBody<MenuItemDraft>,
) -> Result<Response, ApiError> {
    Ok(created(services.catalog.create_item(draft).await?))
}

pub async fn update_item(
    _admin: AdminSession,
    State(services): State<AppServices>,
    JsonBody(patch): JsonBody<MenuItemPatch>,
) -> Result<Response, ApiError> {
    Ok(data(services.catalog.patch_item(patch).await?))
}

pub async fn delete_item(
    _admin: AdminSession,
    State(services): State<AppServices>,
    QueryParams(query): QueryParams<IdQuery>,
) -> Result<Response, ApiError> {
    services.catalog.delete_item(query.id).await?;
    Ok(success())
}
