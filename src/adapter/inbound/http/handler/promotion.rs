//! Promotion management.

use axum::extract::{Path, State};
use axum::response::Response;

use super::customer::SearchQuery;
use crate::adapter::inbound::http::error::ApiError;
use crate::adapter::inbound::http::extract::{AdminSession, JsonBody, QueryParams};
use crate::adapter::inbound::http::response::{created, data, success};
use crate::application::state::AppServices;
use crate::domain::id::PromotionId;
use crate::domain::promotion::{PromotionDraft, PromotionItemsChange};

pub async fn list(
    _admin: AdminSession,
    State(services): State<AppServices>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Response, ApiError> {
    Ok(data(services.promotions.list(query.q).await?))
}

pub async fn create(
    _admin: AdminSession,
    State(services): State<AppServices>,
    JsonBody(draft): JsonBody<PromotionDraft>,
) -> Result<Response, ApiError> {
    Ok(created(services.promotions.create(draft).await?))
}

pub async fn update(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<PromotionDraft>,
) -> Result<Response, ApiError> {
    let id = PromotionId::from(id);
    Ok(data(services.promotions.update(&id, draft).await?))
}

pub async fn toggle(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = PromotionId::from(id);
    Ok(data(services.promotions.toggle(&id).await?))
}

pub async fn replace_items(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
    JsonBody(change): JsonBody<PromotionItemsChange>,
) -> Result<Response, ApiError> {
    let id = PromotionId::from(id);
    Ok(data(services.promotions.replace_items(&id, change).await?))
}

pub async fn delete(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    services.promotions.delete(&PromotionId::from(id)).await?;
    Ok(success())
}
