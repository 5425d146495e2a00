//! Customer records.

use axum::extract::{Path, State};
use axum::response::Response;
use serde::Deserialize;

use crate::adapter::inbound::http::error::ApiError;
use crate::adapter::inbound::http::extract::{AdminSession, JsonBody, QueryParams};
use crate::adapter::inbound::http::response::{created, data, success};
use crate::application::state::AppServices;
use crate::domain::customer::CustomerDraft;
use crate::domain::id::CustomerId;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub async fn list(
    _admin: AdminSession,
    State(services): State<AppServices>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Response, ApiError> {
    Ok(data(services.customers.list(query.q).await?))
}

pub async fn create(
    _admin: AdminSession,
    State(services): State<AppServices>,
    JsonBody(draft): JsonBody<CustomerDraft>,
) -> Result<Response, ApiError> {
    Ok(created(services.customers.create(draft).await?))
}

pub async fn update(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<CustomerDraft>,
) -> Result<Response, ApiError> {
    let id = CustomerId::from(id);
    Ok(data(services.customers.update(&id, draft).await?))
}

pub async fn delete(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    services.customers.delete(&CustomerId::from(id)).await?;
    Ok(success())
}
