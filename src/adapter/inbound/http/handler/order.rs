//! Order management for the dashboard.

use axum::extract::{Path, State};
use axum::response::Response;
use serde::Deserialize;

use crate::adapter::inbound::http::error::ApiError;
use crate::adapter::inbound::http::extract::{AdminSession, JsonBody, QueryParams};
use crate::adapter::inbound::http::response::data;
use crate::application::state::AppServices;
use crate::domain::id::OrderId;
use crate::domain::order::{OrderFilter, StatusChange};

#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    pub status: Option<String>,
    pub q: Option<String>,
}

pub async fn list(
    _admin: AdminSession,
    State(services): State<AppServices>,
    QueryParams(query): QueryParams<OrderQuery>,
) -> Result<Response, ApiError> {
    let filter = OrderFilter::parse(query.status, query.q)?;
    Ok(data(services.orders.list(&filter).await?))
}

pub async fn get(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(data(services.orders.get(&OrderId::from(id)).await?))
}

pub async fn update_status(
    _admin: AdminSession,
    State(services): State<AppServices>,
    Path(id): Path<String>,
    JsonBody(change): JsonBody<StatusChange>,
) -> Result<Response, ApiError> {
    let id = OrderId::from(id);
    Ok(data(services.orders.update_status(&id, change).await?))
}
