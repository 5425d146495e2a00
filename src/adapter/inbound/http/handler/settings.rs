//! Restaurant settings and the dashboard overview.

use axum::extract::State;
use axum::response::Response;

use crate::adapter::inbound::http::error::ApiError;
use crate::adapter::inbound::http::extract::{AdminSession, JsonBody};
use crate::adapter::inbound::http::response::data;
use crate::application::state::AppServices;
use crate::domain::settings::RestaurantSettings;

pub async fn get(
    _admin: AdminSession,
    State(services): State<AppServices>,
) -> Result<Response, ApiError> {
    Ok(data(services.settings.get().await?))
}

pub async fn update(
    _admin: AdminSession,
    State(services): State<AppServices>,
    JsonBody(settings): JsonBody<RestaurantSettings>,
) -> Result<Response, ApiError> {
    Ok(data(services.settings.update(settings).await?))
}

pub async fn dashboard(
    _admin: AdminSession,
    State(services): State<AppServices>,
) -> Result<Response, ApiError> {
    Ok(data(services.dashboard.stats().await?))
}
