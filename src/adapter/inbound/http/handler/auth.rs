//! Dashboard login.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::adapter::inbound::http::error::ApiError;
use crate::adapter::inbound::http::extract::JsonBody;
use crate::application::auth::Credentials;
use crate::application::state::AppServices;

pub async fn login(
    State(services): State<AppServices>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Result<Response, ApiError> {
    let login = services.admin_auth.login(credentials).await?;
    Ok(Json(json!({
        "success": true,
        "user": login.user,
        "token": login.token,
    }))
    .into_response())
}
