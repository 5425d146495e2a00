//! Public storefront reads, customer accounts and checkout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::adapter::inbound::http::error::ApiError;
use crate::adapter::inbound::http::extract::{CustomerSession, JsonBody, QueryParams};
use crate::adapter::inbound::http::response::{created, data};
use crate::application::auth::Credentials;
use crate::application::account::CustomerSession as SignedIn;
use crate::application::order::{CheckoutRequest, QuoteRequest};
use crate::application::state::AppServices;
use crate::domain::customer::SignupForm;
use crate::domain::menu::MenuQuery;

/// `{"categories": [...], "menuItems": [...]}`.
pub async fn menu(
    State(services): State<AppServices>,
    QueryParams(query): QueryParams<MenuQuery>,
) -> Result<Response, ApiError> {
    Ok(Json(services.catalog.public_menu(&query).await?).into_response())
}

pub async fn banners(State(services): State<AppServices>) -> Result<Response, ApiError> {
    Ok(data(services.banners.active().await?))
}

pub async fn offers(State(services): State<AppServices>) -> Result<Response, ApiError> {
    Ok(data(services.promotions.running().await?))
}

fn signed_in(status: StatusCode, session: SignedIn) -> Response {
    (
        status,
        Json(json!({
            "success": true,
            "token": session.token,
            "customer": session.customer,
        })),
    )
        .into_response()
}

pub async fn signup(
    State(services): State<AppServices>,
    JsonBody(form): JsonBody<SignupForm>,
) -> Result<Response, ApiError> {
    let session = services.accounts.signup(form).await?;
    Ok(signed_in(StatusCode::CREATED, session))
}

pub async fn login(
    State(services): State<AppServices>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Result<Response, ApiError> {
    let session = services.accounts.login(credentials).await?;
    Ok(signed_in(StatusCode::OK, session))
}

pub async fn my_orders(
    CustomerSession(customer): CustomerSession,
    State(services): State<AppServices>,
) -> Result<Response, ApiError> {
    Ok(data(services.orders.history(&customer).await?))
}

pub async fn quote(
    State(services): State<AppServices>,
    JsonBody(request): JsonBody<QuoteRequest>,
) -> Result<Response, ApiError> {
    Ok(data(services.orders.quote(&request).await?))
}

pub async fn checkout(
    CustomerSession(customer): CustomerSession,
    State(services): State<AppServices>,
    JsonBody(request): JsonBody<CheckoutRequest>,
) -> Result<Response, ApiError> {
    Ok(created(services.orders.place(&customer, request).await?))
}
