//! Route table and middleware stack.

use std::path::PathBuf;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, Request};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info_span, warn};

use super::handler::{
    auth, banner, catalog, customer, media, order, promotion, settings, staff, storefront,
};
use crate::application::state::AppServices;

/// Multipart overhead allowed on top of the upload limit.
const BODY_HEADROOM: usize = 1024 * 1024;

/// Transport settings for the router.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Directory served under `/media`.
    pub media_root: PathBuf,
    /// Allowed origins; empty allows any.
    pub cors_origins: Vec<String>,
    pub max_upload_bytes: u64,
}

pub fn router(services: AppServices, options: &HttpOptions) -> Router {
    let body_limit = usize::try_from(options.max_upload_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(BODY_HEADROOM);

    let admin = Router::new()
        .route(
            "/categories",
            get(catalog::list_categories).post(catalog::create_category),
        )
        .route(
            "/categories/{id}",
            put(catalog::update_category).delete(catalog::delete_category),
        )
        .route("/categories/{id}/toggle", post(catalog::toggle_category))
        .route(
            "/menu-items",
            get(catalog::list_items)
                .post(catalog::create_item)
                .put(catalog::update_item)
                .delete(catalog::delete_item),
        )
        .route(
            "/users",
            get(staff::list_users)
                .post(staff::create_user)
                .put(staff::update_user)
                .delete(staff::delete_user),
        )
        .route("/users/{id}/toggle", post(staff::toggle_user))
        .route("/roles", get(staff::list_roles))
        .route("/upload", post(media::upload))
        .route("/customers", get(customer::list).post(customer::create))
        .route(
            "/customers/{id}",
            put(customer::update).delete(customer::delete),
        )
        .route("/orders", get(order::list))
        .route("/orders/{id}", get(order::get))
        .route("/orders/{id}/status", put(order::update_status))
        .route("/promotions", get(promotion::list).post(promotion::create))
        .route(
            "/promotions/{id}",
            put(promotion::update).delete(promotion::delete),
        )
        .route("/promotions/{id}/toggle", post(promotion::toggle))
        .route("/promotions/{id}/items", put(promotion::replace_items))
        .route("/banners", get(banner::list).post(banner::create))
        .route("/banners/{id}", put(banner::update).delete(banner::delete))
        .route("/banners/{id}/toggle", post(banner::toggle))
        .route("/settings", get(settings::get).put(settings::update))
        .route("/dashboard", get(settings::dashboard));

    let public = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/menu", get(storefront::menu))
        .route("/storefront/banners", get(storefront::banners))
        .route("/storefront/offers", get(storefront::offers))
        .route("/account/signup", post(storefront::signup))
        .route("/account/login", post(storefront::login))
        .route("/account/orders", get(storefront::my_orders))
        .route("/checkout/quote", post(storefront::quote))
        .route("/checkout", post(storefront::checkout));

    Router::new()
        .route("/health", get(health))
        .nest("/api", admin.merge(public))
        .nest_service("/media", ServeDir::new(&options.media_root))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors(&options.cors_origins))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                info_span!(
                    "http.request",
                    method = %request.method(),
                    route = %request.uri().path(),
                )
            }),
        )
        .with_state(services)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

fn cors(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
