//! Mapping of crate errors onto HTTP responses.
//!
//! Every failure becomes `{"error": "<message>"}`. Server-side failures are
//! logged with their cause and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use crate::domain::error::DomainError;
use crate::error::{AuthError, Error};

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiError {
    /// A request the handler could not decode.
    Malformed(String),
    App(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::App(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::App(err.into())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::App(err.into())
    }
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Malformed(_) => StatusCode::BAD_REQUEST,
            Self::App(err) => match err {
                Error::Domain(_) | Error::Conflict(_) => StatusCode::BAD_REQUEST,
                Error::Auth(_) => StatusCode::UNAUTHORIZED,
                Error::NotFound { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Malformed(message) => message.clone(),
            Self::App(Error::NotFound { entity, .. }) => format!("{} not found", capitalize(entity)),
            Self::App(_) if self.status().is_server_error() => INTERNAL_MESSAGE.to_string(),
            Self::App(err) => err.to_string(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::App(err) if status.is_server_error() => {
                error!(error = %err, status = status.as_u16(), "request failed");
            }
            Self::App(err) => warn!(error = %err, status = status.as_u16(), "request rejected"),
            Self::Malformed(reason) => warn!(reason = %reason, "malformed request"),
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
