//! Image upload.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapter::inbound::http::error::ApiError;
use crate::adapter::inbound::http::extract::AdminSession;
use crate::application::media::Upload;
use crate::application::state::AppServices;
use crate::domain::error::DomainError;

/// `multipart/form-data` with a `file` part and an optional `folder` part.
pub async fn upload(
    _admin: AdminSession,
    State(services): State<AppServices>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let mut multipart = multipart.map_err(|r| ApiError::Malformed(r.body_text()))?;
    let malformed = |e: axum::extract::multipart::MultipartError| ApiError::Malformed(e.body_text());

    let mut upload = None;
    let mut folder = None;
    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_owned);
                let content_type = field.content_type().unwrap_or_default().to_owned();
                let bytes = field.bytes().await.map_err(malformed)?;
                upload = Some(Upload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("folder") => folder = Some(field.text().await.map_err(malformed)?),
            _ => {}
        }
    }

    let upload = upload.ok_or(DomainError::Required("No file provided"))?;
    let stored = services.media.upload(folder.as_deref(), upload).await?;
    Ok(Json(stored).into_response())
}
