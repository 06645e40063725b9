use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use hashlink_core::ShortId;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::state::AppState;

pub const USAGE: &str = "URL Shortener Service\n\
Usage:\n  \
GET  /<short-id> - Redirect to original URL\n  \
POST /           - Create short URL (send URL in body)\n";

pub async fn usage_handler() -> &'static str {
    USAGE
}

/// `POST /`: the trimmed body is the URL, the response is the short URL.
pub async fn create_url_handler(State(state): State<AppState>, body: Bytes) -> Result<String> {
    let body = std::str::from_utf8(&body).map_err(|_| AppError::UnreadableBody)?;

    let url = body.trim();
    if url.is_empty() {
        return Err(AppError::EmptyUrl);
    }

    let short_url = state.shortener().short_url(url, state.deadline()).await?;
    info!(short_url = %short_url, "Created short URL via POST");
    Ok(short_url)
}

/// `GET /<id>`: permanent redirect to the stored URL.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Response> {
    // Only fingerprints are ever stored, so anything else cannot be found.
    let Ok(id) = ShortId::parse(&short_id) else {
        debug!(short_id = %short_id, "Malformed short ID");
        return Err(AppError::NotFound);
    };

    let Some(url) = state.shortener().resolve(&id, state.deadline()).await? else {
        info!(short_id = %id, "Short ID not found");
        return Err(AppError::NotFound);
    };

    let location = HeaderValue::from_bytes(url.as_bytes())
        .map_err(|_| AppError::InvalidLocation(id.to_string()))?;

    info!(short_id = %id, url = %url, "Redirecting");
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

pub async fn post_not_root_handler() -> AppError {
    AppError::PostNotAtRoot
}

pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}

/// Paths with more than one segment. `HEAD` is refused like any other method.
pub async fn fallback_handler(method: Method) -> AppError {
    match method {
        Method::GET => AppError::NotFound,
        Method::POST => AppError::PostNotAtRoot,
        _ => AppError::MethodNotAllowed,
    }
}
