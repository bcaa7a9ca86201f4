use crate::{error::AppError, models::ShortenResponse, AppState};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// GET /
///
/// Dump every current mapping as a JSON object of code -> target. An empty
/// store renders as `{}`.
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let body = serde_json::to_string(&state.store.list())?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// GET /shorten/*url
///
/// Shorten the URL given by the remainder of the path, exactly as received
/// and unvalidated. Creation cannot fail: any string hashes, and a colliding
/// code is simply overwritten.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    Path(url): Path<String>,
) -> Result<Response, AppError> {
    let mapping = state.store.create(url);
    tracing::info!("shortened {} -> {}", mapping.target, mapping.code);

    let response = ShortenResponse {
        shortened_url: format!("{}/{}", state.config.base_url, mapping.code),
        original: mapping.target,
        short_code: mapping.code,
    };
    let body = serde_json::to_string(&response)?;

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
