use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// GET /:code
///
/// Exact-match lookup of the short code, then a 302 to the stored target.
/// Unknown codes get a 404 naming the code that was asked for.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let Some(target) = state.store.resolve(&code) else {
        return Err(AppError::NotFound(code));
    };

    tracing::debug!("redirecting {} -> {}", code, target);

    // Targets are stored unvalidated, so one may not be representable as a
    // header value; that is a rendering failure scoped to this request.
    let location =
        HeaderValue::from_str(&target).map_err(|_| AppError::BadLocation(target.clone()))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
