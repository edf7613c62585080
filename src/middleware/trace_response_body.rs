use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;

use crate::{
    error::{ApiError, InternalServerError},
    state::ApiState,
    traits::StateProvider,
};

/// Middleware to trace the JSON bodies the book endpoints return.
///
/// Buffers the entire response, so it only stays cheap while responses are
/// single books or short listings.
pub async fn trace_response_body(
    State(state): State<ApiState>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let response = next.run(req).await;

    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .map_err(|err| InternalServerError::from_generic_error(state.error_verbosity(), err))?
        .to_bytes();

    match std::str::from_utf8(&bytes) {
        Ok(body) => tracing::trace!(%body, "Response body"),
        Err(_) => tracing::trace!(len = bytes.len(), "Response body is not valid UTF-8"),
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
