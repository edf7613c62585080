use axum::{extract::Request, http::Response, middleware::Next, response::IntoResponse};

/// Middleware to trace request and response headers for each book API call.
pub async fn trace_headers(req: Request, next: Next) -> impl IntoResponse {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let request_headers = req.headers();
    tracing::trace!(%method, %uri, ?request_headers, "Request headers");

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let response_headers = &parts.headers;
    tracing::trace!(%method, %uri, ?response_headers, "Response headers");

    Response::from_parts(parts, body)
}
