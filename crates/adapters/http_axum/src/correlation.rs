//! Per-request correlation ids.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the correlation id, on requests and responses.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Correlation id stored in request extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationId(pub Uuid);

/// Attach a correlation id to the request, its tracing span, and the response.
///
/// An incoming `x-correlation-id` is reused when it is a valid UUID;
/// otherwise a fresh v4 id is generated.
pub async fn propagate(mut request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
        .unwrap_or_else(Uuid::new_v4);

    request.extensions_mut().insert(CorrelationId(id));

    let span = tracing::info_span!(
        "request",
        correlation_id = %id,
        method = %request.method(),
        uri = %request.uri(),
    );
    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }

    response
}
