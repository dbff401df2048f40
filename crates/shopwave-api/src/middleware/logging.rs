//! Request logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Emit one log line per request with method, path, status, and latency.
///
/// Sits outermost in the stack so redirects produced by the edge gate are
/// recorded too. Server errors are raised to `warn` so they stand out at
/// the default `info` filter.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%method, %path, status, latency_ms, "HTTP request failed");
    } else {
        info!(%method, %path, status, latency_ms, "HTTP request");
    }

    response
}
