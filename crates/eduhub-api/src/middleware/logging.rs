//! One log line per request.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info};

/// Logs method, path, status and latency once the response is ready.
/// 5xx responses are logged at error level.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    if response.status().is_server_error() {
        error!(%method, %path, status, elapsed_ms, "Request failed");
    } else {
        info!(%method, %path, status, elapsed_ms, "Request handled");
    }

    response
}
