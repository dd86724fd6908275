use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs method, uri, status and latency of every request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    tracing::debug!("--> {} {}", method, uri);

    let response = next.run(request).await;
    let status = response.status();
    let elapsed = start.elapsed();

    if status.is_server_error() {
        tracing::error!("<-- {} {} {} {:?}", method, uri, status, elapsed);
    } else if status.is_client_error() {
        tracing::warn!("<-- {} {} {} {:?}", method, uri, status, elapsed);
    } else {
        tracing::info!("<-- {} {} {} {:?}", method, uri, status, elapsed);
    }

    response
}
