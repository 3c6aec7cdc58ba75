//! Request logging middleware

use marquee::{async_trait, Middleware, Next, Request, Response};
use std::time::Instant;

/// Logs one line per request with its status and latency
pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(&self, request: Request, next: Next) -> Response {
        let method = request.method().clone();
        let path = request.path().to_string();
        let started = Instant::now();

        let response = next(request).await;

        let status = match &response {
            Ok(r) | Err(r) => r.status_code(),
        };
        tracing::info!(
            %method,
            %path,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request handled"
        );
        response
    }
}
