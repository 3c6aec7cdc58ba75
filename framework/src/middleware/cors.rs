//! Cross-origin resource sharing

use super::{Middleware, Next};
use crate::http::{HttpResponse, Request, Response};
use async_trait::async_trait;

const DEFAULT_METHODS: &str = "GET, HEAD, PUT, PATCH, POST, DELETE";

/// CORS middleware
///
/// Adds `Access-Control-Allow-Origin` to every response and answers preflight
/// `OPTIONS` requests itself with 204, echoing the requested headers.
#[derive(Debug, Clone)]
pub struct Cors {
    allow_origin: String,
    allow_methods: String,
}

impl Cors {
    /// Allow any origin and the common methods
    pub fn permissive() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_methods: DEFAULT_METHODS.to_string(),
        }
    }

    /// Restrict the allowed origin
    pub fn allow_origin(mut self, origin: impl Into<String>) -> Self {
        self.allow_origin = origin.into();
        self
    }

    fn preflight(&self, request: &Request) -> HttpResponse {
        let response = HttpResponse::new()
            .status(204)
            .header("Access-Control-Allow-Origin", self.allow_origin.as_str())
            .header("Access-Control-Allow-Methods", self.allow_methods.as_str());

        match request.header("access-control-request-headers") {
            Some(requested) => response
                .header("Access-Control-Allow-Headers", requested)
                .header("Vary", "Access-Control-Request-Headers"),
            None => response,
        }
    }
}

impl Default for Cors {
    fn default() -> Self {
        Self::permissive()
    }
}

#[async_trait]
impl Middleware for Cors {
    async fn handle(&self, request: Request, next: Next) -> Response {
        if request.method() == http::Method::OPTIONS {
            return Ok(self.preflight(&request));
        }

        let origin = self.allow_origin.clone();
        match next(request).await {
            Ok(response) => Ok(response.header("Access-Control-Allow-Origin", origin)),
            Err(response) => Err(response.header("Access-Control-Allow-Origin", origin)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use futures::future::BoxFuture;
    use std::sync::Arc;

    fn next() -> Next {
        Arc::new(|_req: Request| -> BoxFuture<'static, Response> {
            Box::pin(async { Err(HttpResponse::text("missing").status(404)) })
        })
    }

    #[tokio::test]
    async fn answers_preflight_without_calling_next() {
        let req = http::Request::options("/shows")
            .header("Access-Control-Request-Headers", "content-type")
            .body(Bytes::new())
            .unwrap();

        let response = Cors::permissive()
            .handle(Request::from_http(req), next())
            .await
            .unwrap();

        assert_eq!(response.status_code(), 204);
        assert_eq!(response.header_value("access-control-allow-origin"), Some("*"));
        assert_eq!(
            response.header_value("access-control-allow-headers"),
            Some("content-type")
        );
        assert_eq!(
            response.header_value("access-control-allow-methods"),
            Some(DEFAULT_METHODS)
        );
    }

    #[tokio::test]
    async fn decorates_error_responses_too() {
        let req = http::Request::get("/nowhere").body(Bytes::new()).unwrap();

        let response = Cors::permissive()
            .allow_origin("https://tickets.example")
            .handle(Request::from_http(req), next())
            .await
            .unwrap_err();

        assert_eq!(response.status_code(), 404);
        assert_eq!(
            response.header_value("access-control-allow-origin"),
            Some("https://tickets.example")
        );
    }
}
