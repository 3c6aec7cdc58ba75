//! Middleware: code that wraps request handling
//!
//! A middleware receives the request and a [`Next`] continuation. It can
//! answer on its own, or call `next(request).await` and adjust the response.
//!
//! ```rust,ignore
//! use marquee::{async_trait, Middleware, Next, Request, Response};
//!
//! pub struct PoweredBy;
//!
//! #[async_trait]
//! impl Middleware for PoweredBy {
//!     async fn handle(&self, request: Request, next: Next) -> Response {
//!         next(request).await.map(|r| r.header("X-Powered-By", "marquee"))
//!     }
//! }
//! ```

mod cors;
mod registry;

pub use cors::Cors;
pub use registry::MiddlewareRegistry;

use crate::http::{Request, Response};
use crate::routing::BoxedHandler;
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::sync::Arc;

/// The rest of the chain, ending in the route handler
pub type Next = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, request: Request, next: Next) -> Response;
}

pub type BoxedMiddleware = Arc<dyn Middleware>;

pub fn into_boxed<M: Middleware + 'static>(middleware: M) -> BoxedMiddleware {
    Arc::new(middleware)
}

/// Ordered middleware wrapped around one handler
///
/// The first middleware added is the outermost: it sees the request first and
/// the response last.
#[derive(Default)]
pub struct MiddlewareChain {
    middleware: Vec<BoxedMiddleware>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, middleware: impl IntoIterator<Item = BoxedMiddleware>) {
        self.middleware.extend(middleware);
    }

    pub async fn execute(self, request: Request, handler: Arc<BoxedHandler>) -> Response {
        let mut next: Next = Arc::new(move |req: Request| handler(req));

        for middleware in self.middleware.into_iter().rev() {
            let inner = next;
            next = Arc::new(move |req: Request| -> BoxFuture<'static, Response> {
                let middleware = middleware.clone();
                let inner = inner.clone();
                Box::pin(async move { middleware.handle(req, inner).await })
            });
        }

        next(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use bytes::Bytes;

    struct Tag(&'static str);

    #[async_trait]
    impl Middleware for Tag {
        async fn handle(&self, request: Request, next: Next) -> Response {
            next(request).await.map(|r| r.header("X-Trail", self.0))
        }
    }

    struct Gate;

    #[async_trait]
    impl Middleware for Gate {
        async fn handle(&self, _request: Request, _next: Next) -> Response {
            Err(HttpResponse::text("closed").status(503))
        }
    }

    fn handler() -> Arc<BoxedHandler> {
        let handler: BoxedHandler = Box::new(|_req: Request| -> BoxFuture<'static, Response> {
            Box::pin(async { HttpResponse::text("curtain up").ok() })
        });
        Arc::new(handler)
    }

    fn request() -> Request {
        Request::from_http(http::Request::get("/").body(Bytes::new()).unwrap())
    }

    #[tokio::test]
    async fn runs_outermost_first() {
        let mut chain = MiddlewareChain::new();
        chain.extend([into_boxed(Tag("outer")), into_boxed(Tag("inner"))]);

        let response = chain.execute(request(), handler()).await.unwrap();
        let trail: Vec<&str> = response
            .headers()
            .iter()
            .filter(|(name, _)| name == "X-Trail")
            .map(|(_, value)| value.as_str())
            .collect();
        assert_eq!(trail, vec!["inner", "outer"]);
    }

    #[tokio::test]
    async fn middleware_can_short_circuit() {
        let mut chain = MiddlewareChain::new();
        chain.extend([into_boxed(Gate), into_boxed(Tag("unreached"))]);

        let response = chain.execute(request(), handler()).await.unwrap_err();
        assert_eq!(response.status_code(), 503);
        assert!(response.header_value("X-Trail").is_none());
    }
}
