//! Declarative route definitions
//!
//! ```rust,ignore
//! use marquee::{get, post, routes};
//!
//! routes! {
//!     get!("/shows", controllers::shows::index).name("shows.index"),
//!     get!("/shows/{id}", controllers::shows::show).name("shows.show"),
//!     post!("/shows", controllers::shows::store).name("shows.store"),
//! }
//! ```

use crate::http::{Request, Response};
use crate::routing::router::Router;
use std::future::Future;

/// Const function to validate route paths start with '/'
///
/// Used by the route macros so a bad path fails at compile time.
///
/// # Panics
///
/// Panics at compile time if the path is empty or doesn't start with '/'.
pub const fn validate_route_path(path: &'static str) -> &'static str {
    let bytes = path.as_bytes();
    if bytes.is_empty() || bytes[0] != b'/' {
        panic!("Route path must start with '/'")
    }
    path
}

/// A route waiting to be registered, with an optional name
pub struct RouteDef<H> {
    method: http::Method,
    path: &'static str,
    handler: H,
    name: Option<&'static str>,
}

impl<H, Fut> RouteDef<H>
where
    H: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    pub fn new(method: http::Method, path: &'static str, handler: H) -> Self {
        Self {
            method,
            path,
            handler,
            name: None,
        }
    }

    /// Name this route
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Register this route definition with a router
    pub fn register(self, router: Router) -> Router {
        let builder = router.route(self.method, self.path, self.handler);
        match self.name {
            Some(name) => builder.name(name),
            None => builder.into(),
        }
    }
}

/// Create a GET route definition with compile-time path validation
///
/// ```rust,ignore
/// get!("/shows", controllers::shows::index).name("shows.index")
/// ```
#[macro_export]
macro_rules! get {
    ($path:expr, $handler:expr) => {{
        const _: &str = $crate::validate_route_path($path);
        $crate::RouteDef::new($crate::routing::__http::Method::GET, $path, $handler)
    }};
}

/// Create a POST route definition with compile-time path validation
#[macro_export]
macro_rules! post {
    ($path:expr, $handler:expr) => {{
        const _: &str = $crate::validate_route_path($path);
        $crate::RouteDef::new($crate::routing::__http::Method::POST, $path, $handler)
    }};
}

/// Define routes and generate a `pub fn register() -> Router`
#[macro_export]
macro_rules! routes {
    ( $( $route:expr ),* $(,)? ) => {
        pub fn register() -> $crate::Router {
            let mut router = $crate::Router::new();
            $(
                router = $route.register(router);
            )*
            router
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::http::{HttpResponse, Request, Response};

    async fn index(_req: Request) -> Response {
        HttpResponse::text("index").ok()
    }

    mod routes {
        use super::index;
        crate::routes! {
            crate::get!("/venues", index).name("venues.index"),
            crate::post!("/venues", index),
        }
    }

    #[test]
    fn routes_macro_builds_a_router() {
        let router = routes::register();
        assert_eq!(router.routes().len(), 2);
        assert_eq!(router.routes()[0].name.as_deref(), Some("venues.index"));
        assert_eq!(router.routes()[1].name, None);
        assert!(router
            .match_route(&http::Method::POST, "/venues")
            .is_some());
    }
}
