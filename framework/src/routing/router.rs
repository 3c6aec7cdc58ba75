use crate::http::{HttpResponse, Request, Response};
use crate::middleware::{BoxedMiddleware, Middleware, MiddlewareRegistry};
use crate::state::State;
use futures::future::BoxFuture;
use matchit::Router as MatchitRouter;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// Type alias for route handlers
pub type BoxedHandler = Box<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// A registered route, as listed by `Router::routes`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: http::Method,
    pub path: String,
    pub name: Option<String>,
}

/// HTTP router
///
/// Holds the route table, the router-wide middleware and the shared state
/// handed to every request.
pub struct Router {
    routes: HashMap<http::Method, MatchitRouter<Arc<BoxedHandler>>>,
    table: Vec<RouteInfo>,
    layers: MiddlewareRegistry,
    state: Arc<State>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            table: Vec::new(),
            layers: MiddlewareRegistry::new(),
            state: Arc::new(State::new()),
        }
    }

    /// Register a GET route
    pub fn get<H, Fut>(self, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(http::Method::GET, path, handler)
    }

    /// Register a POST route
    pub fn post<H, Fut>(self, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(http::Method::POST, path, handler)
    }

    /// Register a route for any method
    pub fn route<H, Fut>(mut self, method: http::Method, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        let inserted = self
            .routes
            .entry(method.clone())
            .or_default()
            .insert(path, Arc::new(handler));

        let index = match inserted {
            Ok(()) => {
                self.table.push(RouteInfo {
                    method,
                    path: path.to_string(),
                    name: None,
                });
                Some(self.table.len() - 1)
            }
            Err(err) => {
                tracing::warn!(%method, path, error = %err, "route not registered");
                None
            }
        };

        RouteBuilder {
            router: self,
            index,
        }
    }

    /// Wrap every request this router handles in `middleware`
    ///
    /// Layers run in the order they are added, outermost first, and also see
    /// requests that match no route.
    pub fn layer<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.layers = self.layers.append(middleware);
        self
    }

    /// Share `value` with every handler through `Request::state::<T>()`
    pub fn state<T: Send + Sync + 'static>(mut self, value: T) -> Self {
        Arc::make_mut(&mut self.state).insert(value);
        self
    }

    /// Match a request and return the handler with extracted params
    ///
    /// One trailing slash is ignored, and HEAD falls back to the GET routes.
    pub fn match_route(
        &self,
        method: &http::Method,
        path: &str,
    ) -> Option<(Arc<BoxedHandler>, HashMap<String, String>)> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        let matched = self
            .routes
            .get(method)
            .and_then(|tree| tree.at(path).ok())
            .or_else(|| {
                if *method == http::Method::HEAD {
                    self.routes.get(&http::Method::GET)?.at(path).ok()
                } else {
                    None
                }
            })?;
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Some((matched.value.clone(), params))
    }

    /// Registered routes in registration order
    pub fn routes(&self) -> &[RouteInfo] {
        &self.table
    }

    pub fn layers(&self) -> &[BoxedMiddleware] {
        self.layers.global_middleware()
    }

    pub(crate) fn shared_state(&self) -> Arc<State> {
        self.state.clone()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler used when no route matches
pub(crate) fn fallback_handler() -> Arc<BoxedHandler> {
    let handler: BoxedHandler = Box::new(|_req| {
        Box::pin(async { Err(HttpResponse::text("404 Not Found").status(404)) })
    });
    Arc::new(handler)
}

/// Builder returned after registering a route, enabling .name() chaining
pub struct RouteBuilder {
    pub(crate) router: Router,
    index: Option<usize>,
}

impl RouteBuilder {
    /// Name the most recently registered route
    pub fn name(mut self, name: &str) -> Router {
        if let Some(route) = self.index.and_then(|i| self.router.table.get_mut(i)) {
            route.name = Some(name.to_string());
        }
        self.router
    }

    /// Register a GET route (for chaining without .name())
    pub fn get<H, Fut>(self, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.router.get(path, handler)
    }

    /// Register a POST route (for chaining without .name())
    pub fn post<H, Fut>(self, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.router.post(path, handler)
    }
}

impl From<RouteBuilder> for Router {
    fn from(builder: RouteBuilder) -> Self {
        builder.router
    }
}
