//! Router-wide middleware ("layers")

use super::{into_boxed, BoxedMiddleware, Middleware};

/// Middleware that runs on every request a router handles, matched or not
///
/// # Example
///
/// ```rust,ignore
/// let layers = MiddlewareRegistry::new()
///     .append(RequestLogger)
///     .append(Cors::permissive());
/// ```
#[derive(Clone, Default)]
pub struct MiddlewareRegistry {
    /// Runs in insertion order, outermost first
    global: Vec<BoxedMiddleware>,
}

impl MiddlewareRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append middleware after the ones already registered
    pub fn append<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.global.push(into_boxed(middleware));
        self
    }

    pub fn global_middleware(&self) -> &[BoxedMiddleware] {
        &self.global
    }
}
