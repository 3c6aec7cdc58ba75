use super::body::parse_json_object;
use super::form_request::FormRequest;
use crate::error::FrameworkError;
use crate::state::State;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;

/// HTTP request with its body already collected
pub struct Request {
    parts: http::request::Parts,
    body: Bytes,
    params: HashMap<String, String>,
    state: Arc<State>,
}

impl Request {
    pub fn new(parts: http::request::Parts, body: Bytes) -> Self {
        Self {
            parts,
            body,
            params: HashMap::new(),
            state: Arc::new(State::new()),
        }
    }

    /// Build a request from an `http::Request` whose body is in memory
    pub fn from_http(req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();
        Self::new(parts, body)
    }

    pub(crate) fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    pub(crate) fn with_state(mut self, state: Arc<State>) -> Self {
        self.state = state;
        self
    }

    /// Get the request method
    pub fn method(&self) -> &http::Method {
        &self.parts.method
    }

    /// Get the request path
    pub fn path(&self) -> &str {
        self.parts.uri.path()
    }

    /// Get a route parameter by name (e.g., /shows/{id})
    pub fn param(&self, name: &str) -> Result<&str, FrameworkError> {
        self.params
            .get(name)
            .map(|s| s.as_str())
            .ok_or_else(|| FrameworkError::param(name))
    }

    /// Get a header value by name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get the Content-Type header
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Whether the Content-Type is `application/json` or a `+json` type
    pub fn is_json(&self) -> bool {
        let Some(content_type) = self.content_type() else {
            return false;
        };
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
    }

    /// Raw body bytes
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Parse the body as a JSON object
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FrameworkError> {
        parse_json_object(&self.body)
    }

    /// Parse the body into `F` and run its validation
    pub fn validated<F: FormRequest>(&self) -> Result<F::Validated, FrameworkError> {
        F::extract(self)
    }

    /// Resolve shared state registered on the router with `Router::state`
    pub fn state<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, FrameworkError> {
        self.state
            .get::<T>()
            .ok_or_else(FrameworkError::state_not_found::<T>)
    }
}
