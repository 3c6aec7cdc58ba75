use crate::http::{HttpResponse, Request};
use crate::routing::Router;
use crate::server::dispatch;
use bytes::Bytes;
use serde_json::Value;

/// Drives a router in-process, without sockets
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: impl Into<Router>) -> Self {
        Self {
            router: router.into(),
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(http::Request::get(path), Bytes::new()).await
    }

    pub async fn head(&self, path: &str) -> TestResponse {
        self.send(http::Request::head(path), Bytes::new()).await
    }

    /// POST `body` serialized as JSON
    pub async fn post_json(&self, path: &str, body: &Value) -> TestResponse {
        let builder = http::Request::post(path).header("content-type", "application/json");
        self.send(builder, Bytes::from(body.to_string())).await
    }

    /// POST a raw body with the given content type
    pub async fn post_raw(&self, path: &str, content_type: &str, body: &'static str) -> TestResponse {
        let builder = http::Request::post(path).header("content-type", content_type);
        self.send(builder, Bytes::from_static(body.as_bytes())).await
    }

    /// Send an OPTIONS preflight with the given extra headers
    pub async fn options(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let builder = headers
            .iter()
            .fold(http::Request::options(path), |b, (name, value)| {
                b.header(*name, *value)
            });
        self.send(builder, Bytes::new()).await
    }

    async fn send(&self, builder: http::request::Builder, body: Bytes) -> TestResponse {
        let request = builder
            .body(body)
            .unwrap_or_else(|err| panic!("invalid test request: {}", err));
        TestResponse::from(dispatch(&self.router, Request::from_http(request)).await)
    }
}

/// A captured response
#[derive(Debug, Clone)]
pub struct TestResponse {
    inner: HttpResponse,
}

impl TestResponse {
    pub fn status(&self) -> u16 {
        self.inner.status_code()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.header_value(name)
    }

    /// Body as UTF-8 text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.inner.body()).into_owned()
    }

    /// Body parsed as JSON
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    pub fn json(&self) -> Value {
        serde_json::from_slice(self.inner.body())
            .unwrap_or_else(|err| panic!("response body is not JSON ({}): {}", err, self.text()))
    }
}

impl From<HttpResponse> for TestResponse {
    fn from(inner: HttpResponse) -> Self {
        Self { inner }
    }
}
