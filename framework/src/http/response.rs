use crate::error::{AppError, FrameworkError, INTERNAL_ERROR_MESSAGE};
use bytes::Bytes;
use http_body_util::Full;
use serde::Serialize;

/// HTTP response builder
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: u16,
    body: Bytes,
    headers: Vec<(String, String)>,
}

/// Response type alias - allows using `?` operator for early returns
pub type Response = Result<HttpResponse, HttpResponse>;

impl HttpResponse {
    pub fn new() -> Self {
        Self {
            status: 200,
            body: Bytes::new(),
            headers: Vec::new(),
        }
    }

    /// Create a response with a plain-text body
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: Bytes::from(body.into()),
            headers: vec![(
                "Content-Type".to_string(),
                "text/plain; charset=utf-8".to_string(),
            )],
        }
    }

    /// Create a JSON response from a serde_json::Value
    pub fn json(body: serde_json::Value) -> Self {
        Self::json_bytes(body.to_string().into_bytes())
    }

    /// Create a JSON response by serializing `body`
    pub fn try_json<T: Serialize + ?Sized>(body: &T) -> Result<Self, FrameworkError> {
        Ok(Self::json_bytes(serde_json::to_vec(body)?))
    }

    fn json_bytes(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            body: Bytes::from(body),
            headers: vec![(
                "Content-Type".to_string(),
                "application/json; charset=utf-8".to_string(),
            )],
        }
    }

    /// Set the HTTP status code
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Add a header to the response
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Wrap this response in Ok() for use as Response type
    pub fn ok(self) -> Response {
        Ok(self)
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First value of a header, matched case-insensitively
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Convert to hyper response
    pub fn into_hyper(self) -> hyper::Response<Full<Bytes>> {
        let mut builder = hyper::Response::builder().status(self.status);

        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder.body(Full::new(self.body)).unwrap_or_else(|err| {
            tracing::error!(error = %err, "response could not be built");
            let mut fallback =
                hyper::Response::new(Full::new(Bytes::from_static(b"Internal server error")));
            *fallback.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
    }
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Auto-convert FrameworkError to HttpResponse
///
/// Field errors render as plain text, server errors are logged and hidden
/// behind a generic message, everything else is `{"error": message}`.
impl From<FrameworkError> for HttpResponse {
    fn from(err: FrameworkError) -> HttpResponse {
        let status = err.status_code();
        let response = match &err {
            FrameworkError::Field { message, .. } => HttpResponse::text(message.clone()),
            _ if err.is_server_error() => {
                tracing::error!(error = %err, status, "request failed");
                HttpResponse::json(serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE }))
            }
            FrameworkError::PayloadTooLarge { .. } => {
                HttpResponse::json(serde_json::json!({ "error": "Payload too large" }))
            }
            _ => HttpResponse::json(serde_json::json!({ "error": err.to_string() })),
        };
        response.status(status)
    }
}

/// Auto-convert AppError to HttpResponse
impl From<AppError> for HttpResponse {
    fn from(err: AppError) -> HttpResponse {
        FrameworkError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn body_json(response: &HttpResponse) -> Value {
        serde_json::from_slice(response.body()).unwrap()
    }

    #[test]
    fn field_errors_render_as_plain_text() {
        let response: HttpResponse = FrameworkError::field("time", "time is required").into();
        assert_eq!(response.status_code(), 400);
        assert_eq!(&response.body()[..], b"time is required");
        assert_eq!(
            response.header_value("content-type"),
            Some("text/plain; charset=utf-8")
        );
    }

    #[test]
    fn server_errors_hide_their_detail() {
        let response: HttpResponse = FrameworkError::internal("lock poisoned").into();
        assert_eq!(response.status_code(), 500);
        assert_eq!(body_json(&response), json!({ "error": "Internal server error" }));
    }

    #[test]
    fn domain_errors_render_their_message() {
        let response: HttpResponse = AppError::not_found("Show not found").into();
        assert_eq!(response.status_code(), 404);
        assert_eq!(body_json(&response), json!({ "error": "Show not found" }));
    }

    #[test]
    fn try_json_serializes_structs() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Venue {
            venue_id: u32,
        }

        let response = HttpResponse::try_json(&Venue { venue_id: 2 }).unwrap().status(201);
        assert_eq!(response.status_code(), 201);
        assert_eq!(body_json(&response), json!({ "venueId": 2 }));
    }

    #[test]
    fn into_hyper_keeps_status_and_headers() {
        let response = HttpResponse::text("hi").status(202).header("X-Show", "1").into_hyper();
        assert_eq!(response.status(), 202);
        assert_eq!(response.headers()["x-show"], "1");
    }
}
