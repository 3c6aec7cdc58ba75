//! Body handling for HTTP requests
//!
//! Bodies are collected in full (up to a size limit) before a request is
//! dispatched, so handlers can read them synchronously.

use crate::error::{AppError, FrameworkError};
use bytes::Bytes;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Message returned when a JSON body cannot be used as an object
pub const MALFORMED_BODY_MESSAGE: &str = "Request body must be a JSON object";

/// Collect a request body, failing with 413 once `limit` bytes are exceeded
pub async fn collect_limited<B>(body: B, limit: usize) -> Result<Bytes, FrameworkError>
where
    B: hyper::body::Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    Limited::new(body, limit)
        .collect()
        .await
        .map(|collected| collected.to_bytes())
        .map_err(|e| {
            if e.downcast_ref::<LengthLimitError>().is_some() {
                FrameworkError::PayloadTooLarge { limit }
            } else {
                FrameworkError::internal(format!("Failed to read request body: {}", e))
            }
        })
}

/// Parse bytes as a JSON object into the target type
///
/// An empty (or whitespace-only) body is read as `{}`. Anything that is not a
/// JSON object, or does not fit `T`, is a 400.
pub fn parse_json_object<T: DeserializeOwned>(bytes: &Bytes) -> Result<T, FrameworkError> {
    let value = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(bytes).map_err(|_| malformed())?
    };

    if !value.is_object() {
        return Err(malformed());
    }

    serde_json::from_value(value).map_err(|_| malformed())
}

fn malformed() -> FrameworkError {
    AppError::bad_request(MALFORMED_BODY_MESSAGE).into()
}
