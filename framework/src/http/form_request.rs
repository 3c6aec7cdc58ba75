//! FormRequest trait for validated request data

use super::body::parse_json_object;
use super::Request;
use crate::error::FrameworkError;
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// A request body schema that validates into a typed value
///
/// The body is parsed as a JSON object into `Self`, then [`validate`] turns it
/// into [`Self::Validated`] or reports the first offending field. A body sent
/// without a JSON content type is not parsed and reads as `{}`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct RenameRequest { name: Option<String> }
///
/// impl FormRequest for RenameRequest {
///     type Validated = String;
///
///     fn validate(self) -> Result<String, FrameworkError> {
///         self.name
///             .filter(|n| !n.is_empty())
///             .ok_or_else(|| FrameworkError::field("name", "Name is required"))
///     }
/// }
///
/// pub async fn rename(req: Request) -> Response {
///     let name = req.validated::<RenameRequest>()?;
///     // ...
/// }
/// ```
///
/// [`validate`]: FormRequest::validate
pub trait FormRequest: Sized + DeserializeOwned {
    /// The value produced once validation succeeds
    type Validated;

    /// Check the parsed body, returning the first failure
    fn validate(self) -> Result<Self::Validated, FrameworkError>;

    /// Parse and validate the body of `req`
    fn extract(req: &Request) -> Result<Self::Validated, FrameworkError> {
        let body = if req.is_json() {
            req.body().clone()
        } else {
            Bytes::new()
        };
        let data: Self = parse_json_object(&body)?;
        data.validate()
    }
}
