//! Framework-wide error types
//!
//! Every error a handler can raise ends up as a [`FrameworkError`], which knows
//! its HTTP status and how to render itself. Server-side failures (5xx) are
//! logged with their detail and answered with a generic body.

use thiserror::Error;

/// Body sent for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Trait for errors that can be converted to HTTP responses
///
/// Implement this on domain errors to choose the status code and message used
/// when the error reaches the client.
///
/// # Example
///
/// ```rust,ignore
/// use marquee::{FrameworkError, HttpError};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("ticket {0} is sold out")]
/// struct SoldOut(i64);
///
/// impl HttpError for SoldOut {
///     fn status_code(&self) -> u16 { 409 }
/// }
///
/// let err = FrameworkError::from_http_error(&SoldOut(7));
/// assert_eq!(err.status_code(), 409);
/// ```
pub trait HttpError: std::error::Error + Send + Sync + 'static {
    /// HTTP status code (default: 500)
    fn status_code(&self) -> u16 {
        500
    }

    /// Error message for the HTTP response (default: the error's Display)
    fn error_message(&self) -> String {
        self.to_string()
    }
}

/// Simple wrapper for one-off domain errors
///
/// Renders as `{"error": message}` with the chosen status.
#[derive(Debug, Clone)]
pub struct AppError {
    message: String,
    status_code: u16,
}

impl AppError {
    /// Create a new AppError with status 500 (Internal Server Error)
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: 500,
        }
    }

    /// Set the HTTP status code
    pub fn status(mut self, code: u16) -> Self {
        self.status_code = code;
        self
    }

    /// Create a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message).status(404)
    }

    /// Create a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message).status(400)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl HttpError for AppError {
    fn status_code(&self) -> u16 {
        self.status_code
    }

    fn error_message(&self) -> String {
        self.message.clone()
    }
}

impl From<AppError> for FrameworkError {
    fn from(e: AppError) -> Self {
        FrameworkError::Domain {
            message: e.message,
            status_code: e.status_code,
        }
    }
}

/// Framework-wide error type
///
/// Implements `From<FrameworkError> for HttpResponse`, so handlers can
/// propagate it with `?`.
#[derive(Debug, Clone, Error)]
pub enum FrameworkError {
    /// No value of the requested type was registered on the router
    #[error("State '{type_name}' not registered on the router")]
    StateNotFound {
        /// The type name of the missing state
        type_name: &'static str,
    },

    /// A route parameter the handler asked for is missing
    #[error("Missing required parameter: {param_name}")]
    ParamError {
        /// The name of the parameter
        param_name: String,
    },

    /// A single request field failed validation (400, plain-text message)
    #[error("Validation error for '{field}': {message}")]
    Field {
        /// The field that failed validation
        field: String,
        /// Human-readable message sent to the client
        message: String,
    },

    /// Request body exceeded the configured limit (413)
    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge {
        /// The configured limit in bytes
        limit: usize,
    },

    /// Generic internal server error
    #[error("Internal server error: {message}")]
    Internal {
        /// Detail for the logs; never sent to the client
        message: String,
    },

    /// Domain/application error with custom status code
    #[error("{message}")]
    Domain {
        /// The error message
        message: String,
        /// HTTP status code
        status_code: u16,
    },
}

impl FrameworkError {
    /// Create a StateNotFound error for a given type
    pub fn state_not_found<T: ?Sized>() -> Self {
        Self::StateNotFound {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create a ParamError for a missing parameter
    pub fn param(name: impl Into<String>) -> Self {
        Self::ParamError {
            param_name: name.into(),
        }
    }

    /// Create a field validation error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a Domain error with custom status code
    pub fn domain(message: impl Into<String>, status_code: u16) -> Self {
        Self::Domain {
            message: message.into(),
            status_code,
        }
    }

    /// Convert any [`HttpError`] into a Domain error
    pub fn from_http_error<E: HttpError>(err: &E) -> Self {
        Self::domain(err.error_message(), err.status_code())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::StateNotFound { .. } => 500,
            Self::ParamError { .. } => 400,
            Self::Field { .. } => 400,
            Self::PayloadTooLarge { .. } => 413,
            Self::Internal { .. } => 500,
            Self::Domain { status_code, .. } => *status_code,
        }
    }

    /// Whether this error is a server-side failure
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<serde_json::Error> for FrameworkError {
    fn from(e: serde_json::Error) -> Self {
        Self::internal(format!("JSON serialization failed: {}", e))
    }
}
