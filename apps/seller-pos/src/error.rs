//! # App Error Type
//!
//! Unified error type for POS commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Seller POS                         │
//! │                                                                         │
//! │  Text input ──► coerced, never an error                                 │
//! │                                                                         │
//! │  place_order()                                                          │
//! │    │                                                                    │
//! │    ├── CoreError::EmptyCart / NoCustomerSelected ──┐                    │
//! │    │   (no request sent)                            │                    │
//! │    │                                                ▼                    │
//! │    └── ApiClientError::Network / Service ──────► AppError ──► Alert     │
//! │                                                                         │
//! │  Nothing here is fatal: the screen goes back to an inert state.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The screen layer receives a machine-readable `code` and a human-readable
//! `message`.

use serde::Serialize;
use souk_core::CoreError;

use crate::api::ApiClientError;
use crate::config::ConfigError;

/// Error returned from POS commands.
///
/// ```json
/// {
///   "code": "PRECONDITION_FAILED",
///   "message": "Cart is empty"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Checkout precondition not met (empty cart, no customer)
    PreconditionFailed,

    /// The checkout changed while a request for it was in flight
    Conflict,

    /// Could not reach the commerce API
    NetworkError,

    /// The commerce API rejected the request
    ServerError,

    /// Configuration could not be loaded
    ConfigError,

    /// Unexpected failure
    Internal,
}

impl AppError {
    /// Creates a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCart | CoreError::NoCustomerSelected => {
                AppError::new(ErrorCode::PreconditionFailed, err.to_string())
            }
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

impl From<souk_core::ValidationError> for AppError {
    fn from(err: souk_core::ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Converts commerce API errors to app errors.
impl From<ApiClientError> for AppError {
    fn from(err: ApiClientError) -> Self {
        match err {
            ApiClientError::Network(e) => {
                tracing::error!("Commerce API unreachable: {}", e);
                AppError::new(ErrorCode::NetworkError, "Could not reach the server")
            }
            ApiClientError::Service { status, message } => {
                tracing::error!(status, "Commerce API rejected request: {}", message);
                AppError::new(ErrorCode::ServerError, message)
            }
            ApiClientError::Decode(e) => {
                tracing::error!("Unexpected commerce API response: {}", e);
                AppError::new(ErrorCode::ServerError, "Unexpected response from the server")
            }
            ApiClientError::InvalidUrl(e) => AppError::new(ErrorCode::ConfigError, e),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
