//! # API Error Type
//!
//! Unified error type for app commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Velocity                               │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  {"command": "assign_tenant", ...}                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ──── StoreError::NotFound { .. } ────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Rule Error? ───── CoreError::Validation ──────── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Session Error? ── ApiError::unauthorized ─────── silent ──────►│  │
//! │  │         │                                         redirect      │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Every error except UNAUTHORIZED also becomes an error toast.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hostel_core::CoreError;
use hostel_store::StoreError;
use serde::Serialize;

/// API error returned from commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Please fill all the tenant details"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Listing or bed not found
    NotFound,

    /// Input validation failed, or the command envelope was malformed
    ValidationError,

    /// No session, or the wrong role for the screen
    Unauthorized,

    /// Business rule refused the action (no beds, wrong booking step)
    BusinessLogic,

    /// Session file could not be read or written
    StorageError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a session error. Never shown to the user.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unauthorized, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Whether the user should see this error as a toast.
    pub fn is_user_facing(&self) -> bool {
        self.code != ErrorCode::Unauthorized
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            StoreError::Duplicate { field, value } => ApiError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            StoreError::Core(e) => e.into(),
            StoreError::Serialization(e) => {
                tracing::error!("Session serialization failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Could not save your session")
            }
            StoreError::Io(e) => {
                tracing::error!("Session storage failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Could not save your session")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ListingNotFound(id) => ApiError::not_found("Hostel", &id),
            CoreError::BedNotFound(id) => ApiError::not_found("Bed", &id),
            e @ CoreError::NoBedsAvailable { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, e.to_string())
            }
            e @ CoreError::BedOccupied { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, e.to_string())
            }
            e @ CoreError::InvalidTransition { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, e.to_string())
            }
            e @ CoreError::InvalidCredentials => ApiError::validation(e.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for commands.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_core::ValidationError;

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::validation("Please enter a valid price");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Please enter a valid price");
    }

    #[test]
    fn test_core_conversions() {
        let err: ApiError = CoreError::NoBedsAvailable {
            listing_id: "6".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert_eq!(err.message, "No beds available at this hostel");

        let err: ApiError = CoreError::InvalidCredentials.into();
        assert_eq!(err.message, "Invalid username or password");

        let err: ApiError = StoreError::from(CoreError::from(
            ValidationError::TenantDetailsMissing,
        ))
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_store_io_is_masked() {
        let err: ApiError = StoreError::Io("permission denied".into()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(!err.message.contains("permission"));
    }

    #[test]
    fn test_unauthorized_is_silent() {
        assert!(!ApiError::unauthorized("no session").is_user_facing());
        assert!(ApiError::not_found("Hostel", "9").is_user_facing());
    }
}
