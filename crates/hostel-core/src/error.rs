//! # Error Types
//!
//! Domain-specific error types for hostel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hostel-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  hostel-store errors (separate crate)                                  │
//! │  └── StoreError       - Missing records, session storage failures      │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Toast     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages of validation variants are shown to the user verbatim, so they
//! are worded as toast text rather than as diagnostics.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No listing with this id in the catalog.
    #[error("Hostel not found: {0}")]
    ListingNotFound(String),

    /// No bed with this id in the roster.
    #[error("Bed not found: {0}")]
    BedNotFound(String),

    /// "Book Now" pressed on a listing with zero available beds.
    ///
    /// ## User Workflow
    /// ```text
    /// Details dialog (Urban Living, 0 beds)
    ///      │
    ///      ▼
    /// Book Now ──► availableBeds == 0
    ///      │
    ///      ▼
    /// NoBedsAvailable { listing_id: "6" }
    ///      │
    ///      ▼
    /// Toast: "No beds available at this hostel" (dialog stays open)
    /// ```
    #[error("No beds available at this hostel")]
    NoBedsAvailable { listing_id: String },

    /// Assign dialog submitted for a bed that already has a tenant.
    #[error("Bed #{bed_number} is already occupied")]
    BedOccupied { bed_number: u32 },

    /// The booking flow was asked to do something its current state forbids.
    #[error("Cannot {action} while {state}")]
    InvalidTransition { state: String, action: String },

    /// Username/password pair matched no account.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised by the owner's forms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Assign-tenant dialog submitted with a blank name or phone.
    #[error("Please fill all the tenant details")]
    TenantDetailsMissing,

    /// Add-hostel form submitted with a blank required field.
    #[error("Please fill all required fields")]
    RequiredFieldsMissing { fields: Vec<String> },

    /// Price is not a positive integer.
    #[error("Please enter a valid price")]
    InvalidPrice { input: String },

    /// Total beds is not a positive integer.
    #[error("Please enter a valid number of beds")]
    InvalidBedCount { input: String },

    /// Price range with min above max.
    #[error("Price range {min}-{max} is inverted")]
    InvertedPriceRange { min: u32, max: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NoBedsAvailable {
            listing_id: "6".to_string(),
        };
        assert_eq!(err.to_string(), "No beds available at this hostel");

        let err = CoreError::InvalidTransition {
            state: "browsing".to_string(),
            action: "confirm booking".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot confirm booking while browsing");

        let err = CoreError::BedOccupied { bed_number: 3 };
        assert_eq!(err.to_string(), "Bed #3 is already occupied");
    }

    #[test]
    fn test_validation_messages_are_toast_text() {
        assert_eq!(
            ValidationError::TenantDetailsMissing.to_string(),
            "Please fill all the tenant details"
        );
        let err = ValidationError::InvalidPrice {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Please enter a valid price");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::TenantDetailsMissing.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        // transparent: the toast text survives the conversion
        assert_eq!(core_err.to_string(), "Please fill all the tenant details");
    }
}
