//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (business rule) ─┐                                          │
//! │  io::Error (session file) ──┼──► StoreError (this module)              │
//! │  serde_json::Error ─────────┘          │                               │
//! │                                        ▼                               │
//! │                           ApiError (in app) ← Serialized for frontend  │
//! │                                        │                               │
//! │                                        ▼                               │
//! │                           Toast / redirect                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hostel_core::CoreError;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not present in the store.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Inserting a record whose key is already taken.
    #[error("Duplicate {field}: '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A business rule rejected the mutation; the store is unchanged.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Session entry could not be encoded or decoded.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Session file could not be read or written.
    #[error("Storage I/O failed: {0}")]
    Io(String),
}

impl StoreError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
