//! # Validation Module
//!
//! Input validation for the owner's forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                      │
//! │  └── Collects raw strings from inputs (nothing parsed yet)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Required-field checks (after trimming)                            │
//! │  ├── Positive-integer parsing for price and bed count                  │
//! │  └── Amenity list normalisation                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                         │
//! │  └── Id assignment, roster creation                                    │
//! │                                                                         │
//! │  On failure the form stays open and the error is shown as a toast.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::price::Rupees;
use crate::types::{DEFAULT_LISTING_IMAGE, FALLBACK_AMENITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Tenant Details
// =============================================================================

/// Trims both fields; fails if either is blank.
///
/// ## Example
/// ```rust
/// use hostel_core::validation::validate_tenant_details;
///
/// let (name, phone) = validate_tenant_details(" Alice ", "9999999999").unwrap();
/// assert_eq!(name, "Alice");
/// assert!(validate_tenant_details("Alice", "").is_err());
/// ```
pub fn validate_tenant_details(name: &str, phone: &str) -> ValidationResult<(String, String)> {
    let name = name.trim();
    let phone = phone.trim();

    if name.is_empty() || phone.is_empty() {
        return Err(ValidationError::TenantDetailsMissing);
    }

    Ok((name.to_string(), phone.to_string()))
}

// =============================================================================
// Add-Hostel Form
// =============================================================================

/// Raw contents of the "Add New Hostel" dialog, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ListingForm {
    pub name: String,
    pub location: String,
    pub price: String,
    /// Comma separated.
    pub amenities: String,
    pub total_beds: String,
    /// Optional image URL.
    pub image: String,
}

/// A listing form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub name: String,
    pub location: String,
    pub price: Rupees,
    pub amenities: Vec<String>,
    pub total_beds: u32,
    pub image: String,
}

impl ListingForm {
    /// Validates the form in the order the dialog reports problems:
    /// required fields, then price, then bed count.
    pub fn validate(&self) -> ValidationResult<NewListing> {
        let missing: Vec<String> = [
            ("name", &self.name),
            ("location", &self.location),
            ("price", &self.price),
            ("totalBeds", &self.total_beds),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field.to_string())
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::RequiredFieldsMissing { fields: missing });
        }

        let price = parse_positive(&self.price).ok_or_else(|| ValidationError::InvalidPrice {
            input: self.price.clone(),
        })?;

        let total_beds =
            parse_positive(&self.total_beds).ok_or_else(|| ValidationError::InvalidBedCount {
                input: self.total_beds.clone(),
            })?;

        let image = match self.image.trim() {
            "" => DEFAULT_LISTING_IMAGE.to_string(),
            url => url.to_string(),
        };

        Ok(NewListing {
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            price: Rupees::new(price),
            amenities: parse_amenities(&self.amenities),
            total_beds,
            image,
        })
    }
}

/// Splits a comma-separated amenity list, dropping blanks.
///
/// An empty result becomes `["Basic"]`.
pub fn parse_amenities(input: &str) -> Vec<String> {
    let amenities: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect();

    if amenities.is_empty() {
        vec![FALLBACK_AMENITY.to_string()]
    } else {
        amenities
    }
}

fn parse_positive(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|n| *n > 0)
}
