//! # Price Module
//!
//! Nightly prices and the inclusive price band used by the search filter.
//!
//! ## Why Whole Rupees?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Hostel prices are quoted per night in whole rupees (₹500, ₹700).      │
//! │  There are no fractional amounts and no tax lines, so a u32 is enough. │
//! │  Zero is never a valid nightly price; the add-hostel form rejects it.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hostel_core::price::{PriceRange, Rupees};
//!
//! let price = Rupees::new(700);
//! assert_eq!(price.to_string(), "₹700");
//!
//! let band = PriceRange::new(600, 2000).unwrap();
//! assert!(band.contains(price));
//! assert!(!band.contains(Rupees::new(500)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;

/// Lower bound of the search slider.
pub const PRICE_SLIDER_MIN: u32 = 300;

/// Upper bound of the search slider.
pub const PRICE_SLIDER_MAX: u32 = 2000;

/// Slider granularity.
pub const PRICE_SLIDER_STEP: u32 = 100;

// =============================================================================
// Rupees
// =============================================================================

/// A nightly price in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Rupees(u32);

impl Rupees {
    #[inline]
    pub const fn new(amount: u32) -> Self {
        Rupees(amount)
    }

    #[inline]
    pub const fn amount(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

impl From<u32> for Rupees {
    fn from(amount: u32) -> Self {
        Rupees(amount)
    }
}

// =============================================================================
// Price Range
// =============================================================================

/// Inclusive `[min, max]` price band.
///
/// Serialized as a two-element array, the shape the search bar's slider
/// produces: `[300, 2000]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u32; 2]", into = "[u32; 2]")]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// Creates a band, rejecting `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::InvertedPriceRange { min, max });
        }
        Ok(PriceRange { min, max })
    }

    #[inline]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Both bounds are inclusive.
    #[inline]
    pub fn contains(&self, price: Rupees) -> bool {
        price.amount() >= self.min && price.amount() <= self.max
    }
}

impl Default for PriceRange {
    /// The slider's full extent: ₹300 – ₹2000.
    fn default() -> Self {
        PriceRange {
            min: PRICE_SLIDER_MIN,
            max: PRICE_SLIDER_MAX,
        }
    }
}

impl TryFrom<[u32; 2]> for PriceRange {
    type Error = ValidationError;

    fn try_from(bounds: [u32; 2]) -> Result<Self, Self::Error> {
        PriceRange::new(bounds[0], bounds[1])
    }
}

impl From<PriceRange> for [u32; 2] {
    fn from(range: PriceRange) -> Self {
        [range.min, range.max]
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{} - ₹{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Rupees::new(500).to_string(), "₹500");
        assert_eq!(PriceRange::default().to_string(), "₹300 - ₹2000");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let band = PriceRange::new(500, 700).unwrap();
        assert!(band.contains(Rupees::new(500)));
        assert!(band.contains(Rupees::new(700)));
        assert!(!band.contains(Rupees::new(499)));
        assert!(!band.contains(Rupees::new(701)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(
            PriceRange::new(900, 400),
            Err(ValidationError::InvertedPriceRange { min: 900, max: 400 })
        );
        // single-point band is fine
        assert!(PriceRange::new(600, 600).is_ok());
    }

    #[test]
    fn test_serde_array_shape() {
        let band: PriceRange = serde_json::from_str("[600, 2000]").unwrap();
        assert_eq!(band.min(), 600);
        assert_eq!(serde_json::to_string(&band).unwrap(), "[600,2000]");

        assert!(serde_json::from_str::<PriceRange>("[2000, 600]").is_err());
    }
}
