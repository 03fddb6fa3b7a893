//! # Search Filter
//!
//! Narrows the listing catalog down to what a tenant asked for.
//!
//! ## Predicate Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A listing survives only if EVERY active predicate holds:               │
//! │                                                                         │
//! │  query     (if non-empty) ─► name | location | any amenity contains it  │
//! │                              (case-insensitive)                         │
//! │  location  (if chosen)    ─► location == chosen (exact)                 │
//! │  price                    ─► min <= price <= max (always active)        │
//! │  amenities (if any)       ─► listing has ALL of them (exact tags)       │
//! │                                                                         │
//! │  Output keeps input order. Nothing is sorted.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::price::PriceRange;
use crate::types::Listing;

/// Location choice meaning "no location constraint".
pub const ALL_LOCATIONS: &str = "All Locations";

/// Locations offered by the search bar.
pub const KNOWN_LOCATIONS: [&str; 6] = [
    ALL_LOCATIONS,
    "Delhi",
    "Mumbai",
    "Bangalore",
    "Chennai",
    "Hyderabad",
];

/// Amenity chips offered by the search bar.
pub const KNOWN_AMENITIES: [&str; 7] = [
    "Wi-Fi",
    "AC",
    "Parking",
    "Laundry",
    "Kitchen",
    "Study Room",
    "Common Area",
];

/// Everything the search bar can constrain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SearchFilters {
    pub query: String,

    /// Empty or [`ALL_LOCATIONS`] disables the location predicate.
    pub location: String,

    #[ts(type = "[number, number]")]
    pub price_range: PriceRange,

    /// Required amenities (AND semantics).
    pub amenities: Vec<String>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        SearchFilters {
            query: String::new(),
            location: ALL_LOCATIONS.to_string(),
            price_range: PriceRange::default(),
            amenities: Vec::new(),
        }
    }
}

impl SearchFilters {
    /// The location to match exactly, if any. No trimming happens.
    pub fn location_constraint(&self) -> Option<&str> {
        match self.location.as_str() {
            "" | ALL_LOCATIONS => None,
            loc => Some(loc),
        }
    }

    /// Adds the amenity if absent, removes it if present.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity.to_string());
        }
    }

    /// Back to the match-everything defaults.
    pub fn clear(&mut self) {
        *self = SearchFilters::default();
    }

    /// True when these filters constrain nothing beyond the default band.
    pub fn is_default(&self) -> bool {
        *self == SearchFilters::default()
    }

    /// Evaluates all predicates against one listing.
    pub fn matches(&self, listing: &Listing) -> bool {
        let query = self.query.to_lowercase();
        self.matches_prepared(listing, &query)
    }

    fn matches_prepared(&self, listing: &Listing, query: &str) -> bool {
        if !query.is_empty() && !listing.mentions(query) {
            return false;
        }

        if let Some(location) = self.location_constraint() {
            if listing.location != location {
                return false;
            }
        }

        if !self.price_range.contains(listing.price) {
            return false;
        }

        self.amenities.iter().all(|a| listing.has_amenity(a))
    }
}

/// Returns the listings that satisfy `filters`, in input order.
///
/// ## Example
/// ```rust
/// use hostel_core::filter::{filter_listings, SearchFilters};
/// use hostel_core::price::PriceRange;
/// use hostel_core::seed;
///
/// let catalog = seed::listings();
/// let filters = SearchFilters {
///     location: "Delhi".to_string(),
///     ..SearchFilters::default()
/// };
/// let names: Vec<_> = filter_listings(&catalog, &filters)
///     .into_iter()
///     .map(|l| l.name)
///     .collect();
/// assert_eq!(names, ["Sunrise Hostel", "Budget Stay"]);
/// ```
pub fn filter_listings<T>(listings: &[T], filters: &SearchFilters) -> Vec<T>
where
    T: AsRef<Listing> + Clone,
{
    let query = filters.query.to_lowercase();

    listings
        .iter()
        .filter(|l| filters.matches_prepared(l.as_ref(), &query))
        .cloned()
        .collect()
}

impl AsRef<Listing> for Listing {
    fn as_ref(&self) -> &Listing {
        self
    }
}
