//! # Listing Repository
//!
//! The catalog of hostel listings, kept in insertion order so every screen
//! lists hostels the same way.

use std::sync::{Arc, RwLock};

use hostel_core::Listing;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Repository for listing records.
///
/// ## Usage
/// ```rust
/// use hostel_store::ListingRepository;
///
/// let repo = ListingRepository::new(hostel_core::seed::listings());
/// assert_eq!(repo.get("2").unwrap().name, "City Central Hostel");
/// assert_eq!(repo.next_id(), "7");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListingRepository {
    listings: Arc<RwLock<Vec<Listing>>>,
}

impl ListingRepository {
    pub fn new(listings: Vec<Listing>) -> Self {
        ListingRepository {
            listings: Arc::new(RwLock::new(listings)),
        }
    }

    /// All listings, in catalog order.
    pub fn list(&self) -> Vec<Listing> {
        self.listings.read().expect("Listing lock poisoned").clone()
    }

    pub fn get(&self, id: &str) -> StoreResult<Listing> {
        self.listings
            .read()
            .expect("Listing lock poisoned")
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Hostel", id))
    }

    pub fn count(&self) -> usize {
        self.listings.read().expect("Listing lock poisoned").len()
    }

    /// Id for the next new listing: catalog size + 1.
    pub fn next_id(&self) -> String {
        (self.count() + 1).to_string()
    }

    /// Appends a listing; its id must be unused.
    pub fn insert(&self, listing: Listing) -> StoreResult<()> {
        let mut listings = self.listings.write().expect("Listing lock poisoned");

        if listings.iter().any(|l| l.id == listing.id) {
            return Err(StoreError::duplicate("hostel id", listing.id));
        }

        debug!(listing_id = %listing.id, name = %listing.name, "Inserting listing");
        listings.push(listing);
        Ok(())
    }
}
