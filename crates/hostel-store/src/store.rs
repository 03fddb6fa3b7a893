//! # Hostel Store
//!
//! The single shared in-memory state behind every screen: the listing
//! catalog and one bed roster per listing.
//!
//! ## Source of Truth for Bed Counts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   BedRoster ──► total_beds     = number of beds                         │
//! │             └─► available_beds = beds with no tenant                    │
//! │                                                                         │
//! │   Owner edits write the roster.                                         │
//! │   Tenant bookings write the roster too: the lowest vacant bed becomes   │
//! │   occupied under the tenant's username.                                 │
//! │                                                                         │
//! │   Every view is recomputed from the roster, so owner and tenant         │
//! │   screens can never disagree.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hostel_core::validation::NewListing;
use hostel_core::{seed, BedDialog, BedRoster, Listing, ListingView, RosterEvent};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::repository::listing::ListingRepository;
use crate::repository::roster::RosterRepository;

/// Listing catalog plus rosters. Cloning shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct HostelStore {
    listings: ListingRepository,
    rosters: RosterRepository,
}

impl HostelStore {
    /// Store pre-filled with the six seed hostels and their rosters.
    pub fn seeded() -> Self {
        let store = HostelStore {
            listings: ListingRepository::new(seed::listings()),
            rosters: RosterRepository::new(seed::rosters()),
        };
        info!(listings = store.listings.count(), "Hostel store seeded");
        store
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn listings(&self) -> &ListingRepository {
        &self.listings
    }

    pub fn rosters(&self) -> &RosterRepository {
        &self.rosters
    }

    // =========================================================================
    // Views
    // =========================================================================

    pub fn view(&self, listing_id: &str) -> StoreResult<ListingView> {
        let listing = self.listings.get(listing_id)?;
        let roster = self.rosters.get(listing_id)?;
        Ok(ListingView::new(listing, &roster))
    }

    /// Every listing with derived counts, in catalog order.
    pub fn views(&self) -> StoreResult<Vec<ListingView>> {
        self.collect_views(|_| true)
    }

    /// Listings managed by `username`.
    pub fn views_owned_by(&self, username: &str) -> StoreResult<Vec<ListingView>> {
        self.collect_views(|l| l.is_owned_by(username))
    }

    fn collect_views(&self, keep: impl Fn(&Listing) -> bool) -> StoreResult<Vec<ListingView>> {
        self.listings
            .list()
            .into_iter()
            .filter(|l| keep(l))
            .map(|l| {
                let roster = self.rosters.get(&l.id)?;
                Ok(ListingView::new(l, &roster))
            })
            .collect()
    }

    pub fn roster(&self, listing_id: &str) -> StoreResult<BedRoster> {
        self.rosters.get(listing_id)
    }

    // =========================================================================
    // Owner Operations
    // =========================================================================

    /// Adds a validated listing with a fully vacant roster.
    pub fn create_listing(&self, new: NewListing, owner: &str) -> StoreResult<ListingView> {
        let id = self.listings.next_id();
        let listing = Listing {
            id: id.clone(),
            name: new.name,
            location: new.location,
            price: new.price,
            amenities: new.amenities,
            image: new.image,
            owner: Some(owner.to_string()),
        };
        let roster = BedRoster::all_vacant(&id, new.total_beds);

        self.listings.insert(listing.clone())?;
        self.rosters.put(roster.clone());

        info!(listing_id = %id, owner, beds = new.total_beds, "Listing created");
        Ok(ListingView::new(listing, &roster))
    }

    pub fn bed_dialog(&self, listing_id: &str, bed_id: &str) -> StoreResult<BedDialog> {
        Ok(self.rosters.get(listing_id)?.dialog_for(bed_id)?)
    }

    pub fn assign_tenant(
        &self,
        listing_id: &str,
        bed_id: &str,
        name: &str,
        phone: &str,
    ) -> StoreResult<(RosterEvent, BedRoster)> {
        let result = self
            .rosters
            .update(listing_id, |r| r.assign_tenant(bed_id, name, phone))?;
        debug!(listing_id, bed_id, "Tenant assigned");
        Ok(result)
    }

    pub fn remove_tenant(
        &self,
        listing_id: &str,
        bed_id: &str,
    ) -> StoreResult<(RosterEvent, BedRoster)> {
        let result = self
            .rosters
            .update(listing_id, |r| r.remove_tenant(bed_id))?;
        debug!(listing_id, bed_id, "Tenant removed");
        Ok(result)
    }

    pub fn add_bed(&self, listing_id: &str) -> StoreResult<(RosterEvent, BedRoster)> {
        let result = self.rosters.update(listing_id, |r| Ok(r.add_bed()))?;
        debug!(listing_id, beds = result.1.total(), "Bed added");
        Ok(result)
    }

    // =========================================================================
    // Tenant Operations
    // =========================================================================

    /// Gives one vacant bed to `tenant` for a confirmed booking.
    ///
    /// When nothing is left the count stays at zero and the call still
    /// succeeds; the booking itself is not refused here.
    pub fn consume_bed(&self, listing_id: &str, tenant: &str) -> StoreResult<ListingView> {
        let listing = self.listings.get(listing_id)?;
        let (bed_number, roster) = self
            .rosters
            .update(listing_id, |r| Ok(r.book_first_vacant(tenant)))?;

        let view = ListingView::new(listing, &roster);
        match bed_number {
            Some(bed_number) => debug!(
                listing_id,
                bed_number,
                available = view.available_beds,
                "Bed taken by booking"
            ),
            None => debug!(listing_id, "Booking confirmed with no vacant bed left"),
        }
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use hostel_core::{CoreError, Rupees};

    fn new_listing(beds: u32) -> NewListing {
        NewListing {
            name: "Lakeside Bunks".to_string(),
            location: "Pune".to_string(),
            price: Rupees::new(650),
            amenities: vec!["Wi-Fi".to_string()],
            total_beds: beds,
            image: hostel_core::DEFAULT_LISTING_IMAGE.to_string(),
        }
    }

    #[test]
    fn test_seeded_views() {
        let store = HostelStore::seeded();
        let views = store.views().unwrap();
        assert_eq!(views.len(), 6);
        assert_eq!((views[0].total_beds, views[0].available_beds), (10, 4));
    }

    #[test]
    fn test_owner_sees_own_listings() {
        let store = HostelStore::seeded();
        let ids: Vec<String> = store
            .views_owned_by("owner")
            .unwrap()
            .into_iter()
            .map(|v| v.listing.id)
            .collect();
        assert_eq!(ids, ["1", "2"]);
        assert!(store.views_owned_by("tenant").unwrap().is_empty());
    }

    #[test]
    fn test_create_listing_is_fully_vacant() {
        let store = HostelStore::seeded();
        let view = store.create_listing(new_listing(12), "owner").unwrap();

        assert_eq!(view.listing.id, "7");
        assert_eq!((view.total_beds, view.available_beds), (12, 12));
        assert_eq!(store.views_owned_by("owner").unwrap().len(), 3);
        assert_eq!(store.roster("7").unwrap().summary(), "12 of 12 beds available");
    }

    #[test]
    fn test_roster_edits_flow_into_views() {
        let store = HostelStore::seeded();

        store.add_bed("1").unwrap();
        store
            .assign_tenant("1", "bed-1-7", "Alice", "9999999999")
            .unwrap();
        let view = store.view("1").unwrap();
        assert_eq!((view.total_beds, view.available_beds), (11, 4));

        let (event, _) = store.remove_tenant("1", "bed-1-1").unwrap();
        assert_eq!(event.to_string(), "Bed #1 is now vacant");
        assert_eq!(store.view("1").unwrap().available_beds, 5);
    }

    fn assert_available_is_vacant(store: &HostelStore, listing_id: &str) {
        let view = store.view(listing_id).unwrap();
        let roster = store.roster(listing_id).unwrap();
        let vacant = roster.beds().iter().filter(|b| !b.is_occupied()).count() as u32;
        assert_eq!(view.available_beds, vacant);
        assert_eq!(view.total_beds, roster.total());
    }

    #[test]
    fn test_consume_bed_floors_at_zero() {
        let store = HostelStore::seeded();
        store.create_listing(new_listing(1), "owner").unwrap();

        assert_eq!(store.consume_bed("7", "tenant").unwrap().available_beds, 0);
        let before = store.roster("7").unwrap();
        let again = store.consume_bed("7", "tenant").unwrap();
        assert_eq!(again.available_beds, 0);
        assert_eq!(store.roster("7").unwrap(), before);
    }

    #[test]
    fn test_booking_occupies_a_real_bed() {
        let store = HostelStore::seeded();
        store.consume_bed("1", "tenant").unwrap();

        let bed = store.roster("1").unwrap().get("bed-1-7").cloned().unwrap();
        assert!(bed.is_occupied());
        assert_eq!(bed.tenant_name(), Some("tenant"));
        assert_available_is_vacant(&store, "1");
    }

    #[test]
    fn test_booking_visible_to_owner_view() {
        let store = HostelStore::seeded();
        store.consume_bed("2", "tenant").unwrap();
        let owner_view = store.views_owned_by("owner").unwrap();
        assert_eq!(owner_view[1].available_beds, 1);
        assert_eq!(store.roster("2").unwrap().summary(), "1 of 15 beds available");
    }

    #[test]
    fn test_add_bed_after_bookings_adds_one_available() {
        let store = HostelStore::seeded();
        store.consume_bed("2", "tenant").unwrap();
        store.consume_bed("2", "tenant").unwrap();
        let before = store.view("2").unwrap();
        assert_eq!((before.total_beds, before.available_beds), (15, 0));

        store.add_bed("2").unwrap();
        let after = store.view("2").unwrap();
        assert_eq!(after.total_beds, before.total_beds + 1);
        assert_eq!(after.available_beds, before.available_beds + 1);
        assert_available_is_vacant(&store, "2");
    }

    #[test]
    fn test_available_matches_vacant_across_bookings_and_edits() {
        let store = HostelStore::seeded();

        store.consume_bed("1", "tenant").unwrap();
        assert_available_is_vacant(&store, "1");
        store.add_bed("1").unwrap();
        assert_available_is_vacant(&store, "1");
        assert_eq!(store.view("1").unwrap().available_beds, 4);

        store.remove_tenant("1", "bed-1-7").unwrap();
        assert_available_is_vacant(&store, "1");
        store
            .assign_tenant("1", "bed-1-11", "Alice", "9999999999")
            .unwrap();
        assert_available_is_vacant(&store, "1");
        store.consume_bed("1", "tenant").unwrap();
        assert_available_is_vacant(&store, "1");
        assert_eq!(store.view("1").unwrap().available_beds, 3);
    }

    #[test]
    fn test_bed_dialog_unknown_bed() {
        let store = HostelStore::seeded();
        assert!(matches!(
            store.bed_dialog("1", "bed-1-99"),
            Err(StoreError::Core(CoreError::BedNotFound(_)))
        ));
    }

    #[test]
    fn test_unknown_listing() {
        let store = HostelStore::seeded();
        assert!(matches!(store.view("42"), Err(StoreError::NotFound { .. })));
        assert!(store.consume_bed("42", "tenant").is_err());
    }
}
