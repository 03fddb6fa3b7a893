//! # Domain Types
//!
//! Core domain types used throughout Velocity Hostels.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                         │
//! │  │    Listing      │ 1    N │      Bed        │                         │
//! │  │  ─────────────  │───────►│  ─────────────  │                         │
//! │  │  id             │        │  id             │                         │
//! │  │  name, location │        │  number (1..)   │                         │
//! │  │  price (₹)      │        │  is_occupied    │                         │
//! │  │  amenities      │        │  tenant_name?   │                         │
//! │  │  owner?         │        │  tenant_phone?  │                         │
//! │  └─────────────────┘        └─────────────────┘                         │
//! │           │                          │                                  │
//! │           └──────────┬───────────────┘                                  │
//! │                      ▼                                                  │
//! │            ┌─────────────────┐                                          │
//! │            │  ListingView    │  listing + counts derived from roster   │
//! │            │  total_beds     │                                          │
//! │            │  available_beds │                                          │
//! │            └─────────────────┘                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Bed Counts Are Never Stored
//! A listing does not carry `total_beds`/`available_beds`. Both are computed
//! from its roster whenever a [`ListingView`] is built, so they cannot drift
//! from the beds they describe.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::price::Rupees;
use crate::roster::BedRoster;
use crate::session::Role;

/// Image used when the owner leaves the image field blank.
pub const DEFAULT_LISTING_IMAGE: &str =
    "https://images.unsplash.com/photo-1590073242678-70ee3fc28f8e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1074&q=80";

/// Amenity list given to a new listing when the owner enters none.
pub const FALLBACK_AMENITY: &str = "Basic";

// =============================================================================
// Listing
// =============================================================================

/// A hostel property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Listing {
    pub id: String,

    pub name: String,

    /// Free-text location, matched exactly by the location filter.
    pub location: String,

    /// Nightly price.
    #[ts(as = "u32")]
    pub price: Rupees,

    /// Ordered amenity tags ("Wi-Fi", "AC", ...).
    pub amenities: Vec<String>,

    pub image: String,

    /// Username of the owner who manages this listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Listing {
    /// Case-insensitive substring match against name, location or any amenity.
    ///
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
            || self
                .amenities
                .iter()
                .any(|a| a.to_lowercase().contains(needle))
    }

    /// Exact tag membership.
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    pub fn is_owned_by(&self, username: &str) -> bool {
        self.owner.as_deref() == Some(username)
    }
}

// =============================================================================
// Listing View
// =============================================================================

/// A listing together with bed counts computed from its roster.
///
/// This is what screens render and what the search filter runs over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ListingView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub listing: Listing,

    pub total_beds: u32,

    pub available_beds: u32,
}

impl ListingView {
    /// Builds the view; available beds are the roster's vacant beds.
    pub fn new(listing: Listing, roster: &BedRoster) -> Self {
        let total_beds = roster.total();
        let available_beds = roster.vacant();
        ListingView {
            listing,
            total_beds,
            available_beds,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.listing.id
    }

    #[inline]
    pub fn has_vacancy(&self) -> bool {
        self.available_beds > 0
    }

    /// "4 beds available" / "1 bed available".
    pub fn availability_label(&self) -> String {
        let plural = if self.available_beds == 1 { "" } else { "s" };
        format!("{} bed{} available", self.available_beds, plural)
    }

    /// Label of the card's action button for the given viewer.
    pub fn action_label(&self, viewer: Role) -> &'static str {
        match viewer {
            Role::Owner => "Manage Hostel",
            Role::Tenant if self.has_vacancy() => "Book Now",
            Role::Tenant => "View Details",
        }
    }
}

impl AsRef<Listing> for ListingView {
    fn as_ref(&self) -> &Listing {
        &self.listing
    }
}

// =============================================================================
// Bed
// =============================================================================

/// One bed in a listing's roster.
///
/// Tenant fields are `Some` exactly when the bed is occupied. The fields are
/// private so that only [`BedRoster`] can change occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Bed {
    id: String,

    /// 1-based ordinal, unique within the listing.
    number: u32,

    is_occupied: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    tenant_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    tenant_phone: Option<String>,
}

impl Bed {
    /// Canonical bed id: `bed-{listing}-{number}`.
    pub fn id_for(listing_id: &str, number: u32) -> String {
        format!("bed-{}-{}", listing_id, number)
    }

    pub fn vacant(listing_id: &str, number: u32) -> Self {
        Bed {
            id: Bed::id_for(listing_id, number),
            number,
            is_occupied: false,
            tenant_name: None,
            tenant_phone: None,
        }
    }

    pub fn occupied(
        listing_id: &str,
        number: u32,
        tenant_name: impl Into<String>,
        tenant_phone: impl Into<String>,
    ) -> Self {
        Bed {
            id: Bed::id_for(listing_id, number),
            number,
            is_occupied: true,
            tenant_name: Some(tenant_name.into()),
            tenant_phone: Some(tenant_phone.into()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn is_occupied(&self) -> bool {
        self.is_occupied
    }

    pub fn tenant_name(&self) -> Option<&str> {
        self.tenant_name.as_deref()
    }

    pub fn tenant_phone(&self) -> Option<&str> {
        self.tenant_phone.as_deref()
    }

    pub(crate) fn occupy(&mut self, name: String, phone: String) {
        self.is_occupied = true;
        self.tenant_name = Some(name);
        self.tenant_phone = Some(phone);
    }

    pub(crate) fn vacate(&mut self) {
        self.is_occupied = false;
        self.tenant_name = None;
        self.tenant_phone = None;
    }
}
