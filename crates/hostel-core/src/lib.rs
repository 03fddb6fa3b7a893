//! # hostel-core: Pure Business Logic for Velocity Hostels
//!
//! This crate holds the rules of the hostel platform as plain functions and
//! value types, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Velocity Hostels Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (browser)                           │   │
//! │  │   Login ──► Owner dashboard / Bed grid ──► Tenant search       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    hostel-app (screens, routing)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hostel-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  roster  │ │  filter  │ │ booking  │ │ session  │          │   │
//! │  │   │ assign   │ │ query    │ │ state    │ │ accounts │          │   │
//! │  │   │ remove   │ │ location │ │ machine  │ │ roles    │          │   │
//! │  │   │ add bed  │ │ price    │ │          │ │          │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO STORAGE • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    hostel-store                                 │   │
//! │  │        Listing catalog, bed rosters, session key-value store    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Listing, Bed, and the derived ListingView
//! - [`price`] - Nightly prices and the search price band
//! - [`roster`] - Bed roster mutations
//! - [`filter`] - Search predicates
//! - [`booking`] - Tenant booking state machine
//! - [`session`] - Roles, sessions, demo accounts
//! - [`notice`] - Toast messages
//! - [`validation`] - Form validation
//! - [`seed`] - Static seed catalog
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use hostel_core::roster::BedRoster;
//! use hostel_core::types::ListingView;
//! use hostel_core::seed;
//!
//! let listing = seed::listings().remove(0);
//! let mut roster = seed::rosters().remove(0);
//!
//! roster.add_bed();
//! let view = ListingView::new(listing, &roster);
//! assert_eq!((view.total_beds, view.available_beds), (11, 5));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod booking;
pub mod error;
pub mod filter;
pub mod notice;
pub mod price;
pub mod roster;
pub mod seed;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use booking::{BookingFlow, BookingState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{filter_listings, SearchFilters};
pub use notice::{Notice, NoticeLevel};
pub use price::{PriceRange, Rupees};
pub use roster::{BedDialog, BedDialogMode, BedRoster, RosterEvent};
pub use session::{Role, Session};
pub use types::*;
