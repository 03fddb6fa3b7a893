//! # hostel-store: State Layer for Velocity Hostels
//!
//! This crate owns everything that outlives a single screen: the listing
//! catalog, the bed rosters, and the persisted session.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Velocity Hostels Data Flow                          │
//! │                                                                         │
//! │  App command (assign_tenant)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  hostel-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  HostelStore  │    │  Repositories │    │ SessionStore │  │   │
//! │  │   │  (store.rs)   │    │               │    │ (session.rs) │  │   │
//! │  │   │               │    │ ListingRepo   │    │              │  │   │
//! │  │   │ views         │◄───│ RosterRepo    │    │ MemoryKv     │  │   │
//! │  │   │ owner ops     │    │               │    │ FileKv       │  │   │
//! │  │   │ bookings      │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  hostel-core (rules, validation, seed data)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Cross-repository operations and derived views
//! - [`repository`] - Listing and roster repositories
//! - [`session`] - Session persistence over a key-value backend
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use hostel_store::HostelStore;
//!
//! let store = HostelStore::seeded();
//! store.add_bed("1").unwrap();
//!
//! let view = store.view("1").unwrap();
//! assert_eq!(view.total_beds, 11);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod session;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use session::{FileKv, KeyValueStore, MemoryKv, SessionStore};
pub use store::HostelStore;

// Repository re-exports for convenience
pub use repository::listing::ListingRepository;
pub use repository::roster::RosterRepository;
