//! # Repository Module
//!
//! In-memory repositories for Velocity Hostels.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Screen                                                                 │
//! │       │                                                                 │
//! │       │  store.rosters().update("1", |r| r.add_bed())                   │
//! │       ▼                                                                 │
//! │  RosterRepository                                                       │
//! │  ├── get(&self, listing_id)                                            │
//! │  ├── put(&self, roster)                                                │
//! │  └── update(&self, listing_id, f)   ← closure runs under write lock    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Arc<RwLock<HashMap<listing id, BedRoster>>>                           │
//! │                                                                         │
//! │  Readers always get owned clones, never references into the lock.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ListingRepository`](listing::ListingRepository) - Ordered listing catalog
//! - [`RosterRepository`](roster::RosterRepository) - Bed roster per listing

pub mod listing;
pub mod roster;
