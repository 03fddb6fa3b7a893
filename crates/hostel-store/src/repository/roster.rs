//! # Roster Repository
//!
//! One [`BedRoster`] per listing id.
//!
//! Re-entering bed management for a listing reads back whatever the last
//! write left here, so edits survive navigating away and back within a
//! session.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use hostel_core::{BedRoster, CoreResult};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Repository for bed rosters, keyed by listing id.
#[derive(Debug, Clone, Default)]
pub struct RosterRepository {
    rosters: Arc<RwLock<HashMap<String, BedRoster>>>,
}

impl RosterRepository {
    pub fn new(rosters: impl IntoIterator<Item = BedRoster>) -> Self {
        let map = rosters
            .into_iter()
            .map(|r| (r.listing_id().to_string(), r))
            .collect();

        RosterRepository {
            rosters: Arc::new(RwLock::new(map)),
        }
    }

    /// Snapshot of a listing's roster.
    pub fn get(&self, listing_id: &str) -> StoreResult<BedRoster> {
        self.rosters
            .read()
            .expect("Roster lock poisoned")
            .get(listing_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Bed roster", listing_id))
    }

    /// Replaces (or creates) the roster for its listing. Last writer wins.
    pub fn put(&self, roster: BedRoster) {
        debug!(listing_id = %roster.listing_id(), beds = roster.total(), "Storing roster");
        self.rosters
            .write()
            .expect("Roster lock poisoned")
            .insert(roster.listing_id().to_string(), roster);
    }

    /// Runs a roster mutation under the write lock.
    ///
    /// If `f` fails, the roster is left as it was: every [`BedRoster`]
    /// mutation validates before it writes.
    pub fn update<T, F>(&self, listing_id: &str, f: F) -> StoreResult<(T, BedRoster)>
    where
        F: FnOnce(&mut BedRoster) -> CoreResult<T>,
    {
        let mut rosters = self.rosters.write().expect("Roster lock poisoned");
        let roster = rosters
            .get_mut(listing_id)
            .ok_or_else(|| StoreError::not_found("Bed roster", listing_id))?;

        let out = f(roster)?;
        Ok((out, roster.clone()))
    }
}
