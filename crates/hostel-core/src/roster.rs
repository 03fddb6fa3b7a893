//! # Bed Roster
//!
//! The beds of one listing and every mutation an owner can apply to them.
//!
//! ## Owner Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bed Management Operations                            │
//! │                                                                         │
//! │  Owner Action             Roster Call              Bed Change           │
//! │  ────────────             ───────────              ──────────           │
//! │                                                                         │
//! │  Click vacant bed ──────► dialog_for() ──────────► (opens Assign form)  │
//! │  Save tenant ───────────► assign_tenant() ───────► occupied + details   │
//! │                                                                         │
//! │  Click occupied bed ────► dialog_for() ──────────► (opens Remove form)  │
//! │  Confirm removal ───────► remove_tenant() ───────► vacant, no details   │
//! │                                                                         │
//! │  Add Bed ───────────────► add_bed() ─────────────► push #(count + 1)    │
//! │                                                                         │
//! │  Tenant booking ────────► book_first_vacant() ───► lowest vacant bed    │
//! │                                                     occupied by tenant  │
//! │                                                                         │
//! │  Counts (total, vacant) are read straight off the bed list.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::Bed;
use crate::validation::validate_tenant_details;

// =============================================================================
// Roster Events
// =============================================================================

/// What a successful roster mutation did. `Display` is the toast text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    TenantAssigned { bed_number: u32, tenant_name: String },
    BedVacated { bed_number: u32 },
    BedAdded { bed_number: u32 },
}

impl fmt::Display for RosterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterEvent::TenantAssigned {
                bed_number,
                tenant_name,
            } => write!(f, "Tenant {} assigned to Bed #{}", tenant_name, bed_number),
            RosterEvent::BedVacated { bed_number } => {
                write!(f, "Bed #{} is now vacant", bed_number)
            }
            RosterEvent::BedAdded { .. } => write!(f, "New bed added successfully!"),
        }
    }
}

// =============================================================================
// Bed Dialog
// =============================================================================

/// Which form opens when a bed is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BedDialogMode {
    Assign,
    Remove,
}

/// The dialog an owner sees after clicking a bed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BedDialog {
    pub bed_id: String,
    pub bed_number: u32,
    pub mode: BedDialogMode,
    /// Prefilled from the bed; empty for a vacant bed.
    pub tenant_name: String,
    pub tenant_phone: String,
}

impl BedDialog {
    pub fn title(&self) -> String {
        match self.mode {
            BedDialogMode::Assign => format!("Assign Tenant to Bed #{}", self.bed_number),
            BedDialogMode::Remove => format!("Remove Tenant from Bed #{}", self.bed_number),
        }
    }

    pub fn description(&self) -> String {
        match self.mode {
            BedDialogMode::Assign => {
                "Fill in the tenant details to assign them to this bed.".to_string()
            }
            BedDialogMode::Remove => format!(
                "This will mark the bed as vacant and remove {} as the tenant.",
                self.tenant_name
            ),
        }
    }
}

// =============================================================================
// Bed Roster
// =============================================================================

/// Ordered beds of a single listing.
///
/// ## Invariants
/// - Bed numbers run `1..=len` in insertion order
/// - A bed's tenant fields are set exactly when it is occupied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BedRoster {
    listing_id: String,
    beds: Vec<Bed>,
}

impl BedRoster {
    /// `count` vacant beds numbered from 1.
    pub fn all_vacant(listing_id: &str, count: u32) -> Self {
        BedRoster {
            listing_id: listing_id.to_string(),
            beds: (1..=count).map(|n| Bed::vacant(listing_id, n)).collect(),
        }
    }

    /// Roster of `total` beds whose first `total - available` are taken by
    /// placeholder tenants (`Tenant 1`, phone `9999999990`, ...).
    pub fn seeded(listing_id: &str, total: u32, available: u32) -> Self {
        let occupied = total.saturating_sub(available);
        let beds = (1..=total)
            .map(|n| {
                if n <= occupied {
                    Bed::occupied(
                        listing_id,
                        n,
                        format!("Tenant {}", n),
                        format!("999999999{}", n - 1),
                    )
                } else {
                    Bed::vacant(listing_id, n)
                }
            })
            .collect();

        BedRoster {
            listing_id: listing_id.to_string(),
            beds,
        }
    }

    pub fn listing_id(&self) -> &str {
        &self.listing_id
    }

    pub fn beds(&self) -> &[Bed] {
        &self.beds
    }

    pub fn get(&self, bed_id: &str) -> Option<&Bed> {
        self.beds.iter().find(|b| b.id() == bed_id)
    }

    pub fn total(&self) -> u32 {
        self.beds.len() as u32
    }

    pub fn vacant(&self) -> u32 {
        self.beds.iter().filter(|b| !b.is_occupied()).count() as u32
    }

    pub fn any_occupied(&self) -> bool {
        self.beds.iter().any(Bed::is_occupied)
    }

    /// "4 of 10 beds available".
    pub fn summary(&self) -> String {
        format!("{} of {} beds available", self.vacant(), self.total())
    }

    /// Dialog opened by clicking a bed: remove for occupied, assign for vacant.
    pub fn dialog_for(&self, bed_id: &str) -> CoreResult<BedDialog> {
        let bed = self
            .get(bed_id)
            .ok_or_else(|| CoreError::BedNotFound(bed_id.to_string()))?;

        Ok(BedDialog {
            bed_id: bed.id().to_string(),
            bed_number: bed.number(),
            mode: if bed.is_occupied() {
                BedDialogMode::Remove
            } else {
                BedDialogMode::Assign
            },
            tenant_name: bed.tenant_name().unwrap_or_default().to_string(),
            tenant_phone: bed.tenant_phone().unwrap_or_default().to_string(),
        })
    }

    /// Puts a tenant in a bed.
    ///
    /// Name and phone are trimmed; if either ends up empty the roster is left
    /// untouched and a validation error is returned. An occupied bed is
    /// refused; its tenant has to be removed first.
    ///
    /// ## Example
    /// ```rust
    /// use hostel_core::roster::BedRoster;
    ///
    /// let mut roster = BedRoster::all_vacant("1", 2);
    /// let event = roster.assign_tenant("bed-1-2", " Alice ", "9999999999").unwrap();
    /// assert_eq!(event.to_string(), "Tenant Alice assigned to Bed #2");
    /// assert_eq!(roster.vacant(), 1);
    ///
    /// assert!(roster.assign_tenant("bed-1-1", "Bob", "   ").is_err());
    /// assert_eq!(roster.vacant(), 1);
    /// ```
    pub fn assign_tenant(&mut self, bed_id: &str, name: &str, phone: &str) -> CoreResult<RosterEvent> {
        let (name, phone) = validate_tenant_details(name, phone)?;
        let bed = self.bed_mut(bed_id)?;
        if bed.is_occupied() {
            return Err(CoreError::BedOccupied {
                bed_number: bed.number(),
            });
        }

        bed.occupy(name.clone(), phone);

        Ok(RosterEvent::TenantAssigned {
            bed_number: bed.number(),
            tenant_name: name,
        })
    }

    /// Gives the lowest-numbered vacant bed to a tenant who booked it.
    ///
    /// The booking carries no phone number, so the bed's phone is left empty.
    /// Returns the bed number, or `None` with the roster untouched when every
    /// bed is taken.
    ///
    /// ## Example
    /// ```rust
    /// use hostel_core::roster::BedRoster;
    ///
    /// let mut roster = BedRoster::seeded("1", 3, 1);
    /// assert_eq!(roster.book_first_vacant("tenant"), Some(3));
    /// assert_eq!(roster.get("bed-1-3").unwrap().tenant_name(), Some("tenant"));
    /// assert_eq!(roster.book_first_vacant("tenant"), None);
    /// ```
    pub fn book_first_vacant(&mut self, tenant_name: &str) -> Option<u32> {
        let bed = self.beds.iter_mut().find(|b| !b.is_occupied())?;
        bed.occupy(tenant_name.to_string(), String::new());
        Some(bed.number())
    }

    /// Vacates a bed. Vacating an already vacant bed is not an error.
    pub fn remove_tenant(&mut self, bed_id: &str) -> CoreResult<RosterEvent> {
        let bed = self.bed_mut(bed_id)?;
        bed.vacate();

        Ok(RosterEvent::BedVacated {
            bed_number: bed.number(),
        })
    }

    /// Appends a vacant bed numbered `count + 1`.
    pub fn add_bed(&mut self) -> RosterEvent {
        let number = self.total() + 1;
        self.beds.push(Bed::vacant(&self.listing_id, number));
        RosterEvent::BedAdded { bed_number: number }
    }

    fn bed_mut(&mut self, bed_id: &str) -> CoreResult<&mut Bed> {
        self.beds
            .iter_mut()
            .find(|b| b.id() == bed_id)
            .ok_or_else(|| CoreError::BedNotFound(bed_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_seeded_roster_matches_counts() {
        let roster = BedRoster::seeded("1", 10, 4);
        assert_eq!(roster.total(), 10);
        assert_eq!(roster.vacant(), 4);
        assert_eq!(roster.summary(), "4 of 10 beds available");

        let first = &roster.beds()[0];
        assert_eq!(first.id(), "bed-1-1");
        assert_eq!(first.tenant_name(), Some("Tenant 1"));
        assert_eq!(first.tenant_phone(), Some("9999999990"));
        assert!(!roster.beds()[6].is_occupied());
    }

    #[test]
    fn test_assign_rejects_blank_fields_without_mutating() {
        let mut roster = BedRoster::all_vacant("1", 3);
        let before = roster.clone();

        let err = roster.assign_tenant("bed-1-1", "", "9999999999").unwrap_err();
        assert_eq!(err, CoreError::Validation(ValidationError::TenantDetailsMissing));
        let err = roster.assign_tenant("bed-1-1", "Alice", "  ").unwrap_err();
        assert_eq!(err, CoreError::Validation(ValidationError::TenantDetailsMissing));

        assert_eq!(roster, before);
    }

    #[test]
    fn test_assign_refuses_occupied_bed() {
        let mut roster = BedRoster::seeded("1", 3, 1);
        let before = roster.clone();

        let err = roster.assign_tenant("bed-1-2", "Alice", "9999999999").unwrap_err();
        assert_eq!(err, CoreError::BedOccupied { bed_number: 2 });
        assert_eq!(roster, before);
        assert_eq!(roster.get("bed-1-2").unwrap().tenant_name(), Some("Tenant 2"));
    }

    #[test]
    fn test_assign_stores_trimmed_details() {
        let mut roster = BedRoster::all_vacant("1", 3);
        roster.assign_tenant("bed-1-3", "  Alice  ", " 9999999999 ").unwrap();

        let bed = roster.get("bed-1-3").unwrap();
        assert!(bed.is_occupied());
        assert_eq!(bed.tenant_name(), Some("Alice"));
        assert_eq!(bed.tenant_phone(), Some("9999999999"));
    }

    #[test]
    fn test_assign_then_remove_round_trips() {
        let mut roster = BedRoster::all_vacant("1", 2);
        let pristine = roster.get("bed-1-1").unwrap().clone();

        roster.assign_tenant("bed-1-1", "Alice", "9999999999").unwrap();
        let event = roster.remove_tenant("bed-1-1").unwrap();

        assert_eq!(event.to_string(), "Bed #1 is now vacant");
        let bed = roster.get("bed-1-1").unwrap();
        assert_eq!(bed, &pristine);
        assert_eq!(bed.tenant_name(), None);
        assert_eq!(bed.tenant_phone(), None);
    }

    #[test]
    fn test_add_bed_grows_total_and_vacant() {
        let mut roster = BedRoster::seeded("2", 15, 2);
        let event = roster.add_bed();

        assert_eq!(event, RosterEvent::BedAdded { bed_number: 16 });
        assert_eq!(roster.total(), 16);
        assert_eq!(roster.vacant(), 3);
        assert_eq!(roster.beds().last().unwrap().id(), "bed-2-16");
    }

    #[test]
    fn test_vacant_count_tracks_every_mutation() {
        let mut roster = BedRoster::seeded("1", 5, 2);
        let check = |r: &BedRoster| {
            let manual = r.beds().iter().filter(|b| !b.is_occupied()).count() as u32;
            assert_eq!(r.vacant(), manual);
        };

        roster.assign_tenant("bed-1-4", "A", "1").unwrap();
        check(&roster);
        roster.remove_tenant("bed-1-1").unwrap();
        check(&roster);
        roster.add_bed();
        check(&roster);
        assert_eq!(roster.vacant(), 3);
    }

    #[test]
    fn test_booking_takes_lowest_vacant_bed() {
        let mut roster = BedRoster::seeded("2", 4, 2);
        roster.remove_tenant("bed-2-1").unwrap();

        assert_eq!(roster.book_first_vacant("tenant"), Some(1));
        let bed = roster.get("bed-2-1").unwrap();
        assert!(bed.is_occupied());
        assert_eq!(bed.tenant_name(), Some("tenant"));
        assert_eq!(bed.tenant_phone(), Some(""));
        assert_eq!(roster.vacant(), 2);
    }

    #[test]
    fn test_booking_full_roster_changes_nothing() {
        let mut roster = BedRoster::seeded("6", 3, 0);
        let before = roster.clone();
        assert_eq!(roster.book_first_vacant("tenant"), None);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_add_bed_after_booking_still_adds_one() {
        let mut roster = BedRoster::seeded("2", 15, 2);
        roster.book_first_vacant("tenant");
        roster.book_first_vacant("tenant");
        assert_eq!(roster.vacant(), 0);

        roster.add_bed();
        assert_eq!(roster.total(), 16);
        assert_eq!(roster.vacant(), 1);
        assert_eq!(roster.book_first_vacant("tenant"), Some(16));
    }

    #[test]
    fn test_unknown_bed() {
        let mut roster = BedRoster::all_vacant("1", 1);
        assert_eq!(
            roster.remove_tenant("bed-9-9"),
            Err(CoreError::BedNotFound("bed-9-9".to_string()))
        );
        assert!(roster.dialog_for("nope").is_err());
    }

    #[test]
    fn test_dialog_mode_follows_occupancy() {
        let roster = BedRoster::seeded("1", 2, 1);

        let remove = roster.dialog_for("bed-1-1").unwrap();
        assert_eq!(remove.mode, BedDialogMode::Remove);
        assert_eq!(remove.tenant_name, "Tenant 1");
        assert_eq!(remove.title(), "Remove Tenant from Bed #1");

        let assign = roster.dialog_for("bed-1-2").unwrap();
        assert_eq!(assign.mode, BedDialogMode::Assign);
        assert!(assign.tenant_name.is_empty());
        assert_eq!(assign.title(), "Assign Tenant to Bed #2");
    }
}
