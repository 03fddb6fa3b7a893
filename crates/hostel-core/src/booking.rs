//! # Booking Flow
//!
//! The tenant's two-step booking dialog as an explicit state machine.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            select                book_now                confirm        │
//! │  Browsing ────────► DetailsShown ────────► ConfirmPending ───────► Booked│
//! │     ▲                 │     ▲   (beds > 0)     │                    │   │
//! │     │     dismiss     │     └──── cancel ──────┘                    │   │
//! │     ├─────────────────┘                                             │   │
//! │     └───────────────── dismiss (from any state) ────────────────────┘   │
//! │                                                                         │
//! │  Booked ── select ──► DetailsShown   (pick another listing)            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The machine only tracks dialog state. Consuming the bed is the store's
//! job once the booking port reports success; see [`BookingFlow::complete`].

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::ListingView;

/// Toast shown after a booking goes through.
pub const BOOKING_CONFIRMED: &str = "Booking confirmed! Check your email for details.";

/// Dialog state of the tenant screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum BookingState {
    #[default]
    Browsing,
    DetailsShown {
        listing_id: String,
    },
    ConfirmPending {
        listing_id: String,
    },
    Booked {
        listing_id: String,
    },
}

impl BookingState {
    /// Listing the open dialog is about, if any.
    pub fn listing_id(&self) -> Option<&str> {
        match self {
            BookingState::Browsing => None,
            BookingState::DetailsShown { listing_id }
            | BookingState::ConfirmPending { listing_id }
            | BookingState::Booked { listing_id } => Some(listing_id),
        }
    }
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingState::Browsing => write!(f, "browsing"),
            BookingState::DetailsShown { .. } => write!(f, "showing details"),
            BookingState::ConfirmPending { .. } => write!(f, "awaiting confirmation"),
            BookingState::Booked { .. } => write!(f, "booked"),
        }
    }
}

/// Owns a [`BookingState`] and enforces the legal transitions.
///
/// Every method either moves to the next state or returns an error and
/// leaves the state exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFlow {
    state: BookingState,
}

impl BookingFlow {
    pub fn new() -> Self {
        BookingFlow::default()
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    /// Opens the details dialog for a listing.
    pub fn select(&mut self, listing_id: &str) -> CoreResult<()> {
        match self.state {
            BookingState::Browsing | BookingState::Booked { .. } => {
                self.state = BookingState::DetailsShown {
                    listing_id: listing_id.to_string(),
                };
                Ok(())
            }
            _ => Err(self.reject("select a hostel")),
        }
    }

    /// "Book Now" inside the details dialog.
    ///
    /// `listing` must be the current view of the selected listing; the guard
    /// reads its available count.
    ///
    /// ## Example
    /// ```rust
    /// use hostel_core::booking::{BookingFlow, BookingState};
    /// use hostel_core::roster::BedRoster;
    /// use hostel_core::seed;
    /// use hostel_core::types::ListingView;
    ///
    /// let full = seed::listings().pop().unwrap(); // Urban Living, 0 beds free
    /// let view = ListingView::new(full, &BedRoster::seeded("6", 18, 0));
    ///
    /// let mut flow = BookingFlow::new();
    /// flow.select(view.id()).unwrap();
    /// assert!(flow.book_now(&view).is_err());
    /// assert!(matches!(flow.state(), BookingState::DetailsShown { .. }));
    /// ```
    pub fn book_now(&mut self, listing: &ListingView) -> CoreResult<()> {
        let listing_id = match &self.state {
            BookingState::DetailsShown { listing_id } if listing_id == listing.id() => {
                listing_id.clone()
            }
            _ => return Err(self.reject("book")),
        };

        if !listing.has_vacancy() {
            return Err(CoreError::NoBedsAvailable { listing_id });
        }

        self.state = BookingState::ConfirmPending { listing_id };
        Ok(())
    }

    /// Backs out of the confirmation step into the details dialog.
    pub fn cancel(&mut self) -> CoreResult<()> {
        match &self.state {
            BookingState::ConfirmPending { listing_id } => {
                self.state = BookingState::DetailsShown {
                    listing_id: listing_id.clone(),
                };
                Ok(())
            }
            _ => Err(self.reject("cancel")),
        }
    }

    /// Listing awaiting confirmation. Call before submitting to the booking
    /// port; the state does not change until [`complete`](Self::complete).
    pub fn pending(&self) -> CoreResult<&str> {
        match &self.state {
            BookingState::ConfirmPending { listing_id } => Ok(listing_id),
            _ => Err(self.reject("confirm booking")),
        }
    }

    /// Marks the pending booking as done.
    pub fn complete(&mut self) -> CoreResult<String> {
        let listing_id = self.pending()?.to_string();
        self.state = BookingState::Booked {
            listing_id: listing_id.clone(),
        };
        Ok(listing_id)
    }

    /// Closes whatever is open.
    pub fn dismiss(&mut self) {
        self.state = BookingState::Browsing;
    }

    fn reject(&self, action: &str) -> CoreError {
        CoreError::InvalidTransition {
            state: self.state.to_string(),
            action: action.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::BedRoster;
    use crate::seed;

    fn view(id: &str, available: u32) -> ListingView {
        let listing = seed::listings()
            .into_iter()
            .find(|l| l.id == id)
            .unwrap();
        ListingView::new(listing, &BedRoster::seeded(id, 10, available))
    }

    #[test]
    fn test_happy_path() {
        let listing = view("1", 4);
        let mut flow = BookingFlow::new();

        flow.select("1").unwrap();
        flow.book_now(&listing).unwrap();
        assert_eq!(flow.pending().unwrap(), "1");
        assert_eq!(flow.complete().unwrap(), "1");
        assert_eq!(
            flow.state(),
            &BookingState::Booked {
                listing_id: "1".to_string()
            }
        );

        // another booking straight away
        flow.select("2").unwrap();
        assert_eq!(flow.state().listing_id(), Some("2"));
    }

    #[test]
    fn test_book_now_guard_keeps_details_open() {
        let listing = view("6", 0);
        let mut flow = BookingFlow::new();
        flow.select("6").unwrap();

        let err = flow.book_now(&listing).unwrap_err();
        assert_eq!(
            err,
            CoreError::NoBedsAvailable {
                listing_id: "6".to_string()
            }
        );
        assert_eq!(
            flow.state(),
            &BookingState::DetailsShown {
                listing_id: "6".to_string()
            }
        );
    }

    #[test]
    fn test_cancel_returns_to_details() {
        let listing = view("1", 4);
        let mut flow = BookingFlow::new();
        flow.select("1").unwrap();
        flow.book_now(&listing).unwrap();
        flow.cancel().unwrap();
        assert!(matches!(flow.state(), BookingState::DetailsShown { .. }));
    }

    #[test]
    fn test_dismiss_from_anywhere() {
        let listing = view("1", 4);
        let mut flow = BookingFlow::new();
        flow.select("1").unwrap();
        flow.book_now(&listing).unwrap();
        flow.dismiss();
        assert_eq!(flow.state(), &BookingState::Browsing);
    }

    #[test]
    fn test_illegal_transitions_leave_state_alone() {
        let mut flow = BookingFlow::new();
        assert!(flow.cancel().is_err());
        assert!(flow.complete().is_err());
        assert!(flow.book_now(&view("1", 4)).is_err());
        assert_eq!(flow.state(), &BookingState::Browsing);

        flow.select("1").unwrap();
        // wrong listing
        assert!(flow.book_now(&view("2", 4)).is_err());
        // cannot open a second details dialog on top of the first
        let err = flow.select("2").unwrap_err();
        assert_eq!(err.to_string(), "Cannot select a hostel while showing details");
        assert_eq!(flow.state().listing_id(), Some("1"));
    }

    #[test]
    fn test_state_json_is_tagged() {
        let state = BookingState::ConfirmPending {
            listing_id: "3".to_string(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({"state": "confirm_pending", "listing_id": "3"}));
    }
}
