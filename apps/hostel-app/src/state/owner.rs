//! # Owner Screen State
//!
//! What the owner has open: the hostel whose beds are being managed and the
//! bed dialog, if any.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  /hostel-owner ──manage_listing──► /manage-beds ──open_bed──► dialog    │
//! │        ▲                               │                       │        │
//! │        │                               │ add_bed               │ assign │
//! │        │                               ▼                       │ remove │
//! │        └──close_bed_management──── bed grid ◄──────────────────┘        │
//! │                                                                         │
//! │  A failed assign keeps the dialog open with what was typed.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use hostel_core::BedDialog;

/// Owner-side UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerScreen {
    /// Listing shown on the bed management screen.
    pub managed_listing: Option<String>,

    /// Open bed dialog.
    pub dialog: Option<BedDialog>,
}

impl OwnerScreen {
    pub fn manage(&mut self, listing_id: &str) {
        self.managed_listing = Some(listing_id.to_string());
        self.dialog = None;
    }

    pub fn close(&mut self) {
        self.managed_listing = None;
        self.dialog = None;
    }
}

/// Thread-safe wrapper for the owner screen.
#[derive(Debug, Clone, Default)]
pub struct OwnerScreenState {
    screen: Arc<Mutex<OwnerScreen>>,
}

impl OwnerScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_screen<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OwnerScreen) -> R,
    {
        let screen = self.screen.lock().expect("Owner screen mutex poisoned");
        f(&screen)
    }

    pub fn with_screen_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OwnerScreen) -> R,
    {
        let mut screen = self.screen.lock().expect("Owner screen mutex poisoned");
        f(&mut screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_core::BedDialogMode;

    #[test]
    fn test_manage_resets_dialog() {
        let state = OwnerScreenState::new();
        state.with_screen_mut(|s| {
            s.manage("1");
            s.dialog = Some(BedDialog {
                bed_id: "bed-1-7".into(),
                bed_number: 7,
                mode: BedDialogMode::Assign,
                tenant_name: String::new(),
                tenant_phone: String::new(),
            });
            s.manage("2");
        });

        state.with_screen(|s| {
            assert_eq!(s.managed_listing.as_deref(), Some("2"));
            assert!(s.dialog.is_none());
        });
    }
}
