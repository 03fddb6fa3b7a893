//! # Tenant Screen State
//!
//! Search criteria and the booking dialog. Both survive moving between the
//! tenant dashboard and the search screen, and reset on logout.

use std::sync::{Arc, Mutex};

use hostel_core::{BookingFlow, PriceRange, SearchFilters};

/// Tenant-side UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantScreen {
    pub filters: SearchFilters,
    pub booking: BookingFlow,
    initial_price_range: PriceRange,
}

impl TenantScreen {
    /// Fresh screen whose price slider starts at `price_range`.
    pub fn new(price_range: PriceRange) -> Self {
        let mut filters = SearchFilters::default();
        filters.price_range = price_range;
        TenantScreen {
            filters,
            booking: BookingFlow::new(),
            initial_price_range: price_range,
        }
    }

    /// Resets every criterion, including the price slider.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.filters.price_range = self.initial_price_range;
    }

    pub fn reset(&mut self) {
        *self = TenantScreen::new(self.initial_price_range);
    }
}

impl Default for TenantScreen {
    fn default() -> Self {
        TenantScreen::new(PriceRange::default())
    }
}

/// Thread-safe wrapper for the tenant screen.
#[derive(Debug, Clone, Default)]
pub struct TenantScreenState {
    screen: Arc<Mutex<TenantScreen>>,
}

impl TenantScreenState {
    pub fn new(price_range: PriceRange) -> Self {
        TenantScreenState {
            screen: Arc::new(Mutex::new(TenantScreen::new(price_range))),
        }
    }

    pub fn with_screen<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&TenantScreen) -> R,
    {
        let screen = self.screen.lock().expect("Tenant screen mutex poisoned");
        f(&screen)
    }

    pub fn with_screen_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut TenantScreen) -> R,
    {
        let mut screen = self.screen.lock().expect("Tenant screen mutex poisoned");
        f(&mut screen)
    }
}
