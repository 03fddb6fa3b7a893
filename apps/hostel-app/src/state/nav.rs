//! # Navigation State
//!
//! The screen currently shown. Every response reports it.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::router::Route;

#[derive(Debug, Clone, Default)]
pub struct NavState {
    route: Arc<Mutex<Route>>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.route.lock().expect("Route mutex poisoned").clone()
    }

    pub fn go(&self, route: Route) {
        let mut current = self.route.lock().expect("Route mutex poisoned");
        if *current != route {
            debug!(from = %current, to = %route, "Navigating");
            *current = route;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_login() {
        let nav = NavState::new();
        assert_eq!(nav.current(), Route::Login);

        nav.go(Route::Search);
        assert_eq!(nav.current(), Route::Search);
    }
}
