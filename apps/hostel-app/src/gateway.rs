//! # Network Gateways
//!
//! Ports for the two calls that would cross the network in a deployed
//! build: signing in and submitting a booking. The shipped implementations
//! only wait, then answer locally.
//!
//! ## Where the Delay Lives
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login command                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LoginGateway::login ──► SimulatedLogin: sleep(1000 ms) + account check │
//! │                                                                         │
//! │  confirm_booking command                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BookingGateway::submit ──► SimulatedBooking: sleep(1500 ms)            │
//! │                                                                         │
//! │  Tests swap in zero delays or failing gateways; nothing else changes.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;
use std::time::Duration;

use hostel_core::session::authenticate;
use hostel_core::{CoreResult, Session};
use tracing::debug;

use crate::error::ApiResult;

/// Credential check.
pub trait LoginGateway: Send + Sync {
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = CoreResult<Session>> + Send;
}

/// Booking submission for one bed at a listing.
pub trait BookingGateway: Send + Sync {
    fn submit(&self, listing_id: &str) -> impl Future<Output = ApiResult<()>> + Send;
}

/// Checks the demo accounts after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLogin {
    delay: Duration,
}

impl SimulatedLogin {
    pub fn new(delay: Duration) -> Self {
        SimulatedLogin { delay }
    }
}

impl LoginGateway for SimulatedLogin {
    async fn login(&self, username: &str, password: &str) -> CoreResult<Session> {
        debug!(username, delay_ms = self.delay.as_millis() as u64, "Simulated login");
        tokio::time::sleep(self.delay).await;
        authenticate(username, password)
    }
}

/// Accepts every booking after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedBooking {
    delay: Duration,
}

impl SimulatedBooking {
    pub fn new(delay: Duration) -> Self {
        SimulatedBooking { delay }
    }
}

impl BookingGateway for SimulatedBooking {
    async fn submit(&self, listing_id: &str) -> ApiResult<()> {
        debug!(listing_id, delay_ms = self.delay.as_millis() as u64, "Simulated booking");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
