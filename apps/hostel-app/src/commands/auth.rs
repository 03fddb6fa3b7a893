//! # Session & Navigation Commands
//!
//! Login, logout, and moving between screens.
//!
//! ## Login Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login { username, password }                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LoginGateway::login (simulated delay)                                  │
//! │       │                                                                 │
//! │       ├── match ──► persist session ──► role home ──► "Logged in..."    │
//! │       │                                                                 │
//! │       └── no match ──► nothing stored ──► "Invalid username or ..."     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hostel_core::Session;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiResult;
use crate::gateway::LoginGateway;
use crate::router::Route;
use crate::state::{NavState, NoticeState, OwnerScreenState, SessionState, TenantScreenState};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginArgs {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateArgs {
    pub path: String,
}

/// Where a navigation landed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub requested: String,
    pub route: Route,
    pub redirected: bool,
}

/// Signs in through the login gateway.
pub async fn login<L: LoginGateway>(
    sessions: &SessionState,
    nav: &NavState,
    notices: &NoticeState,
    tenant: &TenantScreenState,
    gateway: &L,
    args: LoginArgs,
) -> ApiResult<Session> {
    debug!(username = %args.username, "login command");

    let session = gateway
        .login(&args.username, &args.password)
        .await
        .inspect_err(|_| warn!(username = %args.username, "Login failed"))?;

    sessions.sign_in(&session)?;
    tenant.with_screen_mut(|s| s.reset());
    nav.go(Route::home(session.role));
    notices.success("Logged in successfully!");
    Ok(session)
}

/// Signs out and returns to the login screen.
pub fn logout(
    sessions: &SessionState,
    nav: &NavState,
    notices: &NoticeState,
    owner: &OwnerScreenState,
    tenant: &TenantScreenState,
) -> ApiResult<()> {
    debug!("logout command");
    sessions.sign_out()?;
    owner.with_screen_mut(|s| s.close());
    tenant.with_screen_mut(|s| s.reset());
    nav.go(Route::Login);
    notices.success("Logged out successfully");
    Ok(())
}

/// "Forgot password?" link. No account lookup happens.
pub fn forgot_password(notices: &NoticeState) {
    debug!("forgot_password command");
    notices.info("Password reset link has been sent to your email.");
}

pub fn get_session(sessions: &SessionState) -> Option<Session> {
    debug!("get_session command");
    sessions.current_or_signed_out()
}

/// Visits a path, applying the session gate.
///
/// The bed grid needs a hostel picked first; without one the owner lands
/// on the dashboard.
pub fn navigate(
    sessions: &SessionState,
    nav: &NavState,
    owner: &OwnerScreenState,
    args: NavigateArgs,
) -> Navigation {
    debug!(path = %args.path, "navigate command");
    let requested = Route::parse(&args.path);
    let mut route = requested.clone().resolve(sessions.current_or_signed_out().as_ref());

    if route == Route::ManageBeds && owner.with_screen(|s| s.managed_listing.is_none()) {
        info!("No hostel selected for bed management, showing dashboard");
        route = Route::OwnerDashboard;
    }

    nav.go(route.clone());
    Navigation {
        redirected: route != requested,
        requested: args.path,
        route,
    }
}
