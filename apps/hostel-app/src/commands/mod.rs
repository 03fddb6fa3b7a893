//! # Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (envelope, dispatcher, shared types)
//! ├── auth.rs     ◄─── Login, logout, navigation
//! ├── owner.rs    ◄─── Owner dashboard, add hostel, bed management
//! ├── tenant.rs   ◄─── Tenant dashboard, search, booking
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Frontend (one JSON object per line)                                    │
//! │  ─────────────────────────────────                                      │
//! │  {"command": "assign_tenant",                                           │
//! │   "args": {"tenantName": "Alice", "tenantPhone": "9999999999"}}         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  App::dispatch                                                          │
//! │  ─────────────                                                          │
//! │  match "assign_tenant" ──► owner::assign_tenant(                        │
//! │      &store, &sessions,     ◄── Only the state it needs                 │
//! │      &config, &notices,                                                 │
//! │      &owner_screen,                                                     │
//! │      args,                  ◄── Parsed from "args"                      │
//! │  ) -> Result<BedManagement, ApiError>                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  {"ok": true, "data": {...}, "route": "/manage-beds",                   │
//! │   "notifications": [{"level": "success",                                │
//! │                      "message": "Tenant Alice assigned to Bed #7"}]}    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failures
//! - Errors become an `error` field and an error toast.
//! - `UNAUTHORIZED` is the exception: no toast, the route moves to login.
//! - Unknown commands and bad arguments answer `VALIDATION_ERROR`; the
//!   loop keeps reading.

pub mod auth;
pub mod config;
pub mod owner;
pub mod tenant;

use hostel_core::{ListingView, Notice, Role};
use hostel_store::HostelStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::gateway::{BookingGateway, LoginGateway, SimulatedBooking, SimulatedLogin};
use crate::router::Route;
use crate::state::{
    AppConfig, NavState, NoticeState, OwnerScreenState, SessionState, TenantScreenState,
};

// =============================================================================
// Shared Response Types
// =============================================================================

/// A hostel card as rendered in any listing grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingCard {
    #[serde(flatten)]
    pub view: ListingView,
    /// "₹500"
    pub price_label: String,
    /// "4 beds available"
    pub availability_label: String,
    /// "Manage Hostel" / "Book Now" / "View Details"
    pub action_label: &'static str,
}

impl ListingCard {
    pub fn new(view: ListingView, viewer: Role, config: &AppConfig) -> Self {
        ListingCard {
            price_label: config.format_price(view.listing.price),
            availability_label: view.availability_label(),
            action_label: view.action_label(viewer),
            view,
        }
    }
}

// =============================================================================
// Envelope
// =============================================================================

/// One inbound command.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub command: String,
    #[serde(default)]
    pub args: Value,
}

/// One outbound reply.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Screen showing after the command.
    pub route: Route,
    pub notifications: Vec<Notice>,
}

fn parse_args<T: DeserializeOwned>(args: Value) -> ApiResult<T> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(args)
        .map_err(|e| ApiError::validation(format!("Invalid arguments: {}", e)))
}

fn reply<T: Serialize>(value: T) -> ApiResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal(format!("Response encoding failed: {}", e)))
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Every piece of state, plus the two network gateways.
///
/// Commands are handled one at a time; a pending login or booking delay
/// holds up the next command.
#[derive(Debug)]
pub struct App<L = SimulatedLogin, B = SimulatedBooking> {
    config: AppConfig,
    store: HostelStore,
    sessions: SessionState,
    nav: NavState,
    notices: NoticeState,
    owner: OwnerScreenState,
    tenant: TenantScreenState,
    login_gateway: L,
    booking_gateway: B,
}

impl App {
    /// Seeded store with the simulated gateways timed from `config`.
    pub fn from_config(config: AppConfig, sessions: SessionState) -> Self {
        let login = SimulatedLogin::new(config.login_delay());
        let booking = SimulatedBooking::new(config.booking_delay());
        App::new(config, HostelStore::seeded(), sessions, login, booking)
    }
}

impl<L: LoginGateway, B: BookingGateway> App<L, B> {
    pub fn new(
        config: AppConfig,
        store: HostelStore,
        sessions: SessionState,
        login_gateway: L,
        booking_gateway: B,
    ) -> Self {
        let tenant = TenantScreenState::new(config.default_price_range);
        let nav = NavState::new();
        nav.go(Route::Login.resolve(sessions.current_or_signed_out().as_ref()));

        App {
            config,
            store,
            sessions,
            nav,
            notices: NoticeState::new(),
            owner: OwnerScreenState::new(),
            tenant,
            login_gateway,
            booking_gateway,
        }
    }

    pub fn route(&self) -> Route {
        self.nav.current()
    }

    pub fn store(&self) -> &HostelStore {
        &self.store
    }

    /// Handles one raw input line.
    pub async fn handle_line(&self, line: &str) -> Response {
        match serde_json::from_str::<Envelope>(line) {
            Ok(envelope) => self.dispatch(envelope).await,
            Err(e) => {
                warn!(error = %e, "Malformed command envelope");
                self.respond(Err(ApiError::validation(format!(
                    "Malformed command: {}",
                    e
                ))))
            }
        }
    }

    /// Runs a command and packs its outcome, toasts and route.
    pub async fn dispatch(&self, envelope: Envelope) -> Response {
        debug!(command = %envelope.command, "Dispatching");
        let result = self.run(&envelope.command, envelope.args).await;

        if let Err(err) = &result {
            if err.is_user_facing() {
                self.notices.error(err.message.clone());
            } else {
                debug!(command = %envelope.command, reason = %err.message, "Redirecting to login");
                self.nav.go(Route::Login);
            }
        }
        self.respond(result)
    }

    fn respond(&self, result: ApiResult<Value>) -> Response {
        let (ok, data, error) = match result {
            Ok(Value::Null) => (true, None, None),
            Ok(data) => (true, Some(data), None),
            Err(err) => (false, None, Some(err)),
        };

        Response {
            ok,
            data,
            error,
            route: self.nav.current(),
            notifications: self.notices.drain(),
        }
    }

    async fn run(&self, command: &str, args: Value) -> ApiResult<Value> {
        let (store, sessions, config) = (&self.store, &self.sessions, &self.config);
        let (nav, notices) = (&self.nav, &self.notices);
        let (owner_screen, tenant_screen) = (&self.owner, &self.tenant);

        match command {
            // Session & navigation
            "navigate" => reply(auth::navigate(sessions, nav, owner_screen, parse_args(args)?)),
            "login" => reply(
                auth::login(
                    sessions,
                    nav,
                    notices,
                    tenant_screen,
                    &self.login_gateway,
                    parse_args(args)?,
                )
                .await?,
            ),
            "logout" => reply(auth::logout(sessions, nav, notices, owner_screen, tenant_screen)?),
            "forgot_password" => reply(auth::forgot_password(notices)),
            "get_session" => reply(auth::get_session(sessions)),

            // Owner
            "owner_dashboard" => reply(owner::owner_dashboard(store, sessions, nav, config)?),
            "add_listing" => reply(owner::add_listing(
                store,
                sessions,
                config,
                notices,
                parse_args(args)?,
            )?),
            "manage_listing" => reply(owner::manage_listing(
                store,
                sessions,
                nav,
                config,
                owner_screen,
                parse_args(args)?,
            )?),
            "open_bed" => reply(owner::open_bed(
                store,
                sessions,
                config,
                owner_screen,
                parse_args(args)?,
            )?),
            "assign_tenant" => reply(owner::assign_tenant(
                store,
                sessions,
                config,
                notices,
                owner_screen,
                parse_args(args)?,
            )?),
            "remove_tenant" => reply(owner::remove_tenant(
                store,
                sessions,
                config,
                notices,
                owner_screen,
                parse_args(args)?,
            )?),
            "add_bed" => reply(owner::add_bed(store, sessions, config, notices, owner_screen)?),
            "close_bed_management" => reply(owner::close_bed_management(
                store, sessions, nav, config, owner_screen,
            )?),

            // Tenant
            "tenant_dashboard" => reply(tenant::tenant_dashboard(
                store, sessions, nav, config, tenant_screen,
            )?),
            "search" => reply(tenant::search(
                store,
                sessions,
                nav,
                config,
                tenant_screen,
                parse_args(args)?,
            )?),
            "clear_filters" => reply(tenant::clear_filters(store, sessions, config, tenant_screen)?),
            "select_listing" => reply(tenant::select_listing(
                store,
                sessions,
                config,
                tenant_screen,
                parse_args(args)?,
            )?),
            "book_now" => reply(tenant::book_now(store, sessions, config, tenant_screen)?),
            "cancel_booking" => reply(tenant::cancel_booking(store, sessions, config, tenant_screen)?),
            "confirm_booking" => reply(
                tenant::confirm_booking(
                    store,
                    sessions,
                    config,
                    notices,
                    tenant_screen,
                    &self.booking_gateway,
                )
                .await?,
            ),
            "dismiss" => self.dismiss(),

            "get_config" => reply(config::get_config(&self.config)),

            other => Err(ApiError::new(
                ErrorCode::ValidationError,
                format!("Unknown command: {}", other),
            )),
        }
    }

    /// Closes whichever dialog the signed-in role has open.
    fn dismiss(&self) -> ApiResult<Value> {
        let session = self
            .sessions
            .current_or_signed_out()
            .ok_or_else(|| ApiError::unauthorized("Not signed in"))?;

        match session.role {
            Role::Owner => {
                owner::close_bed_dialog(&self.owner);
                Ok(Value::Null)
            }
            Role::Tenant => reply(tenant::dismiss_booking(
                &self.store,
                &self.config,
                &self.tenant,
            )?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_core::{NoticeLevel, Session};
    use serde_json::json;
    use std::time::Duration;

    fn app() -> App {
        let config = AppConfig {
            login_delay_ms: 0,
            booking_delay_ms: 0,
            ..AppConfig::default()
        };
        App::from_config(config, SessionState::in_memory())
    }

    async fn send(app: &App, command: &str, args: Value) -> Response {
        app.dispatch(Envelope {
            command: command.into(),
            args,
        })
        .await
    }

    #[tokio::test]
    async fn test_unknown_command_keeps_going() {
        let app = app();
        let res = send(&app, "teleport", Value::Null).await;

        assert!(!res.ok);
        assert_eq!(res.error.unwrap().code, ErrorCode::ValidationError);

        let res = send(&app, "get_config", Value::Null).await;
        assert!(res.ok);
        assert_eq!(res.data.unwrap()["appName"], "Velocity");
    }

    #[tokio::test]
    async fn test_malformed_line() {
        let app = app();
        let res = app.handle_line("{not json").await;
        assert!(!res.ok);
        assert_eq!(res.error.unwrap().code, ErrorCode::ValidationError);
        assert_eq!(res.route, Route::Login);
    }

    #[tokio::test]
    async fn test_bad_arguments() {
        let app = app();
        let res = send(&app, "login", json!({"username": "owner"})).await;
        assert_eq!(res.error.unwrap().code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_protected_command_redirects_silently() {
        let app = app();
        let res = send(&app, "tenant_dashboard", Value::Null).await;

        assert!(!res.ok);
        assert_eq!(res.error.unwrap().code, ErrorCode::Unauthorized);
        assert!(res.notifications.is_empty());
        assert_eq!(res.route, Route::Login);
    }

    #[tokio::test]
    async fn test_failed_login_toasts() {
        let app = app();
        let res = send(
            &app,
            "login",
            json!({"username": "owner", "password": "wrong"}),
        )
        .await;

        assert!(!res.ok);
        assert_eq!(res.notifications.len(), 1);
        assert_eq!(res.notifications[0].level, NoticeLevel::Error);
        assert_eq!(res.notifications[0].message, "Invalid username or password");
    }

    #[tokio::test]
    async fn test_owner_session_end_to_end() {
        let app = app();

        let res = send(
            &app,
            "login",
            json!({"username": "owner", "password": "password"}),
        )
        .await;
        assert!(res.ok);
        assert_eq!(res.route, Route::OwnerDashboard);

        let res = send(&app, "manage_listing", json!({"listingId": "1"})).await;
        assert_eq!(res.route, Route::ManageBeds);

        send(&app, "open_bed", json!({"bedId": "bed-1-7"})).await;
        let res = send(&app, "assign_tenant", json!({"tenantName": "", "tenantPhone": ""})).await;
        assert_eq!(
            res.notifications[0].message,
            "Please fill all the tenant details"
        );

        let res = send(
            &app,
            "assign_tenant",
            json!({"tenantName": "Alice", "tenantPhone": "9999999999"}),
        )
        .await;
        assert!(res.ok);
        assert_eq!(res.data.unwrap()["summary"], "3 of 10 beds available");

        let res = send(&app, "logout", Value::Null).await;
        assert_eq!(res.route, Route::Login);
        assert!(res.data.is_none());
    }

    #[tokio::test]
    async fn test_tenant_booking_end_to_end() {
        let app = app();
        send(
            &app,
            "login",
            json!({"username": "tenant", "password": "password"}),
        )
        .await;

        let res = send(&app, "search", json!({"location": "Hyderabad"})).await;
        assert_eq!(res.data.unwrap()["count"], 1);

        send(&app, "select_listing", json!({"listingId": "6"})).await;
        let res = send(&app, "book_now", Value::Null).await;
        assert_eq!(
            res.notifications[0].message,
            "No beds available at this hostel"
        );

        send(&app, "dismiss", Value::Null).await;
        send(&app, "select_listing", json!({"listingId": "3"})).await;
        send(&app, "book_now", Value::Null).await;
        let res = send(&app, "confirm_booking", Value::Null).await;

        assert!(res.ok);
        assert_eq!(
            res.notifications[0].message,
            "Booking confirmed! Check your email for details."
        );
        assert_eq!(app.store().view("3").unwrap().available_beds, 4);
    }

    #[tokio::test]
    async fn test_owner_grid_agrees_with_tenant_booking() {
        let app = app();
        send(
            &app,
            "login",
            json!({"username": "tenant", "password": "password"}),
        )
        .await;
        send(&app, "select_listing", json!({"listingId": "2"})).await;
        send(&app, "book_now", Value::Null).await;
        assert!(send(&app, "confirm_booking", Value::Null).await.ok);
        send(&app, "logout", Value::Null).await;

        send(
            &app,
            "login",
            json!({"username": "owner", "password": "password"}),
        )
        .await;
        let grid = send(&app, "manage_listing", json!({"listingId": "2"}))
            .await
            .data
            .unwrap();
        assert_eq!(grid["listing"]["availableBeds"], 1);
        assert_eq!(grid["summary"], "1 of 15 beds available");
        assert_eq!(grid["beds"][13]["tenantName"], "tenant");

        let grid = send(&app, "add_bed", Value::Null).await.data.unwrap();
        assert_eq!(grid["listing"]["totalBeds"], 16);
        assert_eq!(grid["listing"]["availableBeds"], 2);
        assert_eq!(grid["summary"], "2 of 16 beds available");
    }

    #[test]
    fn test_restored_session_starts_at_home() {
        let sessions = SessionState::in_memory();
        sessions
            .sign_in(&Session::new(Role::Tenant, "tenant"))
            .unwrap();
        let app = App::from_config(AppConfig::default(), sessions);
        assert_eq!(app.route(), Route::TenantDashboard);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_delay_comes_from_config() {
        let app = App::from_config(AppConfig::default(), SessionState::in_memory());
        let start = tokio::time::Instant::now();

        send(
            &app,
            "login",
            json!({"username": "tenant", "password": "password"}),
        )
        .await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
