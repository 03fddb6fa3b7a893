//! # Routing
//!
//! Maps paths to screens and applies the session gate.
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Path             Screen             Needs                              │
//! │  ───────────────  ─────────────────  ──────────────                     │
//! │  /                Login              (none; signed in → role home)      │
//! │  /hostel-owner    Owner dashboard    owner                              │
//! │  /manage-beds     Bed management     owner                              │
//! │  /tenant          Tenant dashboard   tenant                             │
//! │  /search          Search             tenant                             │
//! │  anything else    Not found          (none)                             │
//! │                                                                         │
//! │  Gate failure (no session, wrong role) → Login, without a toast.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use hostel_core::{Role, Session};
use serde::{Serialize, Serializer};
use tracing::{debug, error};

/// A screen the app can show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Login,
    OwnerDashboard,
    ManageBeds,
    TenantDashboard,
    Search,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        match path {
            "/" => Route::Login,
            "/hostel-owner" => Route::OwnerDashboard,
            "/manage-beds" => Route::ManageBeds,
            "/tenant" => Route::TenantDashboard,
            "/search" => Route::Search,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Login => "/",
            Route::OwnerDashboard => "/hostel-owner",
            Route::ManageBeds => "/manage-beds",
            Route::TenantDashboard => "/tenant",
            Route::Search => "/search",
            Route::NotFound(path) => path,
        }
    }

    /// The role a screen is restricted to.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::OwnerDashboard | Route::ManageBeds => Some(Role::Owner),
            Route::TenantDashboard | Route::Search => Some(Role::Tenant),
            Route::Login | Route::NotFound(_) => None,
        }
    }

    /// Landing screen after login.
    pub fn home(role: Role) -> Route {
        match role {
            Role::Owner => Route::OwnerDashboard,
            Role::Tenant => Route::TenantDashboard,
        }
    }

    /// Where a visit to this route actually ends up.
    pub fn resolve(self, session: Option<&Session>) -> Route {
        if let Route::NotFound(path) = &self {
            error!(path = %path, "No route matches path");
            return self;
        }

        if self == Route::Login {
            return match session {
                Some(s) => {
                    debug!(role = %s.role, "Already signed in, redirecting home");
                    Route::home(s.role)
                }
                None => self,
            };
        }

        match self.required_role() {
            Some(role) if !session.is_some_and(|s| s.is(role)) => {
                debug!(path = self.path(), required = %role, "Session gate redirect to login");
                Route::Login
            }
            _ => self,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Session {
        Session::new(Role::Owner, "owner")
    }

    fn tenant() -> Session {
        Session::new(Role::Tenant, "tenant")
    }

    #[test]
    fn test_parse_round_trips_known_paths() {
        for path in ["/", "/hostel-owner", "/manage-beds", "/tenant", "/search"] {
            assert_eq!(Route::parse(path).path(), path);
        }
        assert_eq!(Route::parse("/admin"), Route::NotFound("/admin".into()));
    }

    #[test]
    fn test_gate_without_session() {
        assert_eq!(Route::OwnerDashboard.resolve(None), Route::Login);
        assert_eq!(Route::Search.resolve(None), Route::Login);
        assert_eq!(Route::Login.resolve(None), Route::Login);
    }

    #[test]
    fn test_gate_role_mismatch() {
        assert_eq!(Route::TenantDashboard.resolve(Some(&owner())), Route::Login);
        assert_eq!(Route::ManageBeds.resolve(Some(&tenant())), Route::Login);
    }

    #[test]
    fn test_gate_allows_matching_role() {
        assert_eq!(Route::ManageBeds.resolve(Some(&owner())), Route::ManageBeds);
        assert_eq!(Route::Search.resolve(Some(&tenant())), Route::Search);
    }

    #[test]
    fn test_login_redirects_signed_in_user_home() {
        assert_eq!(Route::Login.resolve(Some(&owner())), Route::OwnerDashboard);
        assert_eq!(Route::Login.resolve(Some(&tenant())), Route::TenantDashboard);
    }

    #[test]
    fn test_not_found_is_public() {
        let route = Route::parse("/nowhere").resolve(Some(&tenant()));
        assert_eq!(route.path(), "/nowhere");
    }

    #[test]
    fn test_serializes_as_path() {
        assert_eq!(serde_json::to_string(&Route::Search).unwrap(), r#""/search""#);
    }
}
