//! # Session Rules
//!
//! Roles, the signed-in identity, and the demo account table.
//!
//! There is no token and no expiry. A session exists from login until logout
//! and is only ever created by [`authenticate`] succeeding.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// Key under which the session is persisted in the key-value store.
pub const SESSION_KEY: &str = "user";

/// Which half of the application a user may enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    Owner,
    Tenant,
}

impl Role {
    /// Badge text shown next to the brand in the nav bar.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Owner => "Hostel Owner",
            Role::Tenant => "Tenant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Owner => write!(f, "owner"),
            Role::Tenant => write!(f, "tenant"),
        }
    }
}

/// The signed-in identity.
///
/// Persisted as `{"role": "owner", "username": "owner"}`. Entries written
/// with the older `type` field name are still accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    #[serde(alias = "type")]
    pub role: Role,
    pub username: String,
}

impl Session {
    pub fn new(role: Role, username: impl Into<String>) -> Self {
        Session {
            role,
            username: username.into(),
        }
    }

    pub fn is(&self, role: Role) -> bool {
        self.role == role
    }
}

/// A hardcoded demo account.
#[derive(Debug, Clone, Copy)]
pub struct Account {
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// The only two accounts that exist.
pub const ACCOUNTS: [Account; 2] = [
    Account {
        username: "owner",
        password: "password",
        role: Role::Owner,
    },
    Account {
        username: "tenant",
        password: "password",
        role: Role::Tenant,
    },
];

/// Exact username + password lookup.
///
/// ## Example
/// ```rust
/// use hostel_core::session::{authenticate, Role};
///
/// let session = authenticate("owner", "password").unwrap();
/// assert_eq!(session.role, Role::Owner);
/// assert!(authenticate("owner", "wrong").is_err());
/// ```
pub fn authenticate(username: &str, password: &str) -> CoreResult<Session> {
    ACCOUNTS
        .iter()
        .find(|a| a.username == username && a.password == password)
        .map(|a| Session::new(a.role, a.username))
        .ok_or(CoreError::InvalidCredentials)
}
