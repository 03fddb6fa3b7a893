//! # Session State
//!
//! Single entry point for signing in and out, and the gate every protected
//! command passes through.
//!
//! ## Gate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  command (e.g. add_bed)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SessionState::require(Role::Owner)                                     │
//! │       │                                                                 │
//! │       ├── no session / unreadable entry ──► UNAUTHORIZED (silent)       │
//! │       ├── tenant session ────────────────► UNAUTHORIZED (silent)        │
//! │       └── owner session ─────────────────► SessionContext { owner }     │
//! │                                                │                        │
//! │                                                ▼                        │
//! │                                   command runs as that user             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hostel_core::{Role, Session};
use hostel_store::{KeyValueStore, MemoryKv, SessionStore};
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};

/// The signed-in user a screen command acts for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session: Session,
}

impl SessionContext {
    pub fn username(&self) -> &str {
        &self.session.username
    }

    pub fn role(&self) -> Role {
        self.session.role
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Persisted session, behind whichever key-value backend the app was
/// started with.
#[derive(Debug)]
pub struct SessionState {
    store: SessionStore<Box<dyn KeyValueStore>>,
}

impl SessionState {
    pub fn new(kv: impl KeyValueStore + 'static) -> Self {
        SessionState {
            store: SessionStore::new(Box::new(kv)),
        }
    }

    /// Session kept only for the life of the process.
    pub fn in_memory() -> Self {
        SessionState::new(MemoryKv::new())
    }

    pub fn current(&self) -> ApiResult<Option<Session>> {
        Ok(self.store.current()?)
    }

    /// Current session, or `None` if storage cannot be read.
    ///
    /// Routing uses this: a broken store behaves like being signed out.
    pub fn current_or_signed_out(&self) -> Option<Session> {
        self.store.current().unwrap_or_else(|e| {
            warn!(error = %e, "Session storage unreadable, treating as signed out");
            None
        })
    }

    pub fn sign_in(&self, session: &Session) -> ApiResult<()> {
        self.store.save(session)?;
        info!(username = %session.username, role = %session.role, "Signed in");
        Ok(())
    }

    pub fn sign_out(&self) -> ApiResult<()> {
        self.store.clear()?;
        info!("Signed out");
        Ok(())
    }

    /// Checks that a session with `role` is active.
    pub fn require(&self, role: Role) -> ApiResult<SessionContext> {
        match self.current_or_signed_out() {
            Some(session) if session.is(role) => Ok(SessionContext { session }),
            Some(session) => Err(ApiError::unauthorized(format!(
                "{} cannot open {} screens",
                session.role.label(),
                role.label()
            ))),
            None => Err(ApiError::unauthorized("Not signed in")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_require_without_session() {
        let state = SessionState::in_memory();
        let err = state.require(Role::Owner).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn test_require_matching_role() {
        let state = SessionState::in_memory();
        state.sign_in(&Session::new(Role::Owner, "owner")).unwrap();

        let ctx = state.require(Role::Owner).unwrap();
        assert_eq!(ctx.username(), "owner");
        assert!(state.require(Role::Tenant).is_err());
    }

    #[test]
    fn test_sign_out_clears() {
        let state = SessionState::in_memory();
        state.sign_in(&Session::new(Role::Tenant, "tenant")).unwrap();
        state.sign_out().unwrap();
        assert_eq!(state.current().unwrap(), None);
    }

    #[test]
    fn test_corrupt_entry_is_signed_out() {
        let kv = MemoryKv::new();
        kv.set("user", "not a session").unwrap();
        let state = SessionState::new(kv);
        assert!(state.require(Role::Tenant).is_err());
    }
}
