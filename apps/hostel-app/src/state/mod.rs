//! # State Module
//!
//! Manages application state for the hostel app.
//!
//! ## Multiple Focused State Types
//! Instead of a single struct containing everything, each concern gets its
//! own state type and each command takes only the ones it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌───────────────┐ ┌───────────────┐ ┌───────────────┐                  │
//! │  │  AppConfig    │ │ HostelStore   │ │ SessionState  │                  │
//! │  │  (read-only)  │ │ (hostel-store)│ │ (key "user")  │                  │
//! │  └───────────────┘ └───────────────┘ └───────────────┘                  │
//! │  ┌───────────────┐ ┌───────────────┐ ┌───────────────┐ ┌─────────────┐  │
//! │  │ OwnerScreen   │ │ TenantScreen  │ │ NoticeState   │ │ NavState    │  │
//! │  │ State         │ │ State         │ │ (toasts)      │ │ (route)     │  │
//! │  └───────────────┘ └───────────────┘ └───────────────┘ └─────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • AppConfig: read-only after startup                                  │
//! │  • HostelStore: Arc<RwLock<..>> repositories                           │
//! │  • Screens, notices, route: Arc<Mutex<T>> for exclusive access         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod nav;
mod notices;
mod owner;
mod session;
mod tenant;

pub use config::AppConfig;
pub use nav::NavState;
pub use notices::NoticeState;
pub use owner::{OwnerScreen, OwnerScreenState};
pub use session::{SessionContext, SessionState};
pub use tenant::{TenantScreen, TenantScreenState};
