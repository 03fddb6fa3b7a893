//! # Velocity Hostels Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Velocity Hostels                                 │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                  Frontend (any process)                          │  │
//! │  │  • Login form          • Owner dashboard & bed grid              │  │
//! │  │  • Tenant search       • Booking dialog                          │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                    stdin: {"command": ..., "args": ...}                 │
//! │                    stdout: {"ok": ..., "route": ..., ...}               │
//! │  ┌──────────────────────────────▼───────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Starts the runtime                                │  │
//! │  │  lib.rs ─────► Logging, config, command loop                     │  │
//! │  │  commands/ ──► login, assign_tenant, search, confirm_booking     │  │
//! │  │  state/ ─────► Session, screens, notices, config                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  session.json (platform data dir) ── the only thing persisted    │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match hostel_app::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hostel-app: {}", err);
            ExitCode::FAILURE
        }
    }
}
