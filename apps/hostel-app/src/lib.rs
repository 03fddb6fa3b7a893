//! # Velocity Hostels App Library
//!
//! Core library for the hostel app. The binary in `main.rs` only calls
//! [`run`].
//!
//! ## Module Organization
//! ```text
//! hostel_app/
//! ├── lib.rs          ◄─── You are here (startup & command loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration
//! │   ├── session.rs  ◄─── Sign in/out, session gate
//! │   ├── nav.rs      ◄─── Current route
//! │   ├── notices.rs  ◄─── Pending toasts
//! │   ├── owner.rs    ◄─── Owner screen state
//! │   └── tenant.rs   ◄─── Tenant screen state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Envelope & dispatcher
//! │   ├── auth.rs     ◄─── Login, logout, navigate
//! │   ├── owner.rs    ◄─── Hostels and beds
//! │   ├── tenant.rs   ◄─── Search and booking
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── gateway.rs      ◄─── Simulated network calls
//! ├── router.rs       ◄─── Paths and the session gate
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod gateway;
pub mod router;
pub mod state;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use commands::App;
use error::{ApiError, ApiResult};
use hostel_store::FileKv;
use state::{AppConfig, SessionState};

/// Runs the app until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, to stderr                     │
/// │     • Default: info, debug for hostel crates; RUST_LOG overrides        │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • HOSTEL_CONFIG file, then HOSTEL_* variables                       │
/// │                                                                         │
/// │  3. Open Session File ────────────────────────────────────────────────► │
/// │     • A saved session picks the first screen                            │
/// │                                                                         │
/// │  4. Seed Store & Build App ───────────────────────────────────────────► │
/// │                                                                         │
/// │  5. Command Loop ─────────────────────────────────────────────────────► │
/// │     • One JSON envelope per stdin line, one response per stdout line   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> ApiResult<()> {
    init_tracing();

    let config = AppConfig::load()?;
    info!(app = %config.app_name, "Starting Velocity Hostels");

    let session_path = config.session_path()?;
    info!(?session_path, "Session file determined");
    let sessions = SessionState::new(FileKv::new(session_path));

    let app = App::from_config(config, sessions);
    info!(route = %app.route(), "State initialized");

    serve(&app).await
}

/// Reads envelopes from stdin and writes responses to stdout.
async fn serve(app: &App) -> ApiResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.map_err(io_error)? {
        if line.trim().is_empty() {
            continue;
        }

        let response = app.handle_line(&line).await;
        let mut encoded = serde_json::to_vec(&response).map_err(|e| {
            error!(error = %e, "Response encoding failed");
            ApiError::internal(e.to_string())
        })?;
        encoded.push(b'\n');

        stdout.write_all(&encoded).await.map_err(io_error)?;
        stdout.flush().await.map_err(io_error)?;
    }

    info!("Input closed, shutting down");
    Ok(())
}

fn io_error(err: std::io::Error) -> ApiError {
    ApiError::internal(format!("Console I/O failed: {}", err))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=hostel=trace` - Show trace for hostel crates only
/// - Default: INFO, DEBUG for hostel crates
///
/// Logs go to stderr; stdout carries responses.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hostel=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
