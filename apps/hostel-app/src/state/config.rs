//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`HOSTEL_*`)
//! 2. Config file (TOML, path in `HOSTEL_CONFIG`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use hostel_core::price::{PriceRange, Rupees};
use hostel_core::types::DEFAULT_LISTING_IMAGE;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ApiError, ApiResult};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Brand shown in the header.
    pub app_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Simulated login round trip.
    pub login_delay_ms: u64,

    /// Simulated booking round trip.
    pub booking_delay_ms: u64,

    /// Price band the search screen starts with.
    pub default_price_range: PriceRange,

    /// Image used when a new hostel is added without one.
    pub placeholder_image: String,

    /// Where the session is persisted. `None` uses the platform data dir.
    pub session_file: Option<PathBuf>,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Name: "Velocity"
    /// - Currency: ₹
    /// - Delays: 1000 ms login, 1500 ms booking
    /// - Price band: ₹300 - ₹2000
    fn default() -> Self {
        AppConfig {
            app_name: "Velocity".to_string(),
            currency_symbol: "₹".to_string(),
            login_delay_ms: 1000,
            booking_delay_ms: 1500,
            default_price_range: PriceRange::default(),
            placeholder_image: DEFAULT_LISTING_IMAGE.to_string(),
            session_file: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration: defaults, then the `HOSTEL_CONFIG` file if set,
    /// then `HOSTEL_*` overrides.
    pub fn load() -> ApiResult<Self> {
        let mut config = match std::env::var("HOSTEL_CONFIG") {
            Ok(path) => AppConfig::from_file(Path::new(&path))?,
            Err(_) => AppConfig::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Reads a TOML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> ApiResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ApiError::internal(format!("Cannot read config {}: {}", path.display(), e))
        })?;
        AppConfig::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> ApiResult<Self> {
        toml::from_str(raw).map_err(|e| ApiError::validation(format!("Invalid config: {}", e)))
    }

    /// Applies `HOSTEL_*` overrides read through `lookup`.
    ///
    /// ## Environment Variables
    /// - `HOSTEL_APP_NAME`
    /// - `HOSTEL_LOGIN_DELAY_MS`, `HOSTEL_BOOKING_DELAY_MS`
    /// - `HOSTEL_SESSION_FILE`
    ///
    /// Unparseable numbers are ignored with a warning.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("HOSTEL_APP_NAME") {
            self.app_name = name;
        }

        for (key, slot) in [
            ("HOSTEL_LOGIN_DELAY_MS", &mut self.login_delay_ms),
            ("HOSTEL_BOOKING_DELAY_MS", &mut self.booking_delay_ms),
        ] {
            if let Some(raw) = lookup(key) {
                match raw.trim().parse::<u64>() {
                    Ok(ms) => *slot = ms,
                    Err(_) => warn!(key, value = %raw, "Ignoring invalid delay"),
                }
            }
        }

        if let Some(path) = lookup("HOSTEL_SESSION_FILE") {
            self.session_file = Some(PathBuf::from(path));
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn booking_delay(&self) -> Duration {
        Duration::from_millis(self.booking_delay_ms)
    }

    /// Session file location.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.velocity.hostels/session.json`
    /// - **Windows**: `%APPDATA%\velocity\hostels\data\session.json`
    /// - **Linux**: `~/.local/share/hostels/session.json`
    pub fn session_path(&self) -> ApiResult<PathBuf> {
        if let Some(path) = &self.session_file {
            return Ok(path.clone());
        }

        let dirs = ProjectDirs::from("com", "velocity", "hostels")
            .ok_or_else(|| ApiError::internal("Could not determine app data directory"))?;
        Ok(dirs.data_dir().join("session.json"))
    }

    /// Formats a nightly price with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use hostel_app::state::AppConfig;
    /// use hostel_core::Rupees;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_price(Rupees::new(500)), "₹500");
    /// ```
    pub fn format_price(&self, price: Rupees) -> String {
        format!("{}{}", self.currency_symbol, price.amount())
    }
}
