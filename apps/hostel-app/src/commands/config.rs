//! # Config Commands
//!
//! Retrieving application configuration.

use tracing::debug;

use crate::state::AppConfig;

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (brand name, currency symbol)
/// - Search screen (initial price slider)
pub fn get_config(config: &AppConfig) -> AppConfig {
    debug!("get_config command");
    config.clone()
}
