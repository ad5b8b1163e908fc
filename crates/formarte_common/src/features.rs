//! Runtime feature flags.
//!
//! Booking routes are always mounted. The account pages are mounted only when
//! `use_auth` is set in the configuration.

use formarte_config::AppConfig;
use std::sync::Arc;

/// Check if the account pages (register, login, password recovery) are enabled.
pub fn is_auth_enabled(config: &Arc<AppConfig>) -> bool {
    config.use_auth
}
