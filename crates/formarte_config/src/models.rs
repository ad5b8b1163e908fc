// --- File: crates/formarte_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8086,
        }
    }
}

// --- Durable key-value storage ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    /// Path of the JSON file holding every stored entry.
    pub path: String,
    /// Entry holding the serialized booking array (all owners commingled).
    #[serde(default = "default_bookings_key")]
    pub bookings_key: String,
    /// Entry holding the account directory.
    #[serde(default = "default_users_key")]
    pub users_key: String,
}

fn default_bookings_key() -> String {
    "allBookings".to_string()
}

fn default_users_key() -> String {
    "users".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "data/formarte_store.json".to_string(),
            bookings_key: default_bookings_key(),
            users_key: default_users_key(),
        }
    }
}

// --- Owner identity stamped on new bookings ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IdentityConfig {
    pub guest_email: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            guest_email: "guest@formarte.com".to_string(),
        }
    }
}

// --- Schedule: time zone for "today" and the fixed slot lists ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScheduleConfig {
    /// IANA time zone used to compute the "today" anchor.
    pub time_zone: String,
    /// Evening slots offered by the psychological support flow.
    pub psychological_times: Vec<String>,
    /// Slots offered by the academic tutoring flow.
    pub academic_times: Vec<String>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            time_zone: "America/Bogota".to_string(),
            psychological_times: ["17:00", "18:00", "19:00", "20:00"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            academic_times: [
                "09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00",
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
        }
    }
}

// --- Simulated payment ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentConfig {
    /// Fixed artificial latency of the simulated gateway.
    pub simulated_delay_ms: u64,
    pub currency: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 2000,
            currency: "COP".to_string(),
        }
    }
}

// --- Account pages ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    /// Accepted e-mail suffix, e.g. ".edu.co".
    pub institutional_domain: String,
    pub min_password_length: usize,
    /// Fixed latency of the simulated e-mail / login round trip.
    pub simulated_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            institutional_domain: ".edu.co".to_string(),
            min_password_length: 6,
            simulated_delay_ms: 1000,
        }
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// When set, a daily rolling log file is written here as well.
    #[serde(default)]
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_auth: bool,

    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub payment: PaymentConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
