//! Environment variable handling for the FormArte portal.
//!
//! Configuration keys map to environment variables as
//! `<PREFIX>__<SECTION>__<KEY>`, e.g. `FORMARTE__SERVER__PORT`.

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "FORMARTE";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "server.host")
///
/// # Returns
///
/// The environment variable name (e.g., "FORMARTE__SERVER__HOST")
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}
