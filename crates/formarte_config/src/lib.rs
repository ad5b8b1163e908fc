use config::{Config, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod env_vars;
pub mod models;
pub use config::ConfigError;
pub use models::*;

/// Loads the layered configuration.
///
/// Sources, later ones overriding earlier ones:
/// built-in defaults, `<CONFIG_DIR>/default.*`, `<CONFIG_DIR>/<RUN_ENV>.*`,
/// then `FORMARTE__SECTION__KEY` environment variables.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    load_config_from(Path::new(&config_dir))
}

/// Same as [`load_config`] but reading files from an explicit directory.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();

    let default_path: PathBuf = config_dir.join("default");
    let env_path: PathBuf = config_dir.join(&run_env);

    debug!(
        "Loading config: default={}, env={}, prefix={}",
        default_path.display(),
        env_path.display(),
        prefix
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    let config: AppConfig = builder.build()?.try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.schedule.psychological_times.is_empty() {
        return Err(ConfigError::Message(
            "schedule.psychological_times must not be empty".to_string(),
        ));
    }
    if config.schedule.academic_times.is_empty() {
        return Err(ConfigError::Message(
            "schedule.academic_times must not be empty".to_string(),
        ));
    }
    if config.identity.guest_email.trim().is_empty() {
        return Err(ConfigError::Message(
            "identity.guest_email must not be empty".to_string(),
        ));
    }
    Ok(())
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// `DOTENV_OVERRIDE` names an alternative file; otherwise `.env` is used.
/// Returns the path that was (or would have been) loaded.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
