//! Logging utilities for the FormArte portal.
//!
//! Every crate logs through `tracing`; the binary calls [`init_from_config`]
//! once at startup.

use formarte_config::LoggingConfig;
use tracing::{error, info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` directives are honoured in addition to `formarte=<level>`.
/// Uses `try_init`, so calling it twice (e.g. from tests) is harmless.
pub fn init_with_level(level: Level) {
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(build_filter(level))
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Initialize logging from the `[logging]` config section.
///
/// When a directory is configured a daily rolling file is written next to the
/// console output. The returned guard must be kept alive for the file writer
/// to flush.
pub fn init_from_config(config: &LoggingConfig) -> Option<WorkerGuard> {
    let level = parse_level(&config.level);

    let Some(directory) = config.directory.as_deref() else {
        init_with_level(level);
        return None;
    };

    let file_appender = tracing_appender::rolling::daily(directory, "formarte.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(build_filter(level))
        .try_init();

    if result.is_ok() {
        info!(
            "Logging initialized at level: {} (file output in {})",
            level, directory
        );
    }
    Some(guard)
}

fn build_filter(level: Level) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match format!("formarte={}", level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Parses a textual level, falling back to INFO.
pub fn parse_level(level: &str) -> Level {
    level.parse().unwrap_or(Level::INFO)
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
