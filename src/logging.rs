//! Tracing setup driven by the resolved settings.

use tracing::{warn, Level};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Settings;

/// Maps a log level name to a tracing level, ignoring ASCII case.
///
/// `WARNING` and `CRITICAL` are accepted alongside the tracing names.
pub fn parse_level(name: &str) -> Option<Level> {
    match name.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Some(Level::TRACE),
        "DEBUG" => Some(Level::DEBUG),
        "INFO" => Some(Level::INFO),
        "WARN" | "WARNING" => Some(Level::WARN),
        "ERROR" | "CRITICAL" => Some(Level::ERROR),
        _ => None,
    }
}

/// Effective level: `debug` forces DEBUG, unknown names fall back to INFO.
pub fn level_for(settings: &Settings) -> Level {
    if settings.debug() {
        return Level::DEBUG;
    }
    parse_level(settings.log_level()).unwrap_or(Level::INFO)
}

/// Initialize the tracing/logging subsystem
///
/// `RUST_LOG` directives are honored in addition to the configured level.
/// Events go to stderr so stdout stays free for command output.
/// Fails instead of panicking when a global subscriber is already set.
pub fn init_tracing(settings: &Settings) -> Result<(), TryInitError> {
    let level = level_for(settings);

    let mut filter = EnvFilter::from_default_env().add_directive(level.into());
    if let Ok(directive) = "tower_http=info".parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .with(filter)
        .try_init()?;

    if !settings.debug() && parse_level(settings.log_level()).is_none() {
        warn!(
            log_level = settings.log_level(),
            "unrecognized log level, falling back to INFO"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SettingsLoader;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        SettingsLoader::new()
            .without_env_file()
            .with_env_vars(vars.iter().map(|(k, v)| (k.to_string(), v.to_string())))
            .load()
            .unwrap()
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("INFO"), Some(Level::INFO));
        assert_eq!(parse_level("warning"), Some(Level::WARN));
        assert_eq!(parse_level("Critical"), Some(Level::ERROR));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_level_for_defaults_to_info() {
        assert_eq!(level_for(&Settings::default()), Level::INFO);
    }

    #[test]
    fn test_debug_flag_forces_debug() {
        let s = settings(&[("DEBUG", "true"), ("LOG_LEVEL", "ERROR")]);
        assert_eq!(level_for(&s), Level::DEBUG);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let s = settings(&[("LOG_LEVEL", "LOUD")]);
        assert_eq!(level_for(&s), Level::INFO);
    }
}
