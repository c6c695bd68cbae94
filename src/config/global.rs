//! Process-wide settings instance.
//!
//! Installed once at startup and shared as `&'static Settings`; there is no
//! way to replace or mutate it afterwards.

use once_cell::sync::OnceCell;

use super::error::ConfigError;
use super::settings::Settings;

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Installs `settings` as the process-wide instance.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyInitialized`] if an instance is already installed.
pub fn init_global(settings: Settings) -> Result<&'static Settings, ConfigError> {
    SETTINGS
        .try_insert(settings)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// The installed instance, if any.
pub fn global() -> Option<&'static Settings> {
    SETTINGS.get()
}

/// Returns the installed instance, loading it with [`Settings::load`] on first use.
pub fn load_global() -> Result<&'static Settings, ConfigError> {
    SETTINGS.get_or_try_init(Settings::load)
}
