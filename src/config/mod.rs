//! Configuration module for market-scout.
//!
//! This module resolves the service's runtime settings, including:
//! - Compiled-in defaults for every field
//! - Overrides from a local `.env` file
//! - Environment variable overrides
//! - Type coercion with field-named errors
//! - A single process-wide instance
//!
//! # Example
//!
//! ```rust,no_run
//! use market_scout::config::{self, Settings};
//!
//! // Resolve once at startup and install it for the rest of the process
//! let settings = config::init_global(Settings::load().unwrap()).unwrap();
//!
//! for origin in settings.cors_origins() {
//!     println!("allowing {}", origin);
//! }
//! ```

mod error;
mod field;
mod global;
mod loader;
mod settings;

pub use error::{ConfigError, Origin};
pub use field::{Field, FieldKind};
pub use global::{global, init_global, load_global};
pub use loader::{LoadReport, SettingsLoader, SkippedLine, DEFAULT_ENV_FILE};
pub use settings::{
    Settings, DEFAULT_ALLOWED_ORIGINS, DEFAULT_FAST_MODEL, DEFAULT_LOG_LEVEL,
    DEFAULT_MARKETPLACES_DIR, DEFAULT_PRIMARY_MODEL,
};
