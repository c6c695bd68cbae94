//! # Market-Scout
//!
//! Runtime settings for the LLM-assisted marketplace and browser automation
//! service.
//!
//! Every collaborator of the service (LLM client, browser automation,
//! marketplace connectors, cache, persistence, HTTP layer) reads its
//! configuration from one immutable [`config::Settings`] value that is resolved
//! once at process start.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use market_scout::{api, config, logging};
//!
//! fn main() -> anyhow::Result<()> {
//!     // Resolve defaults, .env and the environment, then install the result
//!     let settings = config::init_global(config::Settings::load()?)?;
//!
//!     logging::init_tracing(settings)?;
//!
//!     // Hand the CORS policy to the HTTP layer
//!     let _cors = api::cors_layer(settings);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`config`]: Settings struct, layered loading, process-wide instance
//! - [`logging`]: Tracing subscriber setup from `log_level` / `debug`
//! - [`api`]: CORS layer for the HTTP server
//!
//! ## Configuration
//!
//! Configuration follows a precedence chain, per field:
//! 1. Default values
//! 2. Override file (`.env`)
//! 3. Environment variables (`GROQ_API_KEY`, `LLM_ENABLED`, ...)
//!
//! See [`config::Settings`] for all available options.

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Full version string with name
pub const FULL_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Module Exports
// ============================================================================

/// Settings resolution from defaults, `.env` and the environment.
pub mod config;

/// Tracing setup driven by the resolved settings.
pub mod logging;

/// HTTP-layer adapters built from the settings.
pub mod api;

// ============================================================================
// Re-exports for Convenience
// ============================================================================

pub use api::cors_layer;
pub use config::{ConfigError, Field, FieldKind, Origin, Settings, SettingsLoader};
pub use logging::init_tracing;

// ============================================================================
// Prelude Module
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust
/// use market_scout::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::cors_layer;
    pub use crate::config::{global, init_global, load_global, Settings, SettingsLoader};
    pub use crate::logging::init_tracing;
    pub use crate::{FULL_VERSION, NAME, VERSION};
}
