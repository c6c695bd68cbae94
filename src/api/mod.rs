//! HTTP-layer adapters for market-scout.
//!
//! The service's HTTP API lives elsewhere; this module only turns the resolved
//! settings into middleware it can mount.

pub mod cors;

pub use cors::{allowed_origin, allowed_origin_headers, cors_layer, CORS_MAX_AGE, WILDCARD_ORIGIN};
