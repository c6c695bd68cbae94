//! Cross-origin policy for the HTTP layer.
//!
//! The allow-list comes from [`Settings::cors_origins`]; entries are used as
//! given, without deduplication or URL validation. A `*` entry allows every
//! origin.

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::Settings;

/// Preflight cache lifetime advertised to browsers.
pub const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Wildcard entry accepted in `ALLOWED_ORIGINS`.
pub const WILDCARD_ORIGIN: &str = "*";

/// Origins from the settings as header values. Entries that cannot be sent as
/// a header are skipped, as is the `*` wildcard.
pub fn allowed_origin_headers(settings: &Settings) -> Vec<HeaderValue> {
    settings
        .cors_origins()
        .into_iter()
        .filter(|origin| *origin != WILDCARD_ORIGIN)
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin, "ignoring CORS origin that is not a valid header value: {}", e);
                None
            }
        })
        .collect()
}

/// Origin policy: any origin when `*` is listed, otherwise the exact list.
pub fn allowed_origin(settings: &Settings) -> AllowOrigin {
    if settings.cors_origins().contains(&WILDCARD_ORIGIN) {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed_origin_headers(settings))
    }
}

/// Configure CORS for the configured origins
pub fn cors_layer(settings: &Settings) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin(settings))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
        ])
        .max_age(CORS_MAX_AGE)
}
