//! Allow-list of recognized setting keys.
//!
//! Raw key/value pairs from the environment or the override file are matched
//! against this list; anything that does not resolve to a [`Field`] is dropped.

use std::fmt;

/// Declared type of a setting, used to pick the coercion applied to raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form string, taken verbatim.
    Text,
    /// Filesystem path, taken verbatim.
    Path,
    /// Boolean toggle.
    Flag,
    /// Non-negative integer.
    Count,
}

impl FieldKind {
    /// Human-readable description used in error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Text => "a string",
            FieldKind::Path => "a path",
            FieldKind::Flag => "a boolean (true/false, 1/0, yes/no, on/off)",
            FieldKind::Count => "a non-negative integer",
        }
    }
}

/// A recognized setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    GroqApiKey,
    GroqPrimaryModel,
    GroqFastModel,
    LlmEnabled,
    LlmMaxConcurrent,
    PlaywrightHeadless,
    MarketplacesDir,
    AllowedOrigins,
    RedisUrl,
    SerpapiKey,
    DatabaseUrl,
    Debug,
    LogLevel,
}

impl Field {
    /// Every recognized field, in declaration order.
    pub const ALL: [Field; 13] = [
        Field::GroqApiKey,
        Field::GroqPrimaryModel,
        Field::GroqFastModel,
        Field::LlmEnabled,
        Field::LlmMaxConcurrent,
        Field::PlaywrightHeadless,
        Field::MarketplacesDir,
        Field::AllowedOrigins,
        Field::RedisUrl,
        Field::SerpapiKey,
        Field::DatabaseUrl,
        Field::Debug,
        Field::LogLevel,
    ];

    /// Snake-case name, as used for struct fields and override-file keys.
    pub fn name(&self) -> &'static str {
        match self {
            Field::GroqApiKey => "groq_api_key",
            Field::GroqPrimaryModel => "groq_primary_model",
            Field::GroqFastModel => "groq_fast_model",
            Field::LlmEnabled => "llm_enabled",
            Field::LlmMaxConcurrent => "llm_max_concurrent",
            Field::PlaywrightHeadless => "playwright_headless",
            Field::MarketplacesDir => "marketplaces_dir",
            Field::AllowedOrigins => "allowed_origins",
            Field::RedisUrl => "redis_url",
            Field::SerpapiKey => "serpapi_key",
            Field::DatabaseUrl => "database_url",
            Field::Debug => "debug",
            Field::LogLevel => "log_level",
        }
    }

    /// Conventional environment variable name.
    pub fn env_key(&self) -> String {
        self.name().to_ascii_uppercase()
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::LlmEnabled | Field::PlaywrightHeadless | Field::Debug => FieldKind::Flag,
            Field::LlmMaxConcurrent => FieldKind::Count,
            Field::MarketplacesDir => FieldKind::Path,
            Field::GroqApiKey
            | Field::GroqPrimaryModel
            | Field::GroqFastModel
            | Field::AllowedOrigins
            | Field::RedisUrl
            | Field::SerpapiKey
            | Field::DatabaseUrl
            | Field::LogLevel => FieldKind::Text,
        }
    }

    /// Whether the value is a credential that must not be printed.
    pub fn is_secret(&self) -> bool {
        matches!(self, Field::GroqApiKey | Field::SerpapiKey)
    }

    /// Resolves a raw key, ignoring ASCII case. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
