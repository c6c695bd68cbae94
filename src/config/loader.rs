//! Layered settings loading.
//!
//! Collects raw `KEY=value` pairs from the override file and the environment,
//! keeps only recognized keys, then coerces each value into its field.

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::{ConfigError, Origin};
use super::field::Field;
use super::settings::Settings;

/// Override file consulted when no other path is configured.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// A raw string value together with where it came from.
#[derive(Debug, Clone)]
pub(crate) struct RawValue {
    pub(crate) value: String,
    pub(crate) origin: Origin,
}

impl RawValue {
    pub(crate) fn invalid(&self, field: Field) -> ConfigError {
        ConfigError::InvalidValue {
            field: field.name(),
            origin: self.origin.clone(),
            expected: field.kind().expected(),
            value: self.value.clone(),
        }
    }
}

/// An override-file line that could not be parsed and was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub path: PathBuf,
    /// The offending line as read.
    pub line: String,
    /// Byte offset within the line where parsing stopped.
    pub index: usize,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: skipped malformed line {:?} (at column {})",
            self.path.display(),
            self.line,
            self.index
        )
    }
}

/// Resolved settings together with the override-file lines that were ignored.
///
/// Loading usually happens before any tracing subscriber exists, so the
/// skipped lines are carried here and reported with [`LoadReport::log_skipped`]
/// once logging is up.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub settings: Settings,
    pub skipped_lines: Vec<SkippedLine>,
}

impl LoadReport {
    /// Emits one `warn!` event per skipped override-file line.
    pub fn log_skipped(&self) {
        for skipped in &self.skipped_lines {
            warn!(
                path = %skipped.path.display(),
                index = skipped.index,
                "skipping malformed override file line: {}",
                skipped.line
            );
        }
    }
}

/// Builder that resolves [`Settings`] from its sources.
///
/// # Example
///
/// ```rust,no_run
/// use market_scout::config::SettingsLoader;
///
/// // Defaults, then ./config/app.env, then the process environment
/// let settings = SettingsLoader::new()
///     .env_file("config/app.env")
///     .load()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    env_file: Option<PathBuf>,
    env_vars: Option<Vec<(String, String)>>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self {
            env_file: Some(PathBuf::from(DEFAULT_ENV_FILE)),
            env_vars: None,
        }
    }
}

impl SettingsLoader {
    /// Loader reading `.env` and the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from `path` instead of `.env`.
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Skips the override file entirely.
    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    /// Uses `vars` in place of the process environment.
    ///
    /// This only replaces the environment layer. `${VAR}` references inside the
    /// override file are still expanded by `dotenvy`, first from keys defined
    /// earlier in the same file and then from the real process environment, so
    /// an override file that interpolates variables is not isolated by this
    /// snapshot. Use [`SettingsLoader::without_env_file`] for fully hermetic
    /// loading.
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Resolves every field: defaults, then the override file, then the environment.
    ///
    /// # Errors
    ///
    /// Fails on the first field (in [`Field::ALL`] order) whose value cannot be
    /// coerced, or when an existing override file cannot be read. No partially
    /// resolved settings are returned.
    ///
    /// Skipped override-file lines are logged through the current subscriber;
    /// call [`SettingsLoader::load_report`] to report them later instead.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let report = self.load_report()?;
        report.log_skipped();
        Ok(report.settings)
    }

    /// Like [`SettingsLoader::load`], but returns the skipped override-file
    /// lines instead of logging them.
    pub fn load_report(&self) -> Result<LoadReport, ConfigError> {
        let mut layers: BTreeMap<Field, RawValue> = BTreeMap::new();
        let mut skipped_lines = Vec::new();

        if let Some(ref path) = self.env_file {
            for (key, value) in read_env_file(path, &mut skipped_lines)? {
                let origin = Origin::OverrideFile { path: path.clone() };
                insert_known(&mut layers, &key, value, origin);
            }
        }

        for (key, value) in self.environment() {
            let origin = Origin::Environment { key: key.clone() };
            insert_known(&mut layers, &key, value, origin);
        }

        let mut settings = Settings::default();
        for (field, raw) in layers {
            settings.assign(field, raw)?;
        }

        debug!(
            llm_enabled = settings.llm_enabled(),
            llm_max_concurrent = settings.llm_max_concurrent(),
            log_level = settings.log_level(),
            skipped_lines = skipped_lines.len(),
            "settings resolved"
        );
        Ok(LoadReport {
            settings,
            skipped_lines,
        })
    }

    fn environment(&self) -> Vec<(String, String)> {
        match self.env_vars {
            Some(ref vars) => vars.clone(),
            None => env::vars_os()
                .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
                .collect(),
        }
    }
}

/// Records `value` for `key` if the key names a known field; later calls win.
fn insert_known(layers: &mut BTreeMap<Field, RawValue>, key: &str, value: String, origin: Origin) {
    if let Some(field) = Field::from_key(key) {
        layers.insert(field, RawValue { value, origin });
    }
}

/// Reads `KEY=value` pairs from an override file without touching the process
/// environment. A missing file yields no pairs; unparsable lines are pushed
/// onto `skipped`.
fn read_env_file(
    path: &Path,
    skipped: &mut Vec<SkippedLine>,
) -> Result<Vec<(String, String)>, ConfigError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            debug!(path = %path.display(), "override file not found, skipping");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ConfigError::OverrideFile {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut pairs = Vec::new();
    for item in iter {
        match item {
            Ok(pair) => pairs.push(pair),
            Err(dotenvy::Error::LineParse(line, index)) => skipped.push(SkippedLine {
                path: path.to_path_buf(),
                line,
                index,
            }),
            Err(source) => {
                return Err(ConfigError::OverrideFile {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
    Ok(pairs)
}

/// Parses a boolean token, ignoring surrounding whitespace and ASCII case.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

/// Parses a non-negative base-10 integer, ignoring surrounding whitespace.
pub(crate) fn parse_count(value: &str) -> Option<usize> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader(vars: &[(&str, &str)]) -> SettingsLoader {
        SettingsLoader::new()
            .without_env_file()
            .with_env_vars(vars.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    #[test]
    fn test_parse_flag_tokens() {
        for token in ["true", "TRUE", "True", "1", "yes", "on", "t", "Y", " true "] {
            assert_eq!(parse_flag(token), Some(true), "token {:?}", token);
        }
        for token in ["false", "FALSE", "0", "no", "off", "f", "N", "\tfalse"] {
            assert_eq!(parse_flag(token), Some(false), "token {:?}", token);
        }
        for token in ["", "2", "maybe", "truthy", "-1"] {
            assert_eq!(parse_flag(token), None, "token {:?}", token);
        }
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count(" 12 "), Some(12));
        assert_eq!(parse_count("+5"), Some(5));
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("1.5"), None);
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("+"), None);
    }

    #[test]
    fn test_empty_environment_yields_defaults() {
        let settings = loader(&[]).load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_count_names_field() {
        let err = loader(&[("LLM_MAX_CONCURRENT", "abc")]).load().unwrap_err();
        assert_eq!(err.field(), Some("llm_max_concurrent"));
        let message = err.to_string();
        assert!(message.contains("llm_max_concurrent"));
        assert!(message.contains("LLM_MAX_CONCURRENT"));
        assert!(message.contains("abc"));
    }

    #[test]
    fn test_first_invalid_field_is_reported() {
        let err = loader(&[("DEBUG", "nope"), ("LLM_ENABLED", "maybe")])
            .load()
            .unwrap_err();
        assert_eq!(err.field(), Some("llm_enabled"));
    }

    #[test]
    fn test_later_environment_entry_wins() {
        let settings = loader(&[("log_level", "DEBUG"), ("LOG_LEVEL", "ERROR")])
            .load()
            .unwrap();
        assert_eq!(settings.log_level(), "ERROR");
    }

    #[test]
    fn test_empty_string_overrides_default() {
        let settings = loader(&[("GROQ_PRIMARY_MODEL", "")]).load().unwrap();
        assert_eq!(settings.groq_primary_model(), "");
    }
}
