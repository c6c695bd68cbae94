//! Market-Scout - Settings Inspector
//!
//! Resolves the service's runtime settings exactly as the service does at
//! startup and prints them, so a deployment's configuration can be checked
//! before anything else starts. Any invalid value aborts with a non-zero exit
//! status and a message naming the field.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use market_scout::{
    config::{self, Field, Settings, SettingsLoader},
    logging, NAME, VERSION,
};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
}

/// Output format for the resolved settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Toml,
    Json,
}

impl OutputFormat {
    fn from_name(name: &str) -> Self {
        match name {
            "toml" => OutputFormat::Toml,
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Serialized view: redacted settings plus the derived origin list
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    settings: Settings,
    cors_origins: Vec<&'a str>,
}

/// Print the startup banner with version
fn print_banner() {
    println!(
        r#"
{cyan}{bold}  Market-Scout{reset}
{dim}  LLM-assisted marketplace search and browser automation{reset}
{dim}  Version: {version}{reset}
"#,
        cyan = colors::CYAN,
        bold = colors::BOLD,
        reset = colors::RESET,
        dim = colors::DIM,
        version = VERSION
    );
}

fn enabled_label(enabled: bool) -> String {
    if enabled {
        format!("{green}enabled{reset}", green = colors::GREEN, reset = colors::RESET)
    } else {
        format!("{yellow}disabled{reset}", yellow = colors::YELLOW, reset = colors::RESET)
    }
}

/// Print configuration summary
fn print_config_summary(settings: &Settings) {
    let shown = settings.redacted();

    println!(
        "{bold}{blue}Configuration:{reset}",
        bold = colors::BOLD,
        blue = colors::BLUE,
        reset = colors::RESET
    );
    for field in Field::ALL {
        let value = shown.display_value(field);
        let value = if value.is_empty() {
            format!("{dim}(unset){reset}", dim = colors::DIM, reset = colors::RESET)
        } else {
            value
        };
        println!(
            "  {dim}{:<22}{reset} {}",
            format!("{}:", field.env_key()),
            value,
            dim = colors::DIM,
            reset = colors::RESET
        );
    }
    println!();

    println!(
        "  {dim}LLM:{reset}            {}",
        enabled_label(settings.llm_enabled()),
        dim = colors::DIM,
        reset = colors::RESET
    );
    println!(
        "  {dim}Redis cache:{reset}    {}",
        enabled_label(settings.redis_url().is_some()),
        dim = colors::DIM,
        reset = colors::RESET
    );
    println!(
        "  {dim}Price history:{reset}  {}",
        enabled_label(settings.database_url().is_some()),
        dim = colors::DIM,
        reset = colors::RESET
    );
    println!(
        "  {dim}CORS origins:{reset}   {}",
        settings.cors_origins().len(),
        dim = colors::DIM,
        reset = colors::RESET
    );
    for origin in settings.cors_origins() {
        println!("    - {}", origin);
    }
    println!();
}

/// Build the CLI command parser
fn build_cli() -> Command {
    Command::new(NAME)
        .version(VERSION)
        .author("Market-Scout Team")
        .about("Resolve and print the service's runtime settings")
        .long_about(
            "Resolves settings the way the service does at startup:\n\
             - Compiled-in defaults\n\
             - Local override file (.env)\n\
             - Environment variables\n\
             Invalid values abort with a message naming the field.",
        )
        .arg(
            Arg::new("env-file")
                .short('e')
                .long("env-file")
                .value_name("FILE")
                .help("Override file to read (default: .env)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no-env-file")
                .long("no-env-file")
                .help("Ignore the override file")
                .action(ArgAction::SetTrue)
                .conflicts_with("env-file"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: text, toml, or json")
                .value_parser(["text", "toml", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress the banner")
                .action(ArgAction::SetTrue),
        )
}

/// Build the settings loader from parsed CLI arguments
fn loader_from_matches(matches: &clap::ArgMatches) -> SettingsLoader {
    if matches.get_flag("no-env-file") {
        return SettingsLoader::new().without_env_file();
    }
    match matches.get_one::<PathBuf>("env-file") {
        Some(path) => SettingsLoader::new().env_file(path.clone()),
        None => SettingsLoader::new(),
    }
}

fn render(settings: &Settings, format: OutputFormat) -> Result<String> {
    let report = Report {
        settings: settings.redacted(),
        cors_origins: settings.cors_origins(),
    };
    match format {
        OutputFormat::Toml => toml::to_string_pretty(&report).context("Failed to render TOML"),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&report).context("Failed to render JSON")
        }
        OutputFormat::Text => Ok(String::new()),
    }
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let format = matches
        .get_one::<String>("format")
        .map(|name| OutputFormat::from_name(name))
        .unwrap_or(OutputFormat::Text);
    let quiet = matches.get_flag("quiet");

    // Load configuration with full precedence chain
    let report = loader_from_matches(&matches)
        .load_report()
        .context("Failed to load configuration")?;
    let settings = config::init_global(report.settings.clone())
        .context("Failed to install configuration")?;

    // Logging depends on the settings, so load-time warnings are replayed here
    logging::init_tracing(settings).context("Failed to initialize logging")?;
    report.log_skipped();
    debug!(?settings, "configuration loaded");

    match format {
        OutputFormat::Text => {
            if !quiet {
                print_banner();
            }
            print_config_summary(settings);
        }
        OutputFormat::Toml | OutputFormat::Json => {
            println!("{}", render(settings, format)?);
        }
    }

    info!(
        llm_enabled = settings.llm_enabled(),
        origins = settings.cors_origins().len(),
        "configuration is valid"
    );
    Ok(())
}
