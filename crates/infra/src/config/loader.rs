//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `TIMELOG_TIMEZONE` is missing, falls back to loading from file
//! 3. Searches multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Whichever source wins, the timezone is checked against the IANA database
//! before the config is returned.
//!
//! ## Environment Variables
//! - `TIMELOG_TIMEZONE`: IANA timezone for wall-clock entries (required)
//! - `TIMELOG_MINUTE_POLICY`: `strict` (0-59) or `lenient` (0-60)
//! - `TIMELOG_MIN_DURATION_SECONDS`: Shortest interval that may be saved
//! - `TIMELOG_LOG_LEVEL`: Default log filter directive
//! - `TIMELOG_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./timelog.json` or `./timelog.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::env::VarError;
use std::path::{Path, PathBuf};

use timelog_domain::{
    Config, LoggingConfig, MinutePolicy, Result, ScheduleConfig, TimelogError,
};

const ENV_TIMEZONE: &str = "TIMELOG_TIMEZONE";
const ENV_MINUTE_POLICY: &str = "TIMELOG_MINUTE_POLICY";
const ENV_MIN_DURATION: &str = "TIMELOG_MIN_DURATION_SECONDS";
const ENV_LOG_LEVEL: &str = "TIMELOG_LOG_LEVEL";
const ENV_LOG_JSON: &str = "TIMELOG_LOG_JSON";

/// Load configuration with automatic fallback strategy
///
/// Loads from environment variables when `TIMELOG_TIMEZONE` is set, and
/// from a config file only when it is absent. An environment that is present
/// but invalid is an error, never a reason to fall back.
///
/// # Errors
/// Returns `TimelogError::Config` if:
/// - An environment variable has an invalid value
/// - No environment is set and no config file can be loaded
/// - File format is invalid
/// - A value (including the timezone) is invalid
pub fn load() -> Result<Config> {
    if let Err(VarError::NotPresent) = std::env::var(ENV_TIMEZONE) {
        tracing::debug!(var = ENV_TIMEZONE, "Not set, loading configuration from file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `TIMELOG_TIMEZONE` is required; every other variable falls back to
/// its default.
///
/// # Errors
/// Returns `TimelogError::Config` if the timezone is missing or unknown, or
/// another variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let timezone = env_var(ENV_TIMEZONE)?;

    let minute_policy = match std::env::var(ENV_MINUTE_POLICY) {
        Ok(raw) => raw.parse::<MinutePolicy>().map_err(TimelogError::Config)?,
        Err(_) => MinutePolicy::default(),
    };

    let defaults = ScheduleConfig::default();
    let min_duration_seconds = match std::env::var(ENV_MIN_DURATION) {
        Ok(raw) => raw.trim().parse::<i64>().map_err(|e| {
            TimelogError::Config(format!("Invalid minimum duration '{raw}': {e}"))
        })?,
        Err(_) => defaults.min_duration_seconds,
    };

    let logging_defaults = LoggingConfig::default();
    let level = std::env::var(ENV_LOG_LEVEL).unwrap_or(logging_defaults.level);
    let json = env_bool(ENV_LOG_JSON, logging_defaults.json);

    validated(Config {
        schedule: ScheduleConfig { timezone, minute_policy, min_duration_seconds },
        logging: LoggingConfig { level, json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, searches multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing sections and fields take their defaults.
///
/// # Errors
/// Returns `TimelogError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The configured timezone is unknown
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TimelogError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_file().ok_or_else(|| {
            TimelogError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TimelogError::Config(format!("Failed to read config file: {e}")))?;

    validated(parse_config(&contents, &config_path)?)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TimelogError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TimelogError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(TimelogError::Config(format!("Unsupported config format: {extension}"))),
    }
}

fn validated(config: Config) -> Result<Config> {
    config.schedule.tz()?;
    Ok(config)
}

/// Search multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    const NAMES: [&str; 6] = [
        "config.json",
        "config.toml",
        "timelog.json",
        "timelog.toml",
        "../config.json",
        "../config.toml",
    ];

    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        TimelogError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
