//! Configuration loading with env-var overrides.
//!
//! Reads a TOML file (or falls back to built-in defaults) and applies the
//! `DEBUG`, `SECRET_KEY`, `DATABASE_URL`, `THINKALIKE_BIND` and
//! `THINKALIKE_LOG_LEVEL` env overrides on top.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

use super::raw::RawConfig;
use super::types::*;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Environment values that win over the config file.
///
/// Collected once by [`EnvOverrides::from_env`]; tests build it directly
/// instead of mutating process env vars.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub debug: Option<String>,
    pub secret_key: Option<String>,
    pub database_url: Option<String>,
    pub bind: Option<String>,
    pub log_level: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            debug: env::var("DEBUG").ok(),
            secret_key: env::var("SECRET_KEY").ok(),
            database_url: env::var("DATABASE_URL").ok(),
            bind: env::var("THINKALIKE_BIND").ok(),
            log_level: env::var("THINKALIKE_LOG_LEVEL").ok(),
        }
    }
}

/// Load config from the given path, or `config/default.toml`, then apply env-var overrides.
/// If no path is given and `config/default.toml` does not exist, the built-in defaults are used.
pub fn load(config_path: Option<&str>) -> Result<Config, AppError> {
    let overrides = EnvOverrides::from_env();

    if let Some(path) = config_path {
        return load_from(Path::new(path), &overrides);
    }

    load_default_from(Path::new("."), &overrides)
}

/// Load `<dir>/config/default.toml`, or the built-in defaults when it is absent.
pub fn load_default_from(dir: &Path, overrides: &EnvOverrides) -> Result<Config, AppError> {
    let default_path = dir.join(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        load_from(&default_path, overrides)
    } else {
        resolve(RawConfig::default(), overrides)
    }
}

/// Internal loader: accepts an explicit path and overrides.
pub fn load_from(path: &Path, overrides: &EnvOverrides) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    resolve(parsed, overrides)
}

fn resolve(parsed: RawConfig, overrides: &EnvOverrides) -> Result<Config, AppError> {
    let debug = match overrides.debug.as_deref() {
        Some(v) => parse_bool("DEBUG", v)?,
        None => parsed.app.debug,
    };

    let log_level = overrides
        .log_level
        .clone()
        .or(parsed.app.log_level)
        .unwrap_or_else(|| if debug { "debug" } else { "info" }.to_string());

    let secret_key = overrides
        .secret_key
        .clone()
        .unwrap_or(parsed.app.secret_key);

    Ok(Config {
        debug,
        secret_key: SecretKey::new(secret_key),
        log_level,
        server: ServerConfig {
            bind: overrides.bind.clone().unwrap_or(parsed.server.bind),
        },
        database: DatabaseConfig {
            url: overrides
                .database_url
                .clone()
                .unwrap_or(parsed.database.url),
            init_schema: parsed.database.init_schema,
        },
        api: ApiConfig {
            graph_mode: parsed.api.graph.parse()?,
        },
    })
}

/// Parse a boolean env value the way `.env` files usually spell them.
pub fn parse_bool(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{name}: expected a boolean, got '{other}'"
        ))),
    }
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
