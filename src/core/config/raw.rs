//! Raw TOML deserialization types.
//!
//! These structs mirror the TOML file shape and use `serde` defaults.
//! The `load` module converts them into the public `types` structs.

use serde::Deserialize;

// ── Top-level ────────────────────────────────────────────────────────────────

/// Raw TOML shape: serde target before resolution.
#[derive(Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub app: RawApp,
    #[serde(default)]
    pub server: RawServer,
    #[serde(default)]
    pub database: RawDatabase,
    #[serde(default)]
    pub api: RawApi,
}

#[derive(Deserialize)]
pub(super) struct RawApp {
    #[serde(default = "default_false")]
    pub debug: bool,
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    /// Unset means "info", or "debug" when `debug = true`.
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for RawApp {
    fn default() -> Self {
        Self {
            debug: false,
            secret_key: default_secret_key(),
            log_level: None,
        }
    }
}

// ── Server ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawServer {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for RawServer {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

// ── Database ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawDatabase {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_true")]
    pub init_schema: bool,
}

impl Default for RawDatabase {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            init_schema: true,
        }
    }
}

// ── API ──────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawApi {
    /// `"static"` or `"empty"`.
    #[serde(default = "default_graph_mode")]
    pub graph: String,
}

impl Default for RawApi {
    fn default() -> Self {
        Self { graph: default_graph_mode() }
    }
}

// ── Defaults ─────────────────────────────────────────────────────────────────

pub(super) fn default_secret_key() -> String { "your-secret-key-here".to_string() }
pub(super) fn default_bind() -> String { "127.0.0.1:8000".to_string() }
pub(super) fn default_database_url() -> String { "sqlite:///./thinkalike.db".to_string() }
pub(super) fn default_graph_mode() -> String { "static".to_string() }

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}
