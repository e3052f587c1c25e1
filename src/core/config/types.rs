//! Public configuration types.
//!
//! These are the resolved, ready-to-use structs the server consumes.
//! Raw TOML deserialization types live in `raw.rs`.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

// ── Server ───────────────────────────────────────────────────────────────────

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the axum listener to.
    pub bind: String,
}

// ── Database ─────────────────────────────────────────────────────────────────

/// Embedded database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string, e.g. `sqlite:///./thinkalike.db`.
    pub url: String,
    /// Create the tables at startup if they are missing.
    pub init_schema: bool,
}

// ── API ──────────────────────────────────────────────────────────────────────

/// Which payload `GET /api/v1/graph` serves once the storage probe passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphMode {
    /// Fixed four-node demo graph.
    #[default]
    Static,
    /// `{ "nodes": [], "edges": [] }`.
    Empty,
}

impl FromStr for GraphMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "empty" => Ok(Self::Empty),
            other => Err(AppError::Config(format!(
                "unknown graph mode '{other}' (expected \"static\" or \"empty\")"
            ))),
        }
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => f.write_str("static"),
            Self::Empty => f.write_str("empty"),
        }
    }
}

/// API surface configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub graph_mode: GraphMode,
}

// ── Secrets ──────────────────────────────────────────────────────────────────

/// Application secret. Never printed; `Debug` shows a placeholder.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([redacted])")
    }
}

// ── Top-level ────────────────────────────────────────────────────────────────

/// Fully-resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub debug: bool,
    /// From `SECRET_KEY`. Not used for any cryptography yet.
    pub secret_key: SecretKey,
    pub log_level: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
}
