//! Embedded SQLite storage.
//!
//! The API opens one connection per request, runs a single query, and drops
//! the connection when the query returns. There is no pool. Blocking
//! rusqlite calls go through `spawn_blocking`.
//!
//! ## What lives here
//! - **Location**: [`DatabaseLocation::parse`] turns a `DATABASE_URL` into a path.
//! - **Connection factory**: [`open_conn`] (busy timeout).
//! - **Schema**: [`init_schema`] creates the four entity tables.
//! - **Probe**: [`probe_users`], the `SELECT * FROM Users` behind `GET /api/v1/graph`.

use std::path::PathBuf;
use std::time::Duration;

use rusqlite::Connection;
use tracing::debug;

use crate::config::{DatabaseConfig, expand_home};
use crate::error::AppError;

/// Schema version stored in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

const BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

// ── Location ──────────────────────────────────────────────────────────────────

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    /// Private to a single connection; gone once it closes.
    Memory,
}

impl DatabaseLocation {
    /// Accepts `sqlite:///<path>`, `sqlite://<path>`, `sqlite::memory:`,
    /// `:memory:` or a bare filesystem path. A leading `~` is expanded.
    pub fn parse(url: &str) -> Result<Self, AppError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::Config("DATABASE_URL must not be empty".into()));
        }
        if matches!(url, "sqlite::memory:" | ":memory:" | "sqlite:///:memory:" | "sqlite://:memory:") {
            return Ok(Self::Memory);
        }

        let path = if let Some(rest) = url.strip_prefix("sqlite:///") {
            rest
        } else if let Some(rest) = url.strip_prefix("sqlite://") {
            rest
        } else if let Some((scheme, _)) = url.split_once("://") {
            return Err(AppError::Config(format!(
                "unsupported database scheme '{scheme}' (only sqlite is embedded)"
            )));
        } else {
            url
        };

        if path.is_empty() {
            return Err(AppError::Config(format!("DATABASE_URL '{url}' has no path")));
        }
        Ok(Self::File(expand_home(path)))
    }
}

impl std::fmt::Display for DatabaseLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str(":memory:"),
        }
    }
}

// ── Connection helper ─────────────────────────────────────────────────────────

/// Open a SQLite connection. A missing file is created; a missing parent
/// directory is an error.
pub fn open_conn(location: &DatabaseLocation) -> Result<Connection, AppError> {
    let conn = match location {
        DatabaseLocation::File(path) => Connection::open(path),
        DatabaseLocation::Memory => Connection::open_in_memory(),
    }
    .map_err(|e| AppError::Storage(format!("open {location}: {e}")))?;

    conn.busy_timeout(BUSY_TIMEOUT)
        .map_err(|e| AppError::Storage(format!("set busy_timeout: {e}")))?;

    Ok(conn)
}

// ── Schema ────────────────────────────────────────────────────────────────────

/// Create the entity tables if they do not exist.
///
/// Reference columns (`user_id`, `user1_id`, `user2_id`) carry no
/// `REFERENCES` clause.
pub fn init_schema(conn: &Connection) -> Result<(), AppError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS Users (
            user_id INTEGER PRIMARY KEY,
            username TEXT NOT NULL,
            email TEXT NOT NULL,
            full_name TEXT,
            profile_picture_url TEXT,
            created_at TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            bio TEXT
        );

        CREATE TABLE IF NOT EXISTS Profiles (
            profile_id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            bio TEXT NOT NULL,
            birthdate TEXT NOT NULL,
            location TEXT,
            profile_picture_url TEXT
        );

        CREATE TABLE IF NOT EXISTS Connections (
            connection_id INTEGER PRIMARY KEY,
            user1_id INTEGER NOT NULL,
            user2_id INTEGER NOT NULL,
            status TEXT NOT NULL
                CHECK (status IN ('disconnected', 'connecting', 'connected')),
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS ValueInterests (
            value_interest_id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            category TEXT NOT NULL,
            value TEXT NOT NULL,
            importance INTEGER NOT NULL
        );
        ",
    )
    .map_err(|e| AppError::Storage(format!("initialize schema: {e}")))?;

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)
        .map_err(|e| AppError::Storage(format!("set user_version: {e}")))
}

/// Read `PRAGMA user_version`; `0` means the schema was never created.
pub fn schema_version(conn: &Connection) -> Result<i64, AppError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| AppError::Storage(format!("read user_version: {e}")))
}

// ── Probe ─────────────────────────────────────────────────────────────────────

/// Run `SELECT * FROM Users` and count the rows.
///
/// Fails with [`AppError::Storage`] when the table is missing.
pub fn probe_users(conn: &Connection) -> Result<usize, AppError> {
    let mut stmt = conn
        .prepare("SELECT * FROM Users")
        .map_err(|e| AppError::Storage(format!("load users: {e}")))?;
    let mut rows = stmt
        .query([])
        .map_err(|e| AppError::Storage(format!("load users: {e}")))?;

    let mut count = 0;
    while rows
        .next()
        .map_err(|e| AppError::Storage(format!("load users: {e}")))?
        .is_some()
    {
        count += 1;
    }
    Ok(count)
}

// ── Store handle ──────────────────────────────────────────────────────────────

/// Cheap-to-clone handle shared with the HTTP handlers. Holds no connection.
#[derive(Debug, Clone)]
pub struct Store {
    location: DatabaseLocation,
    init_schema: bool,
}

impl Store {
    pub fn new(location: DatabaseLocation, init_schema: bool) -> Self {
        Self { location, init_schema }
    }

    pub fn from_config(config: &DatabaseConfig) -> Result<Self, AppError> {
        Ok(Self::new(DatabaseLocation::parse(&config.url)?, config.init_schema))
    }

    pub fn location(&self) -> &DatabaseLocation {
        &self.location
    }

    /// Startup hook: create the schema in a file database when enabled.
    ///
    /// In-memory databases are skipped here; each request connection
    /// applies the schema itself.
    pub fn prepare(&self) -> Result<(), AppError> {
        match &self.location {
            DatabaseLocation::File(path) if self.init_schema => {
                let conn = open_conn(&self.location)?;
                init_schema(&conn)?;
                debug!(path = %path.display(), version = SCHEMA_VERSION, "schema ready");
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Create the schema unconditionally (used by `--init-db`).
    pub fn create_schema(&self) -> Result<(), AppError> {
        let conn = open_conn(&self.location)?;
        init_schema(&conn)
    }

    /// Open a fresh connection, probe the `Users` table, and close it.
    pub async fn count_users(&self) -> Result<usize, AppError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || {
            let conn = open_conn(&store.location)?;
            if store.location == DatabaseLocation::Memory && store.init_schema {
                init_schema(&conn)?;
            }
            probe_users(&conn)
        })
        .await
        .map_err(|e| AppError::Storage(format!("probe task failed: {e}")))?
    }
}
