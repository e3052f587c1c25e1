//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory
//! (built-in defaults when it is absent), then applies `DEBUG`,
//! `SECRET_KEY`, `DATABASE_URL`, `THINKALIKE_BIND` and
//! `THINKALIKE_LOG_LEVEL`. A `.env` file is loaded into the process
//! environment by `main` before any of this runs.
//!
//! # Module layout
//!
//! - **types**: Public configuration structs (`Config`, `DatabaseConfig`, …).
//! - **raw**: Raw TOML deserialization types with serde defaults; kept private.
//! - **load**: `load`, `load_from`, `load_default_from`, `EnvOverrides`, `parse_bool`, `expand_home`.

mod load;
mod raw;
mod types;

pub use load::{EnvOverrides, expand_home, load, load_default_from, load_from, parse_bool};
pub use types::*;

impl Config {
    /// Safe `Config` for tests: in-memory database, static graph.
    pub fn test_default() -> Self {
        Self {
            debug: false,
            secret_key: SecretKey::new("test-secret"),
            log_level: "info".into(),
            server: ServerConfig {
                bind: "127.0.0.1:0".into(),
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".into(),
                init_schema: true,
            },
            api: ApiConfig {
                graph_mode: GraphMode::Static,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use tempfile::{NamedTempFile, TempDir};

    const MINIMAL_TOML: &str = r#"
[app]
debug = false
secret_key = "from-file"

[server]
bind = "0.0.0.0:9000"

[database]
url = "sqlite:///./data/test.db"
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_basic_config() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), &EnvOverrides::default()).unwrap();
        assert!(!cfg.debug);
        assert_eq!(cfg.secret_key.expose(), "from-file");
        assert_eq!(cfg.server.bind, "0.0.0.0:9000");
        assert_eq!(cfg.database.url, "sqlite:///./data/test.db");
        assert!(cfg.database.init_schema);
        assert_eq!(cfg.api.graph_mode, GraphMode::Static);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn empty_file_uses_defaults() {
        let f = write_toml("");
        let cfg = load_from(f.path(), &EnvOverrides::default()).unwrap();
        assert_eq!(cfg.secret_key.expose(), "your-secret-key-here");
        assert_eq!(cfg.database.url, "sqlite:///./thinkalike.db");
        assert_eq!(cfg.server.bind, "127.0.0.1:8000");
    }

    #[test]
    fn env_overrides_win_over_file() {
        let f = write_toml(MINIMAL_TOML);
        let overrides = EnvOverrides {
            debug: Some("true".into()),
            secret_key: Some("from-env".into()),
            database_url: Some("sqlite::memory:".into()),
            bind: Some("127.0.0.1:1234".into()),
            log_level: None,
        };
        let cfg = load_from(f.path(), &overrides).unwrap();
        assert!(cfg.debug);
        assert_eq!(cfg.secret_key.expose(), "from-env");
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.server.bind, "127.0.0.1:1234");
    }

    #[test]
    fn debug_raises_default_log_level() {
        let f = write_toml("[app]\ndebug = true\n");
        let cfg = load_from(f.path(), &EnvOverrides::default()).unwrap();
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn explicit_log_level_beats_debug() {
        let f = write_toml("[app]\ndebug = true\nlog_level = \"warn\"\n");
        let cfg = load_from(f.path(), &EnvOverrides::default()).unwrap();
        assert_eq!(cfg.log_level, "warn");

        let overrides = EnvOverrides {
            log_level: Some("trace".into()),
            ..Default::default()
        };
        let cfg = load_from(f.path(), &overrides).unwrap();
        assert_eq!(cfg.log_level, "trace");
    }

    #[test]
    fn invalid_debug_value_errors() {
        let f = write_toml(MINIMAL_TOML);
        let overrides = EnvOverrides {
            debug: Some("maybe".into()),
            ..Default::default()
        };
        let msg = load_from(f.path(), &overrides).unwrap_err().to_string();
        assert!(msg.contains("DEBUG"));
    }

    #[test]
    fn bool_spellings() {
        for v in ["1", "true", "TRUE", "yes", "on"] {
            assert!(parse_bool("X", v).unwrap(), "{v}");
        }
        for v in ["0", "false", "No", "off"] {
            assert!(!parse_bool("X", v).unwrap(), "{v}");
        }
    }

    #[test]
    fn empty_graph_mode() {
        let f = write_toml("[api]\ngraph = \"empty\"\n");
        let cfg = load_from(f.path(), &EnvOverrides::default()).unwrap();
        assert_eq!(cfg.api.graph_mode, GraphMode::Empty);
    }

    #[test]
    fn unknown_graph_mode_errors() {
        let f = write_toml("[api]\ngraph = \"dynamic\"\n");
        assert!(load_from(f.path(), &EnvOverrides::default()).is_err());
    }

    #[test]
    fn secret_key_is_redacted_in_debug() {
        let cfg = Config::test_default();
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("test-secret"));
        assert!(dbg.contains("redacted"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = dirs::home_dir().expect("home dir must exist in test env");
        let expanded = expand_home("~/thinkalike.db");
        assert!(expanded.starts_with(&home));
        assert!(expanded.ends_with("thinkalike.db"));
    }

    #[test]
    fn relative_path_unchanged() {
        assert_eq!(expand_home("./thinkalike.db"), PathBuf::from("./thinkalike.db"));
    }

    #[test]
    fn missing_default_file_falls_back_to_builtins() {
        let dir = TempDir::new().unwrap();
        let cfg = load_default_from(dir.path(), &EnvOverrides::default()).unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1:8000");
        assert_eq!(cfg.database.url, "sqlite:///./thinkalike.db");
        assert_eq!(cfg.api.graph_mode, GraphMode::Static);
        assert!(cfg.database.init_schema);
        assert!(!cfg.debug);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn builtin_defaults_still_take_env_overrides() {
        let dir = TempDir::new().unwrap();
        let overrides = EnvOverrides {
            database_url: Some("sqlite::memory:".into()),
            bind: Some("0.0.0.0:8080".into()),
            ..Default::default()
        };
        let cfg = load_default_from(dir.path(), &overrides).unwrap();
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.server.bind, "0.0.0.0:8080");
    }

    #[test]
    fn default_file_under_dir_is_read() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("config")).unwrap();
        std::fs::write(dir.path().join("config/default.toml"), MINIMAL_TOML).unwrap();
        let cfg = load_default_from(dir.path(), &EnvOverrides::default()).unwrap();
        assert_eq!(cfg.server.bind, "0.0.0.0:9000");
        assert_eq!(cfg.secret_key.expose(), "from-file");
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(Path::new("/nonexistent/config.toml"), &EnvOverrides::default());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("config error"));
    }

    #[test]
    fn malformed_toml_errors() {
        let f = write_toml("[server\nbind = ");
        let msg = load_from(f.path(), &EnvOverrides::default()).unwrap_err().to_string();
        assert!(msg.contains("parse error"));
    }
}
