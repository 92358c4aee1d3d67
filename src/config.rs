//! Configuration module for Noticeboard.

use serde::Deserialize;
use std::path::Path;

use chrono_tz::Tz;

use crate::{NoticeboardError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Timezone used to render board timestamps (e.g., "Asia/Seoul", "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Allowed CORS origins. Empty means any origin without credentials.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timezone() -> String {
    "Asia/Seoul".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timezone: default_timezone(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Parse the configured timezone.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|_| NoticeboardError::Config(format!("unknown timezone: {}", self.timezone)))
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/noticeboard.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Listing configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when a listing request does not specify one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Upper bound for requested page sizes; larger requests are clamped.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

fn default_max_page_size() -> u32 {
    2000
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/noticeboard.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Listing configuration.
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(NoticeboardError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| NoticeboardError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `NOTICEBOARD_PORT`: Override the listening port
    /// - `NOTICEBOARD_DATABASE_PATH`: Override the database file path
    pub fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("NOTICEBOARD_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => eprintln!("Ignoring invalid NOTICEBOARD_PORT: {port}"),
            }
        }
        if let Ok(path) = std::env::var("NOTICEBOARD_DATABASE_PATH") {
            if !path.is_empty() {
                self.database.path = path;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The timezone is not a known IANA zone
    /// - The default page size is zero or larger than the maximum page size
    pub fn validate(&self) -> Result<()> {
        self.server.tz()?;

        let paging = &self.pagination;
        if paging.default_page_size == 0 || paging.default_page_size > paging.max_page_size {
            return Err(NoticeboardError::Config(format!(
                "default_page_size must be between 1 and max_page_size ({})",
                paging.max_page_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.timezone, "Asia/Seoul");
        assert!(config.server.cors_origins.is_empty());

        assert_eq!(config.database.path, "data/noticeboard.db");

        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.pagination.max_page_size, 2000);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, "logs/noticeboard.log");

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 3000
timezone = "UTC"
cors_origins = ["http://localhost:5173"]

[database]
path = "custom/boards.db"

[pagination]
default_page_size = 25
max_page_size = 100

[logging]
level = "debug"
file = "custom/logs/app.log"
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.timezone, "UTC");
        assert_eq!(config.server.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.database.path, "custom/boards.db");
        assert_eq!(config.pagination.default_page_size, 25);
        assert_eq!(config.pagination.max_page_size, 100);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "custom/logs/app.log");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[server]
port = 9000
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.path, "data/noticeboard.db");
        assert_eq!(config.pagination.default_page_size, 10);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.timezone, "Asia/Seoul");
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("this is not valid toml [[[");

        assert!(result.is_err());
        if let Err(NoticeboardError::Config(msg)) = result {
            assert!(msg.contains("config parse error"));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("nonexistent.toml");
        assert!(matches!(result, Err(NoticeboardError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[database]\npath = \"boards.db\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.database.path, "boards.db");
    }

    #[test]
    fn test_apply_env_overrides() {
        let original_port = std::env::var("NOTICEBOARD_PORT").ok();
        let original_path = std::env::var("NOTICEBOARD_DATABASE_PATH").ok();

        std::env::set_var("NOTICEBOARD_PORT", "9191");
        std::env::set_var("NOTICEBOARD_DATABASE_PATH", "env/boards.db");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.server.port, 9191);
        assert_eq!(config.database.path, "env/boards.db");

        // Invalid port leaves the previous value
        std::env::set_var("NOTICEBOARD_PORT", "not-a-port");
        config.apply_env_overrides();
        assert_eq!(config.server.port, 9191);

        match original_port {
            Some(val) => std::env::set_var("NOTICEBOARD_PORT", val),
            None => std::env::remove_var("NOTICEBOARD_PORT"),
        }
        match original_path {
            Some(val) => std::env::set_var("NOTICEBOARD_DATABASE_PATH", val),
            None => std::env::remove_var("NOTICEBOARD_DATABASE_PATH"),
        }
    }

    #[test]
    fn test_validate_unknown_timezone() {
        let mut config = Config::default();
        config.server.timezone = "Mars/Olympus".to_string();

        let result = config.validate();
        assert!(matches!(result, Err(NoticeboardError::Config(msg)) if msg.contains("Mars/Olympus")));
    }

    #[test]
    fn test_validate_page_size_bounds() {
        let mut config = Config::default();
        config.pagination.default_page_size = 0;
        assert!(config.validate().is_err());

        config.pagination.default_page_size = 50;
        config.pagination.max_page_size = 20;
        assert!(config.validate().is_err());

        config.pagination.max_page_size = 50;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_tz() {
        let config = ServerConfig::default();
        assert_eq!(config.tz().unwrap(), chrono_tz::Asia::Seoul);
    }

    #[test]
    fn test_bundled_config_file() {
        let config = Config::parse(include_str!("../config.toml")).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.pagination.default_page_size, 10);
        assert!(config.validate().is_ok());
    }
}
