// Configuration module
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Connection string, either `postgres://...` or libpq key=value form.
    pub url: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    pub file_path: String,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_workers() -> usize {
    0
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let mut config: ServerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        config.apply_env_overrides()?;

        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides for sensitive configuration
    ///
    /// Supported environment variables:
    /// - PGRELAY_DATABASE_URL: Override database.url
    /// - PGRELAY_LOG_FILE_PATH: Override logging.file_path
    /// - PGRELAY_HOST: Override server.host
    /// - PGRELAY_PORT: Override server.port
    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        use std::env;

        // Connection string (sensitive - may carry credentials)
        if let Ok(url) = env::var("PGRELAY_DATABASE_URL") {
            self.database.url = url;
        }

        if let Ok(path) = env::var("PGRELAY_LOG_FILE_PATH") {
            self.logging.file_path = path;
        }

        if let Ok(host) = env::var("PGRELAY_HOST") {
            self.server.host = host;
        }

        if let Ok(port_str) = env::var("PGRELAY_PORT") {
            self.server.port = port_str
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid PGRELAY_PORT value: {}", port_str))?;
        }

        Ok(())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            ));
        }

        let valid_formats = ["compact", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_formats.join(", ")
            ));
        }

        if self.database.url.trim().is_empty() {
            return Err(anyhow::anyhow!("Database connection string cannot be empty"));
        }

        if self.database.connect_timeout_secs == 0 {
            return Err(anyhow::anyhow!("connect_timeout_secs cannot be 0"));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 12345,
                workers: 0,
            },
            database: DatabaseSettings {
                url: "host=localhost user=postgres dbname=postgres".to_string(),
                connect_timeout_secs: default_connect_timeout(),
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                file_path: "./logs/pgrelay.log".to_string(),
                log_to_console: true,
                format: "compact".to_string(),
            },
        }
    }
}
