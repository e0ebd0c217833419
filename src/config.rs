use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

/// Longest accepted session lifetime.
pub const MAX_EXPIRATION_DAYS: u64 = 3650;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Locations of the two JSON data files.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub users_path: String,
    pub events_path: String,
}

/// Signing settings for the session token handed out at login.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiration_days: u64,
}

impl SessionConfig {
    /// How long a login stays valid, both for the token and the server side
    /// session.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.expiration_days.saturating_mul(24 * 60 * 60))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (EVENTBOARD__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("storage.users_path", "data.json")?
            .set_default("storage.events_path", "events.json")?
            .set_default("session.issuer", "eventboard")?
            .set_default("session.audience", "eventboard")?
            .set_default("session.expiration_days", 7)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional, defaults and env can carry everything
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("EVENTBOARD")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("session.secret", secret)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.session.secret.len() < 32 {
            return Err("Session secret must be at least 32 characters long".to_string());
        }
        if !(1..=MAX_EXPIRATION_DAYS).contains(&self.session.expiration_days) {
            return Err(format!(
                "Session expiration_days must be between 1 and {MAX_EXPIRATION_DAYS}"
            ));
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.storage.users_path.is_empty() || self.storage.events_path.is_empty() {
            return Err("Storage paths must not be empty".to_string());
        }
        Ok(())
    }
}
