//! Server configuration read from the environment.

use crate::server::error::config::ConfigError;

static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";
static DEFAULT_HOST: &str = "0.0.0.0";
static DEFAULT_PORT: u16 = 3000;

static SUPPORTED_SCHEMES: [&str; 3] = ["sqlite:", "postgres://", "postgresql://"];

/// Settings needed to connect to the database and serve the API.
pub struct Config {
    /// SeaORM connection string for SQLite or PostgreSQL
    pub database_url: String,
    /// Address the listener binds to
    pub host: String,
    /// Port the listener binds to
    pub port: u16,
}

impl Config {
    /// Reads the server configuration from environment variables.
    ///
    /// - `DATABASE_URL` - SQLite or PostgreSQL connection string, defaults to a SQLite file
    ///   under `/tmp`
    /// - `PORT` - Port to listen on, defaults to 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => check_database_url(url)?,
            Err(_) => DEFAULT_DATABASE_URL.to_string(),
        };

        let port = match std::env::var("PORT") {
            Ok(port) => parse_port(&port)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host: DEFAULT_HOST.to_string(),
            port,
        })
    }

    /// `host:port` for the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn check_database_url(url: String) -> Result<String, ConfigError> {
    let url = url.trim().to_string();

    if SUPPORTED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        Ok(url)
    } else {
        Err(ConfigError::UnsupportedDatabaseUrl(url))
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: "PORT".to_string(),
            reason: e.to_string(),
        })
}
