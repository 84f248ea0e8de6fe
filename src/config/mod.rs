use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),
    #[error("DB_PORT is not a valid port: {0}")]
    InvalidPort(String),
    #[error("unsupported DB_DRIVER: {0}")]
    UnknownDriver(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Postgres,
    MySql,
}

impl Driver {
    pub fn default_port(self) -> u16 {
        match self {
            Driver::Postgres => 5432,
            // TiDB listens on 4000 out of the box
            Driver::MySql => 4000,
        }
    }
}

impl FromStr for Driver {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Driver::Postgres),
            "mysql" | "tidb" => Ok(Driver::MySql),
            other => Err(ConfigError::UnknownDriver(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub driver: Driver,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub tls: bool,
}

impl DbConfig {
    /// Reads `DB_*` from the process environment. `.env` must already be loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let driver = match lookup("DB_DRIVER") {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => Driver::Postgres,
        };

        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        let port = match lookup("DB_PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            _ => driver.default_port(),
        };

        let tls = lookup("DB_TLS")
            .map(|val| matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(DbConfig {
            driver,
            host: required("DB_HOST")?,
            port,
            user: required("DB_USER")?,
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            name: required("DB_NAME")?,
            tls,
        })
    }
}
