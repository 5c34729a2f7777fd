//! Web server configuration.
//!
//! Resolved once at startup and passed into the server; request handlers
//! never read the process environment.

use std::path::PathBuf;

use thiserror::Error;

pub const ADDR_VAR: &str = "PETCLINIC_ADDR";
pub const DB_PATH_VAR: &str = "PETCLINIC_DB_PATH";
pub const SEED_VAR: &str = "PETCLINIC_SEED";

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DB_PATH: &str = "petclinic.db";

/// Path value selecting an in-memory database.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("{var} must be true/false/1/0, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseLocation {
    InMemory,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WebConfig {
    /// Socket address to listen on
    pub addr: String,
    pub database: DatabaseLocation,
    /// Load sample owners, pets and vets at startup
    pub seed: bool,
}

impl WebConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.into());
        if addr.trim().is_empty() {
            return Err(ConfigError::Empty { var: ADDR_VAR });
        }

        let db_path = lookup(DB_PATH_VAR).unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let database = match db_path.trim() {
            "" => return Err(ConfigError::Empty { var: DB_PATH_VAR }),
            IN_MEMORY => DatabaseLocation::InMemory,
            path => DatabaseLocation::File(PathBuf::from(path)),
        };

        let seed = match lookup(SEED_VAR) {
            None => false,
            Some(value) => parse_bool(SEED_VAR, &value)?,
        };

        Ok(Self { addr, database, seed })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
