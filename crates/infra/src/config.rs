//! Configuration loading and representation.
//!
//! Everything comes from environment variables, read once at startup:
//!
//! | variable | default | meaning |
//! |---|---|---|
//! | `HOST` | `0.0.0.0` | bind address |
//! | `PORT` | `8000` | bind port |
//! | `DATABASE_URL` | unset | MongoDB connection string |
//! | `DATABASE_NAME` | unset | MongoDB database (required with `DATABASE_URL`) |
//! | `PRODUCT_COLLECTION` | `product` | collection holding the catalog |
//! | `USE_IN_MEMORY_STORE` | `false` | use the in-memory store when no database is set |

use thiserror::Error;

use crate::store::DEFAULT_COLLECTION;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value `{0}`")]
    InvalidPort(String),

    #[error("{0} must be set when {1} is set")]
    MissingVar(&'static str, &'static str),
}

/// Which document store backs the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Mongo {
        url: String,
        database: String,
        collection: String,
    },
    InMemory {
        collection: String,
    },
    /// No store: catalog routes answer "Database not configured".
    Unconfigured,
}

/// Which database variables were present, reported by store diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatabaseEnv {
    pub url_set: bool,
    pub name_set: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    pub database_env: DatabaseEnv,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let collection = get("PRODUCT_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string());
        let use_in_memory = get("USE_IN_MEMORY_STORE")
            .unwrap_or_else(|| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        let (url, name) = (get("DATABASE_URL"), get("DATABASE_NAME"));
        let database_env = DatabaseEnv {
            url_set: url.is_some(),
            name_set: name.is_some(),
        };

        let store = match (url, name) {
            (Some(url), Some(database)) => StoreConfig::Mongo {
                url,
                database,
                collection,
            },
            (Some(_), None) => return Err(ConfigError::MissingVar("DATABASE_NAME", "DATABASE_URL")),
            (None, _) if use_in_memory => StoreConfig::InMemory { collection },
            (None, _) => StoreConfig::Unconfigured,
        };

        Ok(Self {
            host,
            port,
            store,
            database_env,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
