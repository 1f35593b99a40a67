//! Layered configuration loading using figment.
//!
//! Sources, highest priority first:
//! 1. Environment variables with the `SCOOP_` prefix (`SCOOP_BIND`, `SCOOP_DATABASE`)
//! 2. `scoop.toml` in the working directory, if present
//! 3. Built-in defaults
//!
//! Only where the shop listens and where it keeps its data can be changed;
//! the request handling itself has no knobs.

use std::net::SocketAddr;
use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Project-local config file name.
pub const CONFIG_FILE: &str = "scoop.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind: SocketAddr,

    /// SQLite database file. Created on first start.
    pub database: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            database: PathBuf::from("database.db"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// The provider chain. Public so tests can inspect or extend it.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("SCOOP_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let config = Config::load().expect("defaults extract");
            assert_eq!(config, Config::default());
            assert_eq!(config.bind.port(), 5000);
            Ok(())
        });
    }

    #[test]
    fn file_overrides_defaults_and_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, r#"
                bind = "0.0.0.0:8080"
                database = "shop.db"
            "#)?;

            let config = Config::load().expect("file extract");
            assert_eq!(config.bind, "0.0.0.0:8080".parse().expect("addr"));
            assert_eq!(config.database, PathBuf::from("shop.db"));

            jail.set_env("SCOOP_DATABASE", "/var/lib/scoop/shop.db");
            let config = Config::load().expect("env extract");
            assert_eq!(config.database, PathBuf::from("/var/lib/scoop/shop.db"));
            assert_eq!(config.bind.port(), 8080);
            Ok(())
        });
    }

    #[test]
    fn malformed_address_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("SCOOP_BIND", "not-an-address");
            assert!(matches!(Config::load(), Err(ConfigError::Figment(_))));
            Ok(())
        });
    }
}
