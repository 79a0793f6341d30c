//! Process settings read from the environment.

use crate::error::ConfigError;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://resource_hub.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_LOG_FILTER: &str = "resource_hub=info,tower_http=info";

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    /// sqlx connection string, e.g. `sqlite://resource_hub.db` or `sqlite::memory:`.
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub bind_addr: SocketAddr,
    /// Populate the kanji reference tables with the built-in sample at startup.
    pub seed_kanji: bool,
    pub log_filter: String,
}

impl AppConfig {
    /// Read `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`, `BIND_ADDR`, `SEED_KANJI` and `RUST_LOG`.
    /// Unset variables fall back to defaults; set but malformed ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value: v,
                    })
                }
            },
            None => 5,
        };
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "BIND_ADDR",
                value: bind_raw.clone(),
            })?;
        let seed_kanji = match lookup("SEED_KANJI") {
            Some(v) => parse_flag(&v).ok_or(ConfigError::InvalidValue {
                key: "SEED_KANJI",
                value: v,
            })?,
            None => false,
        };
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        Ok(AppConfig {
            database: DatabaseSettings {
                url,
                max_connections,
            },
            bind_addr,
            seed_kanji,
            log_filter,
        })
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(!cfg.seed_kanji);
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("SEED_KANJI", "true"),
        ])
        .unwrap();
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.database.max_connections, 2);
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert!(cfg.seed_kanji);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            config_from(&[("DATABASE_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::InvalidValue { key: "DATABASE_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            config_from(&[("BIND_ADDR", "nowhere")]),
            Err(ConfigError::InvalidValue { key: "BIND_ADDR", .. })
        ));
        assert!(matches!(
            config_from(&[("SEED_KANJI", "maybe")]),
            Err(ConfigError::InvalidValue { key: "SEED_KANJI", .. })
        ));
    }
}
