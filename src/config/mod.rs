use std::env;
use std::net::SocketAddr;

pub mod security;

pub use security::SecurityHeaders;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/fyyur";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Which [`crate::store::Store`] backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub store: StoreKind,
    pub production: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; malformed values fall back to
    /// their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
                tracing::warn!("Config: invalid DATABASE_MAX_CONNECTIONS '{}': {}", raw, e);
                DEFAULT_MAX_CONNECTIONS
            }),
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let default_addr = SocketAddr::from(([0, 0, 0, 0], 5000));
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
                tracing::warn!(
                    "Config: invalid BIND_ADDR '{}': {}, using {}",
                    raw,
                    e,
                    DEFAULT_BIND_ADDR
                );
                default_addr
            }),
            None => default_addr,
        };

        let store = match lookup("FYYUR_STORE").map(|v| v.trim().to_lowercase()) {
            Some(kind) if kind == "memory" => StoreKind::Memory,
            _ => StoreKind::Postgres,
        };

        let production = lookup("RUST_ENV")
            .map(|v| v.to_lowercase() == "production")
            .unwrap_or(false);

        Self {
            database_url,
            max_connections,
            bind_addr,
            store,
            production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.store, StoreKind::Postgres);
        assert!(!config.production);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DATABASE_URL", "postgres://db/fyyur_test"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("FYYUR_STORE", "Memory"),
            ("RUST_ENV", "PRODUCTION"),
        ]);
        assert_eq!(config.database_url, "postgres://db/fyyur_test");
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.store, StoreKind::Memory);
        assert!(config.production);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = config(&[("DATABASE_MAX_CONNECTIONS", "lots"), ("BIND_ADDR", "nowhere")]);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }
}
