//! Server configuration from environment variables
//!
//! - `BIND_ADDR`: listen address (default `0.0.0.0`)
//! - `PORT`: listen port (default `8080`)
//! - `SCORING_POLICY`: `strict` or `lenient` (default `strict`)
//!
//! Log filtering is configured separately through `RUST_LOG`.

use crate::error::ConfigError;
use crate::scorer::FieldPolicy;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub scoring_policy: FieldPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            scoring_policy: FieldPolicy::Strict,
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`; unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup("BIND_ADDR") {
            config.bind_addr = value.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    name: "BIND_ADDR",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup("PORT") {
            config.port = value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    name: "PORT",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup("SCORING_POLICY") {
            config.scoring_policy = value.parse().map_err(|reason| ConfigError::InvalidValue {
                name: "SCORING_POLICY",
                value: value.clone(),
                reason,
            })?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", "3000"),
            ("SCORING_POLICY", "lenient"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.scoring_policy, FieldPolicy::Lenient);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "PORT", .. }));
    }

    #[test]
    fn test_invalid_policy() {
        let err = Config::from_lookup(lookup_from(&[("SCORING_POLICY", "loose")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "SCORING_POLICY", .. }));
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = Config::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "BIND_ADDR", .. }));
    }
}
