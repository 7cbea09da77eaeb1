use std::{num::NonZeroU32, time::Duration};

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string, e.g. `sqlite://data.db`.
    pub database_url: String,
    /// Pool size. Zero is rejected at parse time.
    pub database_max_connections: NonZeroU32,
    pub server_host: String,
    pub server_port: u16,
    /// Interval of the background simulation loop. `None` when
    /// `SIMULATE_INTERVAL_SECS` is 0, which disables the loop.
    pub simulate_interval: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let simulate_interval_secs: u64 = optional("SIMULATE_INTERVAL_SECS", "0")
            .parse()
            .context("SIMULATE_INTERVAL_SECS must be a non-negative integer")?;

        Ok(Self {
            database_url: optional("DATABASE_URL", "sqlite://data.db"),
            database_max_connections: optional("DATABASE_MAX_CONNECTIONS", "5")
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            server_host: optional("SERVER_HOST", "127.0.0.1"),
            server_port: optional("SERVER_PORT", "5000")
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            simulate_interval: (simulate_interval_secs > 0)
                .then(|| Duration::from_secs(simulate_interval_secs)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let c = config_from(&[]).unwrap();
        assert_eq!(c.database_url, "sqlite://data.db");
        assert_eq!(c.database_max_connections.get(), 5);
        assert_eq!(c.server_host, "127.0.0.1");
        assert_eq!(c.server_port, 5000);
        assert!(c.simulate_interval.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let c = config_from(&[
            ("DATABASE_URL", "sqlite:///var/lib/sensors.db"),
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "8080"),
            ("SIMULATE_INTERVAL_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(c.database_url, "sqlite:///var/lib/sensors.db");
        assert_eq!(c.server_host, "0.0.0.0");
        assert_eq!(c.server_port, 8080);
        assert_eq!(c.simulate_interval, Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_interval_disables_simulation() {
        let c = config_from(&[("SIMULATE_INTERVAL_SECS", "0")]).unwrap();
        assert!(c.simulate_interval.is_none());
    }

    #[test]
    fn invalid_port_errors() {
        let err = config_from(&[("SERVER_PORT", "99999")]).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));
    }

    #[test]
    fn zero_max_connections_errors() {
        let err = config_from(&[("DATABASE_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_MAX_CONNECTIONS"));
    }

    #[test]
    fn explicit_max_connections_is_used() {
        let c = config_from(&[("DATABASE_MAX_CONNECTIONS", "12")]).unwrap();
        assert_eq!(c.database_max_connections.get(), 12);
    }

    #[test]
    fn negative_interval_errors() {
        let err = config_from(&[("SIMULATE_INTERVAL_SECS", "-1")]).unwrap_err();
        assert!(err.to_string().contains("SIMULATE_INTERVAL_SECS"));
    }
}
