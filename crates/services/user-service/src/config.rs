//! User service configuration.

use std::env;

use common::DatabaseConfig;

/// Default log filter when nothing is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: lookup("USER_SERVICE_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: lookup("DATABASE_MIN_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
            log_level: lookup("USER_SERVICE_LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> UserServiceConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UserServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]);
        let defaults = UserServiceConfig::default();

        assert_eq!(config.database.url, defaults.database.url);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.min_connections, 1);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn service_url_wins_over_shared_url() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://shared/db"),
            ("USER_SERVICE_DATABASE_URL", "postgres://users/db"),
        ]);
        assert_eq!(config.database.url, "postgres://users/db");

        let config = config_from(&[("DATABASE_URL", "postgres://shared/db")]);
        assert_eq!(config.database.url, "postgres://shared/db");
    }

    #[test]
    fn bad_pool_sizes_fall_back() {
        let config = config_from(&[
            ("DATABASE_MAX_CONNECTIONS", "many"),
            ("DATABASE_MIN_CONNECTIONS", "2"),
            ("USER_SERVICE_LOG_LEVEL", "debug"),
        ]);

        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.min_connections, 2);
        assert_eq!(config.log_level, "debug");
    }
}
