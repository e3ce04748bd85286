//! Runtime configuration from environment variables.
//!
//! `BIZTIME_ENV=test` switches the connection target from `DATABASE_URL` to
//! `TEST_DATABASE_URL`. Call `dotenvy::dotenv()` before [`AppConfig::from_env`]
//! to pick up a local `.env` file.

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/biztime";
pub const DEFAULT_TEST_DATABASE_URL: &str = "postgres://localhost/biztime_test";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Default,
    Test,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: Environment,
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("BIZTIME_ENV").as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("test") => Environment::Test,
            _ => Environment::Default,
        };

        let database_url = match environment {
            Environment::Test => {
                lookup("TEST_DATABASE_URL").unwrap_or_else(|| DEFAULT_TEST_DATABASE_URL.into())
            }
            Environment::Default => {
                lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into())
            }
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            var: "BIND_ADDR",
            reason: format!("{bind_raw:?}: {e}"),
        })?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        var: "DB_MAX_CONNECTIONS",
                        reason: "must be at least 1".into(),
                    })
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: "DB_MAX_CONNECTIONS",
                        reason: format!("{raw:?}: {e}"),
                    })
                }
            },
        };

        Ok(AppConfig {
            environment,
            database_url,
            bind_addr,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_to_primary_database() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.environment, Environment::Default);
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.max_connections, 5);
    }

    #[test]
    fn test_flag_selects_test_database() {
        let cfg = config(&[
            ("BIZTIME_ENV", "test"),
            ("DATABASE_URL", "postgres://prod/biztime"),
            ("TEST_DATABASE_URL", "postgres://ci/biztime_test"),
        ])
        .unwrap();
        assert_eq!(cfg.environment, Environment::Test);
        assert_eq!(cfg.database_url, "postgres://ci/biztime_test");

        let cfg = config(&[("BIZTIME_ENV", "TEST")]).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_TEST_DATABASE_URL);
    }

    #[test]
    fn other_environments_use_primary_database() {
        let cfg = config(&[
            ("BIZTIME_ENV", "production"),
            ("DATABASE_URL", "postgres://prod/biztime"),
        ])
        .unwrap();
        assert_eq!(cfg.environment, Environment::Default);
        assert_eq!(cfg.database_url, "postgres://prod/biztime");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config(&[("BIND_ADDR", "not-an-addr")]).is_err());
        assert!(config(&[("DB_MAX_CONNECTIONS", "zero")]).is_err());
        assert!(config(&[("DB_MAX_CONNECTIONS", "0")]).is_err());
        assert_eq!(config(&[("DB_MAX_CONNECTIONS", "12")]).unwrap().max_connections, 12);
    }
}
