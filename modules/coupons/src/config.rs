//! Configuration for the coupons module

use serde::{Deserialize, Serialize};

/// Where coupons are kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// SeaORM connection to SQLite or Postgres
    #[default]
    Database,
    /// Process-local store, lost on restart
    Memory,
}

/// Coupons module configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Storage backend
    #[serde(default)]
    pub storage: StorageKind,

    /// Database connection string (ignored for memory storage)
    #[serde(default = "default_dsn")]
    pub dsn: String,

    /// Upper bound of the connection pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Apply pending migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageKind::default(),
            dsn: default_dsn(),
            max_connections: default_max_connections(),
            run_migrations: true,
        }
    }
}

impl Config {
    /// Configuration for the process-local store
    pub fn in_memory() -> Self {
        Self {
            storage: StorageKind::Memory,
            ..Self::default()
        }
    }
}

fn default_dsn() -> String {
    "sqlite://coupons.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let cfg: Config = serde_json::from_value(json!({"storage": "memory"})).unwrap();
        assert_eq!(cfg.storage, StorageKind::Memory);
        assert_eq!(cfg.dsn, "sqlite://coupons.db?mode=rwc");
        assert_eq!(cfg.max_connections, 5);
        assert!(cfg.run_migrations);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: Result<Config, _> = serde_json::from_value(json!({"cache": true}));
        assert!(result.is_err());
    }
}
