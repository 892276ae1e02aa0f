//! Layered server configuration
//!
//! Precedence, lowest first: built-in defaults, YAML file, `COUPONS__*`
//! environment variables, CLI overrides.

use anyhow::{bail, Context, Result};
use coupons::StorageKind;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment prefix; `__` separates nested keys (`COUPONS__SERVER__PORT`)
pub const ENV_PREFIX: &str = "COUPONS__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Coupons module configuration
    #[serde(default)]
    pub coupons: coupons::Config,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Build the figment for defaults, optional YAML file and environment
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load layered configuration
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }

    /// Apply command-line overrides, which win over every other layer
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, mock: bool) {
        if let Some(port) = port {
            self.server.port = port;
        }
        if mock {
            self.coupons.storage = StorageKind::Memory;
        }
    }

    /// Reject settings that would only fail later at startup
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            bail!("server.host must not be empty");
        }
        if self.coupons.storage == StorageKind::Database && self.coupons.dsn.trim().is_empty() {
            bail!("coupons.dsn must be set when coupons.storage is 'database'");
        }
        if self.coupons.max_connections == 0 {
            bail!("coupons.max_connections must be at least 1");
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to render configuration as YAML")
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8087
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let cfg = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(cfg.server.host, "127.0.0.1");
            assert_eq!(cfg.server.port, 8087);
            assert_eq!(cfg.logging.format, LogFormat::Text);
            assert_eq!(cfg.coupons.storage, StorageKind::Database);
            Ok(())
        });
    }

    #[test]
    fn test_yaml_then_env_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "coupons.yaml",
                r#"
server:
  port: 9000
logging:
  format: json
coupons:
  storage: memory
  dsn: "sqlite://from-yaml.db"
"#,
            )?;
            jail.set_env("COUPONS__SERVER__PORT", "9100");

            let cfg = AppConfig::load(Some(Path::new("coupons.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(cfg.server.port, 9100);
            assert_eq!(cfg.logging.format, LogFormat::Json);
            assert_eq!(cfg.coupons.storage, StorageKind::Memory);
            assert_eq!(cfg.coupons.dsn, "sqlite://from-yaml.db");
            Ok(())
        });
    }

    #[test]
    fn test_unknown_module_key_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("bad.yaml", "coupons:\n  cache_ttl: 5\n")?;
            assert!(AppConfig::load(Some(Path::new("bad.yaml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(Some(1234), true);
        assert_eq!(cfg.server.port, 1234);
        assert_eq!(cfg.coupons.storage, StorageKind::Memory);
    }

    #[test]
    fn test_validate() {
        let mut cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());

        cfg.coupons.dsn = " ".to_string();
        assert!(cfg.validate().is_err());

        cfg.coupons.storage = StorageKind::Memory;
        assert!(cfg.validate().is_ok());
    }
}
