//! TOML configuration parsing and validation.
//!
//! ```toml
//! [db]
//! path = "./data/arcanum.sqlite"
//!
//! [server]
//! bind = "127.0.0.1:5000"
//! auto_seed = true
//! max_connections = 5
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Load the built-in dataset at startup when the store is empty.
    #[serde(default = "default_auto_seed")]
    pub auto_seed: bool,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            auto_seed: default_auto_seed(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}
fn default_auto_seed() -> bool {
    true
}
fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Config pointing at `path` with default server settings.
    pub fn for_database(path: impl Into<PathBuf>) -> Self {
        Self {
            db: DbConfig { path: path.into() },
            server: ServerConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.db.path.as_os_str().is_empty() {
            anyhow::bail!("db.path must not be empty");
        }

        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("server.bind is not a socket address: '{}'", self.server.bind))?;

        if self.server.max_connections < 1 {
            anyhow::bail!("server.max_connections must be >= 1");
        }

        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let cfg: Config = toml::from_str("[db]\npath = \"/tmp/a.sqlite\"\n").unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1:5000");
        assert!(cfg.server.auto_seed);
        assert_eq!(cfg.server.max_connections, 5);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_rejects_bad_bind() {
        let cfg: Config = toml::from_str(
            "[db]\npath = \"/tmp/a.sqlite\"\n\n[server]\nbind = \"localhost\"\n",
        )
        .unwrap();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("server.bind"));
    }

    #[test]
    fn test_rejects_zero_connections() {
        let mut cfg = Config::for_database("/tmp/a.sqlite");
        cfg.server.max_connections = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
