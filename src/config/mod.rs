//! Configuration loading for the catalog server and dashboard.
//!
//! Configuration is YAML with full defaults, so an empty file (or no file at
//! all) yields a working development setup: in-memory storage, the API on
//! `127.0.0.1:5001`, dashboard state in the current directory.
//!
//! ```yaml
//! server:
//!   bind_address: "127.0.0.1:5001"
//! storage:
//!   backend: mongodb
//!   mongodb:
//!     uri: "mongodb://127.0.0.1:27017"
//!     database: "catalog"
//! dashboard:
//!   api_base_url: "http://127.0.0.1:5001"
//!   data_dir: "/var/lib/catalog"
//! ```
//!
//! [`AppConfig::load`] reads the path in the `CATALOG_CONFIG` environment
//! variable when set, and falls back to defaults when it is not.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming the YAML config file to load.
pub const CONFIG_ENV_VAR: &str = "CATALOG_CONFIG";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub dashboard: DashboardConfig,
}

/// HTTP server settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the API binds to.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5001".to_string(),
        }
    }
}

/// Which storage backend the server uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Mongodb,
}

/// Storage settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Seed the in-memory backend with a small demo catalog on startup.
    pub seed_demo: bool,
    pub mongodb: MongoConfig,
}

/// MongoDB connection settings, used when `backend: mongodb`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://127.0.0.1:27017".to_string(),
            database: "catalog".to_string(),
        }
    }
}

/// Dashboard settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the catalog API the dashboard talks to.
    pub api_base_url: String,
    /// Directory for the dashboard's persisted state (category options).
    pub data_dir: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5001".to_string(),
            data_dir: ".".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path}"))?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from the file named by `CATALOG_CONFIG`, or the
    /// defaults when the variable is unset.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_yaml_file(&path),
            Err(_) => Ok(Self::default()),
        }
    }
}
