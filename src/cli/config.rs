//! Server configuration
//!
//! Built from an optional JSON file, then overridden by explicit flags.
//!
//! ```json
//! {
//!   "store": "./db.json",
//!   "host": "127.0.0.1",
//!   "port": 8080,
//!   "cors_origins": ["http://localhost:5173"],
//!   "id_strategy": "uuid"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entity::IdStrategy;
use crate::http_server::HttpServerConfig;

use super::args::ServeArgs;
use super::errors::{CliError, CliResult};

/// Configuration of the `serve` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON file the document is read from and written back to
    #[serde(default = "default_store")]
    pub store: PathBuf,

    #[serde(flatten)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub id_strategy: IdStrategy,
}

fn default_store() -> PathBuf {
    PathBuf::from("./db.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            http: HttpServerConfig::default(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Config file (if any) with flags applied on top
    pub fn resolve(args: &ServeArgs) -> CliResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(store) = &args.store {
            config.store = store.clone();
        }
        if let Some(port) = args.port {
            config.http.port = port;
        }
        if let Some(host) = &args.host {
            config.http.host = host.clone();
        }
        if let Some(strategy) = args.id_strategy {
            config.id_strategy = strategy;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.store.as_os_str().is_empty() {
            return Err(CliError::config_error("store path must not be empty"));
        }
        if self.http.host.is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }
        Ok(())
    }
}
