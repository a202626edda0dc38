//! Configuration for Stockcast

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Runtime environment the server was started in.
///
/// Interactive API docs are only mounted in `Development`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Whether Swagger UI and the OpenAPI document are served.
    pub fn docs_enabled(self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server port
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Runtime environment
    #[serde(default)]
    pub environment: Environment,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            environment: Environment::default(),
        }
    }
}

impl Config {
    /// Load config from `stockcast.toml` in the working directory, or fall
    /// back to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let config_path = Path::new("stockcast.toml");

        if config_path.exists() {
            Self::load_from(config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

// Default value functions

fn default_http_port() -> u16 {
    8080
}
