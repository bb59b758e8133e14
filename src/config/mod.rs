//! Server configuration loading

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphQL playground UI at /graphql/playground
    #[serde(default = "default_playground")]
    pub playground: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_playground() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            playground: default_playground(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// The address to bind, in `host:port` form
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
