//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Default bridge JSON-RPC endpoint
pub const DEFAULT_RPC_URL: &str = "https://bridge.chaindefuser.com/rpc";

/// Bridge RPC connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL
    #[serde(default = "default_rpc_url")]
    pub url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Chain filter passed to `supported_tokens` (empty = all chains)
    #[serde(default)]
    pub chains: Vec<String>,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: default_rpc_url(),
            timeout_secs: default_timeout_secs(),
            chains: Vec::new(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bridge RPC settings
    #[serde(default)]
    pub rpc: RpcConfig,

    /// Token reference list to load instead of the bundled one
    #[serde(default)]
    pub token_list_path: Option<PathBuf>,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

fn default_api_port() -> u16 {
    19054
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc: RpcConfig::default(),
            token_list_path: None,
            api_port: default_api_port(),
        }
    }
}

impl AppConfig {
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a JSON config file
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Apply `DEFUSE_RPC_URL` / `DEFUSE_API_PORT` overrides from the environment
    pub fn apply_env_overrides(&mut self) -> Result<(), Error> {
        if let Ok(url) = std::env::var("DEFUSE_RPC_URL") {
            self.rpc.url = url;
        }
        if let Ok(port) = std::env::var("DEFUSE_API_PORT") {
            self.api_port = port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid DEFUSE_API_PORT: {}", port)))?;
        }
        Ok(())
    }
}
