use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration.
///
/// Loadable from a TOML file; any field missing from the file falls back to
/// its default.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Path of the JSON data file.
    pub data_path: PathBuf,
    /// Directory served for every request that does not hit `/data`.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().unwrap(),
            data_path: PathBuf::from("data.json"),
            static_dir: PathBuf::from("website"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&text).map_err(|e| ServerError::Config(e.to_string()))
    }
}
