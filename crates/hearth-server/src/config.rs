//! Server configuration read from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use hearth_core::{ArtifactPaths, DEFAULT_MODELS_DIR};

const DEFAULT_ADDR: &str = "127.0.0.1:5000";

pub const ADDR_VAR: &str = "HEARTH_ADDR";
pub const MODELS_DIR_VAR: &str = "HEARTH_MODELS_DIR";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {var} '{value}': {source}")]
    Addr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub models_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from any variable source; unset variables fall back
    /// to the fixed defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value.parse().map_err(|source| ConfigError::Addr {
            var: ADDR_VAR,
            value: addr_value.clone(),
            source,
        })?;

        let models_dir = lookup(MODELS_DIR_VAR)
            .unwrap_or_else(|| DEFAULT_MODELS_DIR.to_string())
            .into();

        Ok(Self { addr, models_dir })
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::in_dir(&self.models_dir)
    }
}
