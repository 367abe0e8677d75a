//! Error types for subnet configuration

use ipc_types::TypesError;
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Network name is not in the built-in table
    #[error("Config not found for network: {0}")]
    UnknownNetwork(String),

    #[error("Invalid endpoint {url:?}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid contract address: {0}")]
    InvalidAddress(String),

    /// Two config entries render to the same subnet id
    #[error("Subnet configured twice: {0}")]
    DuplicateSubnet(String),

    #[error("Invalid subnet id: {0}")]
    Types(#[from] TypesError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
