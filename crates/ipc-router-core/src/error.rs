//! Error types for subnet resolution

use ipc_core::ConfigError;
use ipc_types::{SubnetID, TypesError};
use thiserror::Error;

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Provider error types
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No registry entry for the subnet's canonical id
    #[error("Subnet not configured: {0}")]
    SubnetNotConfigured(SubnetID),

    /// Registry entry lacks a field needed to build the connection
    #[error("Incomplete configuration for subnet {subnet}: missing {field}")]
    IncompleteConfiguration { subnet: SubnetID, field: &'static str },

    #[error("ABI not found: {0}")]
    AbiNotFound(String),

    #[error("Failed to load ABI {name}: {reason}")]
    AbiLoad { name: String, reason: String },

    #[error("Contract {contract} has no method {method}")]
    UnknownMethod { contract: String, method: String },

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Types(#[from] TypesError),
}

/// Failure reported by the chain RPC client
#[derive(Debug, Clone, Error)]
#[error("RPC call {method} on {endpoint} failed: {message}")]
pub struct RpcError {
    pub endpoint: String,
    pub method: String,
    pub message: String,
}

impl RpcError {
    pub fn new(endpoint: impl Into<String>, method: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: method.into(),
            message: message.into(),
        }
    }
}
