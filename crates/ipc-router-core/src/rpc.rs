//! Chain RPC collaborator
//!
//! The provider only describes calls. Encoding, transport, timeouts and
//! retries belong to whatever implements [`ChainRpc`].

use std::sync::Arc;

use async_trait::async_trait;
use ipc_core::EthAddress;
use serde_json::Value;
use url::Url;

use crate::error::RpcError;
use crate::types::Abi;

/// A contract method invocation against a specific endpoint
#[derive(Debug, Clone)]
pub struct ContractCall {
    pub endpoint: Url,
    pub auth_token: Option<String>,
    /// Contract name the ABI was registered under
    pub contract: String,
    pub address: EthAddress,
    pub abi: Arc<Abi>,
    pub method: String,
    pub args: Vec<Value>,
    /// Account the call is sent from, when a signer is attached
    pub from: Option<EthAddress>,
}

/// Client able to execute contract calls on a chain
#[async_trait]
pub trait ChainRpc: Send + Sync {
    async fn call(&self, call: ContractCall) -> Result<Value, RpcError>;
}
