//! Contract bindings handed out by a [`Connection`](crate::Connection)

use std::fmt;
use std::sync::Arc;

use ipc_core::EthAddress;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::abi::has_function;
use crate::error::{ProviderError, ProviderResult};
use crate::rpc::{ChainRpc, ContractCall};
use crate::types::Abi;

/// A named contract at an address, callable through the chain RPC client
#[derive(Clone)]
pub struct ContractBinding {
    pub(crate) name: String,
    pub(crate) address: EthAddress,
    pub(crate) endpoint: Url,
    pub(crate) auth_token: Option<String>,
    pub(crate) sender: Option<EthAddress>,
    pub(crate) abi: Arc<Abi>,
    pub(crate) rpc: Arc<dyn ChainRpc>,
}

impl ContractBinding {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &EthAddress {
        &self.address
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn abi(&self) -> &Abi {
        &self.abi
    }

    pub fn has_method(&self, method: &str) -> bool {
        has_function(&self.abi, method)
    }

    /// Invoke `method` with JSON-encoded `args`
    pub async fn call(&self, method: &str, args: Vec<Value>) -> ProviderResult<Value> {
        if !self.has_method(method) {
            return Err(ProviderError::UnknownMethod {
                contract: self.name.clone(),
                method: method.to_string(),
            });
        }

        debug!(
            contract = %self.name,
            address = %self.address,
            endpoint = %self.endpoint,
            method = %method,
            "Calling contract"
        );

        let call = ContractCall {
            endpoint: self.endpoint.clone(),
            auth_token: self.auth_token.clone(),
            contract: self.name.clone(),
            address: self.address.clone(),
            abi: Arc::clone(&self.abi),
            method: method.to_string(),
            args,
            from: self.sender.clone(),
        };

        Ok(self.rpc.call(call).await?)
    }
}

impl fmt::Debug for ContractBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractBinding")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}
