//! Connection to a resolved subnet
//!
//! Holds the endpoint and contract addresses of one subnet. Owns no network
//! resources; every call goes through the shared [`ChainRpc`] client.

use std::fmt;
use std::sync::Arc;

use ipc_core::EthAddress;
use ipc_types::SubnetID;
use tracing::debug;
use url::Url;

use crate::abi::AbiRegistry;
use crate::contract::ContractBinding;
use crate::error::{ProviderError, ProviderResult};
use crate::rpc::ChainRpc;

#[derive(Clone)]
pub struct Connection {
    subnet: SubnetID,
    endpoint: Url,
    gateway: EthAddress,
    registry: Option<EthAddress>,
    auth_token: Option<String>,
    sender: Option<EthAddress>,
    abis: Arc<dyn AbiRegistry>,
    rpc: Arc<dyn ChainRpc>,
}

impl Connection {
    pub(crate) fn new(
        subnet: SubnetID,
        endpoint: Url,
        gateway: EthAddress,
        abis: Arc<dyn AbiRegistry>,
        rpc: Arc<dyn ChainRpc>,
    ) -> Self {
        Self {
            subnet,
            endpoint,
            gateway,
            registry: None,
            auth_token: None,
            sender: None,
            abis,
            rpc,
        }
    }

    pub(crate) fn with_registry(mut self, registry: Option<EthAddress>) -> Self {
        self.registry = registry;
        self
    }

    pub(crate) fn with_auth_token(mut self, auth_token: Option<String>) -> Self {
        self.auth_token = auth_token;
        self
    }

    /// Send calls from `sender`
    pub fn with_signer(mut self, sender: EthAddress) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn subnet(&self) -> &SubnetID {
        &self.subnet
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn gateway(&self) -> &EthAddress {
        &self.gateway
    }

    pub fn registry_address(&self) -> Option<&EthAddress> {
        self.registry.as_ref()
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn sender(&self) -> Option<&EthAddress> {
        self.sender.as_ref()
    }

    /// Bind the ABI registered as `name` to the contract at `address`
    pub fn contract(&self, name: &str, address: &EthAddress) -> ProviderResult<ContractBinding> {
        let abi = self
            .abis
            .lookup(name)
            .ok_or_else(|| ProviderError::AbiNotFound(name.to_string()))?;

        debug!(subnet = %self.subnet, contract = %name, address = %address, "Binding contract");

        Ok(ContractBinding {
            name: name.to_string(),
            address: address.clone(),
            endpoint: self.endpoint.clone(),
            auth_token: self.auth_token.clone(),
            sender: self.sender.clone(),
            abi,
            rpc: Arc::clone(&self.rpc),
        })
    }

    /// Bind a gateway facet at the subnet's gateway address
    pub fn gateway_facet(&self, name: &str) -> ProviderResult<ContractBinding> {
        self.contract(name, &self.gateway)
    }

    /// Bind a contract at the subnet's registry address
    pub fn registry_facet(&self, name: &str) -> ProviderResult<ContractBinding> {
        let registry = self
            .registry
            .as_ref()
            .ok_or_else(|| ProviderError::IncompleteConfiguration {
                subnet: self.subnet.clone(),
                field: "registry_addr",
            })?;
        self.contract(name, registry)
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("subnet", &self.subnet.to_string())
            .field("endpoint", &self.endpoint.as_str())
            .field("gateway", &self.gateway)
            .field("registry", &self.registry)
            .field("sender", &self.sender)
            .finish()
    }
}
