//! IPC provider
//!
//! Entry point for clients: owns the subnet registry and a resolver, and
//! hands out connections per subnet. Connections are built on demand and
//! never cached.

use std::sync::Arc;

use ipc_core::SubnetRegistry;
use ipc_types::SubnetID;
use serde_json::Value;
use tracing::info;

use crate::abi::AbiRegistry;
use crate::connection::Connection;
use crate::error::ProviderResult;
use crate::resolver::ConnectionResolver;
use crate::rpc::ChainRpc;
use crate::signer::SignerSource;
use crate::types::{GATEWAY_GETTER_FACET, LIST_SUBNETS_METHOD};

#[derive(Clone)]
pub struct IpcProvider {
    registry: Arc<SubnetRegistry>,
    resolver: ConnectionResolver,
}

impl IpcProvider {
    pub fn new(registry: SubnetRegistry, abis: Arc<dyn AbiRegistry>, rpc: Arc<dyn ChainRpc>) -> Self {
        info!(subnets = registry.len(), "Creating IPC provider");
        Self {
            registry: Arc::new(registry),
            resolver: ConnectionResolver::new(abis, rpc),
        }
    }

    /// Provider for a single built-in network
    pub fn new_for_network(
        network: &str,
        abis: Arc<dyn AbiRegistry>,
        rpc: Arc<dyn ChainRpc>,
    ) -> ProviderResult<Self> {
        let registry = SubnetRegistry::for_network(network)?;
        Ok(Self::new(registry, abis, rpc))
    }

    pub fn with_signer(mut self, signer: Arc<dyn SignerSource>) -> Self {
        self.resolver = self.resolver.with_signer(signer);
        self
    }

    pub fn registry(&self) -> &SubnetRegistry {
        &self.registry
    }

    /// Connection to `subnet`
    pub fn connection(&self, subnet: &SubnetID) -> ProviderResult<Connection> {
        self.resolver.resolve(&self.registry, subnet)
    }

    /// Child subnets registered with the gateway of `subnet`
    pub async fn list_subnets(&self, subnet: &SubnetID) -> ProviderResult<Value> {
        let getter = self.connection(subnet)?.gateway_facet(GATEWAY_GETTER_FACET)?;
        getter.call(LIST_SUBNETS_METHOD, Vec::new()).await
    }
}
