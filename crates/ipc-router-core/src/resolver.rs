//! Subnet to connection resolution
//!
//! ```text
//! SubnetID ──to_string()──► registry key ──lookup──► SubnetConfig
//!                                                        │
//!                               gateway present? ◄───────┘
//!                                     │
//!                                     ▼
//!                                 Connection
//! ```
//!
//! Resolution is a synchronous lookup plus construction. No network I/O
//! happens until a caller invokes a contract through the connection.

use std::sync::Arc;

use ipc_core::SubnetRegistry;
use ipc_types::SubnetID;
use tracing::{debug, trace, warn};

use crate::abi::AbiRegistry;
use crate::connection::Connection;
use crate::error::{ProviderError, ProviderResult};
use crate::rpc::ChainRpc;
use crate::signer::SignerSource;

/// Builds [`Connection`]s for configured subnets
#[derive(Clone)]
pub struct ConnectionResolver {
    abis: Arc<dyn AbiRegistry>,
    rpc: Arc<dyn ChainRpc>,
    signer: Option<Arc<dyn SignerSource>>,
}

impl ConnectionResolver {
    pub fn new(abis: Arc<dyn AbiRegistry>, rpc: Arc<dyn ChainRpc>) -> Self {
        Self {
            abis,
            rpc,
            signer: None,
        }
    }

    /// Attach a signer source; resolved connections send from its account
    pub fn with_signer(mut self, signer: Arc<dyn SignerSource>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Resolve `subnet` against `registry`
    pub fn resolve(&self, registry: &SubnetRegistry, subnet: &SubnetID) -> ProviderResult<Connection> {
        let key = subnet.to_string();
        trace!(subnet = %key, "Registry lookup");

        let Some(config) = registry.get(&key) else {
            warn!(subnet = %key, "Subnet not configured");
            return Err(ProviderError::SubnetNotConfigured(subnet.clone()));
        };

        let gateway = config
            .fevm
            .gateway_addr
            .clone()
            .ok_or_else(|| ProviderError::IncompleteConfiguration {
                subnet: subnet.clone(),
                field: "gateway_addr",
            })?;

        let mut connection = Connection::new(
            subnet.clone(),
            config.fevm.provider_http.clone(),
            gateway,
            Arc::clone(&self.abis),
            Arc::clone(&self.rpc),
        )
        .with_registry(config.fevm.registry_addr.clone())
        .with_auth_token(config.fevm.auth_token.clone());

        if let Some(signer) = &self.signer {
            match signer.sender_for(subnet) {
                Some(sender) => connection = connection.with_signer(sender),
                None => warn!(subnet = %key, "No signer available for subnet"),
            }
        }

        debug!(
            subnet = %key,
            network_type = %config.network_type,
            endpoint = %connection.endpoint(),
            gateway = %connection.gateway(),
            "Resolved subnet connection"
        );

        Ok(connection)
    }
}
