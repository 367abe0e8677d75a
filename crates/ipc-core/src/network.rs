//! Built-in network table
//!
//! Static, process-wide and read-only. Entries are looked up by network
//! name and turned into typed [`Network`] values on demand.

use std::collections::HashMap;

use ipc_types::SubnetID;
use once_cell::sync::Lazy;
use tracing::trace;

use crate::config::{EvmSubnet, SubnetConfig};
use crate::error::{ConfigError, ConfigResult};

/// Raw table row
struct NetworkRow {
    name: &'static str,
    root_id: u64,
    provider_http: &'static str,
    registry_addr: &'static str,
    gateway_addr: &'static str,
}

static BUILTIN_NETWORKS: &[NetworkRow] = &[NetworkRow {
    name: "calibration",
    root_id: 314159,
    provider_http: "https://api.calibration.node.glif.io/rpc/v1",
    registry_addr: "0x0341fA160C66aBB112195192aE359a6D61df45cd",
    gateway_addr: "0xc7068Cea947035560128a6a6F4c8913523A5A44C",
}];

static NETWORK_INDEX: Lazy<HashMap<&'static str, &'static NetworkRow>> =
    Lazy::new(|| BUILTIN_NETWORKS.iter().map(|row| (row.name, row)).collect());

/// A named network: the subnet it denotes and how to reach it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub name: String,
    pub id: SubnetID,
    pub config: SubnetConfig,
}

/// Look up a network in the built-in table
pub fn for_network(name: &str) -> ConfigResult<Network> {
    let row = NETWORK_INDEX
        .get(name)
        .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))?;

    trace!(network = %name, root_id = row.root_id, "Built-in network lookup");

    let fevm = EvmSubnet::new(row.provider_http)?
        .with_registry(row.registry_addr.parse()?)
        .with_gateway(row.gateway_addr.parse()?);

    Ok(Network {
        name: row.name.to_string(),
        id: SubnetID::new_root(row.root_id),
        config: SubnetConfig::fevm(fevm),
    })
}

/// Names of the built-in networks, sorted
pub fn known_networks() -> Vec<&'static str> {
    let mut names: Vec<_> = NETWORK_INDEX.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkType;

    #[test]
    fn test_calibration() {
        let network = for_network("calibration").unwrap();

        assert_eq!(network.id, SubnetID::new_root(314159));
        assert_eq!(network.config.network_type, NetworkType::Fevm);
        assert_eq!(
            network.config.fevm.provider_http.as_str(),
            "https://api.calibration.node.glif.io/rpc/v1"
        );
        assert_eq!(
            network.config.fevm.gateway_addr.as_ref().unwrap().as_str(),
            "0xc7068Cea947035560128a6a6F4c8913523A5A44C"
        );
        assert_eq!(
            network.config.fevm.registry_addr.as_ref().unwrap().as_str(),
            "0x0341fA160C66aBB112195192aE359a6D61df45cd"
        );
        assert!(network.config.fevm.auth_token.is_none());
    }

    #[test]
    fn test_unknown_network() {
        let result = for_network("mainnet-that-does-not-exist");
        assert!(matches!(result, Err(ConfigError::UnknownNetwork(name)) if name == "mainnet-that-does-not-exist"));
    }

    #[test]
    fn test_builtin_table_is_valid() {
        for name in known_networks() {
            assert!(for_network(name).is_ok(), "{name} has an invalid entry");
        }
        assert!(known_networks().contains(&"calibration"));
    }
}
