//! Common types for the provider
//!
//! Centralizes contract names and aliases shared across modules.

/// Contract ABI as found under the `abi` key of a compiled contract JSON
pub type Abi = serde_json::Value;

/// IPC contracts whose ABIs a client normally loads
pub const IPC_CONTRACTS: [&str; 10] = [
    "Gateway",
    "GatewayDiamond",
    "GatewayGetterFacet",
    "GatewayManagerFacet",
    "GatewayRouterFacet",
    "SubnetActor",
    "SubnetActorDiamond",
    "SubnetActorGetterFacet",
    "SubnetActorManagerFacet",
    "SubnetRegistry",
];

/// Read-only gateway facet
pub const GATEWAY_GETTER_FACET: &str = "GatewayGetterFacet";

/// Gateway getter listing the child subnets registered with it
pub const LIST_SUBNETS_METHOD: &str = "listSubnets";
