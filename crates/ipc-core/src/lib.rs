//! IPC Core - subnet configuration shared by clients
//!
//! This crate provides the built-in network table and the
//! [`SubnetRegistry`] that maps canonical subnet ids to connection
//! parameters.

pub mod config;
pub mod error;
pub mod network;
pub mod registry;

pub use config::{EthAddress, EvmSubnet, NetworkType, SubnetConfig};
pub use error::{ConfigError, ConfigResult};
pub use network::{for_network, known_networks, Network};
pub use registry::SubnetRegistry;
