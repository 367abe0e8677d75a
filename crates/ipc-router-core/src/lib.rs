//! IPC Router Core - reaching the right subnet
//!
//! Resolves hierarchical subnet ids to RPC connections and hands out
//! contract bindings on them.
//!
//! # Architecture
//!
//! ```text
//! SubnetID
//!     │
//!     ▼
//! ┌─────────────────────────┐
//! │   ConnectionResolver    │  canonical id → SubnetRegistry entry
//! │   (Which endpoint?)     │
//! └───────────┬─────────────┘
//!             │
//!             ▼
//! ┌─────────────────────────┐
//! │       Connection        │  name → AbiRegistry → ContractBinding
//! │   (Which contract?)     │
//! └───────────┬─────────────┘
//!             │
//!             ▼
//!         ChainRpc (external)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use ipc_router_core::{AbiStore, IpcProvider};
//! use ipc_types::SubnetID;
//!
//! let abis = Arc::new(AbiStore::load_ipc_contracts("./abis")?);
//! let provider = IpcProvider::new_for_network("calibration", abis, rpc)?;
//!
//! let subnets = provider.list_subnets(&SubnetID::new_root(314159)).await?;
//! ```

// Core modules
mod error;
mod types;

// Collaborators
mod abi;
mod rpc;
mod signer;

// Resolution
mod connection;
mod contract;
mod provider;
mod resolver;


// Re-exports: Error types
pub use error::{ProviderError, ProviderResult, RpcError};

// Re-exports: Core types
pub use types::{Abi, GATEWAY_GETTER_FACET, IPC_CONTRACTS, LIST_SUBNETS_METHOD};

// Re-exports: Collaborators
pub use abi::{has_function, AbiRegistry, AbiStore};
pub use rpc::{ChainRpc, ContractCall};
pub use signer::{SignerSource, StaticSigner};

// Re-exports: Resolution
pub use connection::Connection;
pub use contract::ContractBinding;
pub use provider::IpcProvider;
pub use resolver::ConnectionResolver;
