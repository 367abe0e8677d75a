//! IPC Types - addressing primitives for hierarchical subnets
//!
//! - [`DelegatedAddress`]: fixed-width, namespace-scoped actor address
//! - [`SubnetID`]: root chain id plus the path of subnet actors down to a leaf

// ========== Core Modules ==========
pub mod address;
pub mod subnet_id;

pub use address::{ActorID, DelegatedAddress, EAM_NAMESPACE, MAX_SUBADDRESS_LEN};
pub use subnet_id::SubnetID;

// Error types
pub type TypesResult<T> = Result<T, TypesError>;

#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    #[error("InvalidPayloadLength: {0}")]
    InvalidPayloadLength(usize),

    #[error("Root subnet has no subnet actor")]
    NoSubnetActor,

    #[error("Invalid subnet id {input:?}: {reason}")]
    InvalidSubnetId { input: String, reason: String },

    #[error("Invalid hex payload: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
