//! Delegated (f4) actor addresses
//!
//! The sub-address is stored left-aligned in a zero-padded buffer of
//! `MAX_SUBADDRESS_LEN` bytes. The full buffer is the wire form: it is what
//! gets hex-encoded and what identity is defined over.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{TypesError, TypesResult};

/// Max length of f4 sub addresses.
pub const MAX_SUBADDRESS_LEN: usize = 54;

/// Namespace of the Ethereum Address Manager actor.
pub const EAM_NAMESPACE: ActorID = 10;

/// Actor identifier used as an address namespace
pub type ActorID = u64;

/// Namespace-scoped actor address with a fixed-width payload
#[derive(Clone)]
pub struct DelegatedAddress {
    namespace: ActorID,
    length: usize,
    buffer: [u8; MAX_SUBADDRESS_LEN],
}

impl DelegatedAddress {
    /// Create an address from a namespace and a sub-address of at most
    /// `MAX_SUBADDRESS_LEN` bytes.
    pub fn new(namespace: ActorID, sub_address: &[u8]) -> TypesResult<Self> {
        let length = sub_address.len();
        if length > MAX_SUBADDRESS_LEN {
            return Err(TypesError::InvalidPayloadLength(length));
        }

        let mut buffer = [0u8; MAX_SUBADDRESS_LEN];
        buffer[..length].copy_from_slice(sub_address);

        Ok(Self {
            namespace,
            length,
            buffer,
        })
    }

    /// Decode a `0x`-prefixed (or bare) hex payload into an address.
    pub fn from_hex(namespace: ActorID, payload: &str) -> TypesResult<Self> {
        let digits = payload.strip_prefix("0x").unwrap_or(payload);
        let bytes = hex::decode(digits)?;
        Self::new(namespace, &bytes)
    }

    pub fn namespace(&self) -> ActorID {
        self.namespace
    }

    /// Logical length of the sub-address
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The sub-address as it was given at construction
    pub fn sub_address(&self) -> &[u8] {
        &self.buffer[..self.length]
    }

    /// The full zero-padded payload
    pub fn buffer(&self) -> &[u8; MAX_SUBADDRESS_LEN] {
        &self.buffer
    }

    /// Lowercase `0x` hex of the entire padded buffer.
    pub fn ethereum_address(&self) -> String {
        format!("0x{}", hex::encode(self.buffer))
    }
}

// Identity covers the whole padded buffer, not the logical length: `[1, 2]`
// and `[1, 2, 0]` under one namespace compare equal.
impl PartialEq for DelegatedAddress {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace && self.buffer == other.buffer
    }
}

impl Eq for DelegatedAddress {}

impl Hash for DelegatedAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.buffer.hash(state);
    }
}

impl fmt::Debug for DelegatedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatedAddress")
            .field("namespace", &self.namespace)
            .field("sub_address", &hex::encode(self.sub_address()))
            .finish()
    }
}

impl fmt::Display for DelegatedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ethereum_address())
    }
}
