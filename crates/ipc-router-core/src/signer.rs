//! Optional signer resolution
//!
//! Key management lives outside this crate. A [`SignerSource`] only tells
//! the resolver which account to send from on a given subnet.

use ipc_core::EthAddress;
use ipc_types::SubnetID;

/// Supplies the sending account for a subnet
pub trait SignerSource: Send + Sync {
    fn sender_for(&self, subnet: &SubnetID) -> Option<EthAddress>;
}

/// Uses the same account on every subnet
#[derive(Debug, Clone)]
pub struct StaticSigner {
    address: EthAddress,
}

impl StaticSigner {
    pub fn new(address: EthAddress) -> Self {
        Self { address }
    }
}

impl SignerSource for StaticSigner {
    fn sender_for(&self, _subnet: &SubnetID) -> Option<EthAddress> {
        Some(self.address.clone())
    }
}
