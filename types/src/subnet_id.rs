//! Hierarchical subnet identifiers
//!
//! A `SubnetID` is a root chain id plus the ordered path of subnet actor
//! addresses from the root down to the subnet. Its canonical string form is
//!
//! ```text
//! r<root-id>(/<address-hex>)*
//! ```
//!
//! which doubles as the key into the subnet registry.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::address::{DelegatedAddress, EAM_NAMESPACE};
use crate::{TypesError, TypesResult};

/// Identifier of a (possibly nested) subnet
#[derive(Debug, Clone)]
pub struct SubnetID {
    root: u64,
    children: Vec<DelegatedAddress>,
}

impl SubnetID {
    /// Identifier of a root chain
    pub fn new_root(root_id: u64) -> Self {
        Self {
            root: root_id,
            children: Vec::new(),
        }
    }

    /// Child of `parent` controlled by `subnet_actor`. `parent` is left untouched.
    pub fn new_from_parent(parent: &SubnetID, subnet_actor: DelegatedAddress) -> Self {
        let mut children = Vec::with_capacity(parent.children.len() + 1);
        children.extend_from_slice(&parent.children);
        children.push(subnet_actor);
        Self {
            root: parent.root,
            children,
        }
    }

    pub fn is_root(&self) -> bool {
        self.children.is_empty()
    }

    pub fn root_id(&self) -> u64 {
        self.root
    }

    /// Subnet actors from the root down to this subnet
    pub fn children(&self) -> &[DelegatedAddress] {
        &self.children
    }

    /// Number of levels below the root
    pub fn depth(&self) -> usize {
        self.children.len()
    }

    /// The subnet one level up, or `None` for a root.
    pub fn parent(&self) -> Option<SubnetID> {
        let (_, ancestors) = self.children.split_last()?;
        Some(Self {
            root: self.root,
            children: ancestors.to_vec(),
        })
    }

    /// The actor controlling this subnet (the last path element).
    pub fn subnet_actor(&self) -> TypesResult<&DelegatedAddress> {
        self.children.last().ok_or(TypesError::NoSubnetActor)
    }

    pub fn subnet_actor_eth_addr(&self) -> TypesResult<String> {
        Ok(self.subnet_actor()?.ethereum_address())
    }

    /// True when `other` lives strictly below this subnet.
    pub fn is_ancestor_of(&self, other: &SubnetID) -> bool {
        self.root == other.root
            && self.children.len() < other.children.len()
            && self.children.iter().zip(&other.children).all(|(a, b)| a == b)
    }
}

impl PartialEq for SubnetID {
    fn eq(&self, other: &Self) -> bool {
        if self.root != other.root || self.children.len() != other.children.len() {
            return false;
        }
        self.children.iter().zip(&other.children).all(|(a, b)| a == b)
    }
}

impl Eq for SubnetID {}

impl Hash for SubnetID {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root.hash(state);
        self.children.hash(state);
    }
}

impl fmt::Display for SubnetID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.root)?;
        for child in &self.children {
            write!(f, "/{}", child.ethereum_address())?;
        }
        Ok(())
    }
}

/// Parses the canonical form. Namespaces are not part of the string, so
/// every path element comes back under `EAM_NAMESPACE`, with trailing zero
/// bytes treated as padding.
impl FromStr for SubnetID {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| TypesError::InvalidSubnetId {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = s.split('/');
        let root = segments
            .next()
            .and_then(|r| r.strip_prefix('r'))
            .ok_or_else(|| invalid("missing 'r' root prefix"))?
            .parse::<u64>()
            .map_err(|e| invalid(&e.to_string()))?;

        let mut children = Vec::new();
        for segment in segments {
            if segment.is_empty() {
                return Err(invalid("empty path segment"));
            }
            let digits = segment.strip_prefix("0x").unwrap_or(segment);
            let bytes = hex::decode(digits).map_err(|e| invalid(&e.to_string()))?;
            let used = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
            children.push(DelegatedAddress::new(EAM_NAMESPACE, &bytes[..used])?);
        }

        Ok(Self { root, children })
    }
}

impl Serialize for SubnetID {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SubnetID {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
