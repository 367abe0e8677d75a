//! Connection parameters for a single subnet

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ConfigError, ConfigResult};

/// Kind of chain a subnet runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Filecoin EVM compatible subnet
    Fevm,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::Fevm => write!(f, "fevm"),
        }
    }
}

/// 20-byte EVM contract address, kept in the casing it was written in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EthAddress(String);

impl EthAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw address bytes
    pub fn to_bytes(&self) -> [u8; 20] {
        let mut out = [0u8; 20];
        // Validated at construction, so decoding cannot fail here.
        let _ = hex::decode_to_slice(&self.0[2..], &mut out);
        out
    }
}

impl FromStr for EthAddress {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| ConfigError::InvalidAddress(s.to_string()))?;

        let mut raw = [0u8; 20];
        hex::decode_to_slice(digits, &mut raw)
            .map_err(|_| ConfigError::InvalidAddress(s.to_string()))?;

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for EthAddress {
    type Error = ConfigError;

    fn try_from(value: String) -> ConfigResult<Self> {
        value.parse()
    }
}

impl From<EthAddress> for String {
    fn from(addr: EthAddress) -> Self {
        addr.0
    }
}

impl fmt::Display for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// EVM subnet endpoint and contract locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvmSubnet {
    /// JSON-RPC endpoint
    pub provider_http: Url,

    /// Bearer token for the endpoint, if it requires one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Subnet registry contract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_addr: Option<EthAddress>,

    /// Gateway contract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_addr: Option<EthAddress>,
}

impl EvmSubnet {
    /// Create an entry for `provider_http` with no contracts configured
    pub fn new(provider_http: &str) -> ConfigResult<Self> {
        let provider_http = Url::parse(provider_http).map_err(|source| ConfigError::InvalidEndpoint {
            url: provider_http.to_string(),
            source,
        })?;

        Ok(Self {
            provider_http,
            auth_token: None,
            registry_addr: None,
            gateway_addr: None,
        })
    }

    pub fn with_gateway(mut self, gateway: EthAddress) -> Self {
        self.gateway_addr = Some(gateway);
        self
    }

    pub fn with_registry(mut self, registry: EthAddress) -> Self {
        self.registry_addr = Some(registry);
        self
    }

    pub fn with_auth_token(mut self, token: String) -> Self {
        self.auth_token = Some(token);
        self
    }
}

/// Configuration of one subnet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetConfig {
    pub network_type: NetworkType,
    pub fevm: EvmSubnet,
}

impl SubnetConfig {
    pub fn fevm(fevm: EvmSubnet) -> Self {
        Self {
            network_type: NetworkType::Fevm,
            fevm,
        }
    }
}
