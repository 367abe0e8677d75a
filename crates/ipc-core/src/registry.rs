//! Subnet registry
//!
//! Maps canonical subnet ids (`SubnetID::to_string()`) to their
//! [`SubnetConfig`]. Built once, then only read.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use ipc_types::SubnetID;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{EvmSubnet, NetworkType, SubnetConfig};
use crate::error::{ConfigError, ConfigResult};
use crate::network;

/// Default network when the environment names none
pub const DEFAULT_NETWORK: &str = "calibration";

/// Env var holding a path to a TOML registry file
pub const CONFIG_PATH_ENV: &str = "IPC_CONFIG";

/// Env var naming a built-in network
pub const NETWORK_ENV: &str = "IPC_NETWORK";

/// On-disk registry layout
#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    subnets: BTreeMap<String, SubnetEntry>,
}

#[derive(Debug, Deserialize)]
struct SubnetEntry {
    id: SubnetID,
    network_type: NetworkType,
    fevm: EvmSubnet,
}

/// Read-only lookup from subnet id to connection parameters
#[derive(Debug, Clone, Default)]
pub struct SubnetRegistry {
    subnets: HashMap<String, SubnetConfig>,
}

impl SubnetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subnet, replacing any previous entry for the same id
    pub fn with_subnet(mut self, id: &SubnetID, config: SubnetConfig) -> Self {
        self.subnets.insert(id.to_string(), config);
        self
    }

    /// Registry holding the single built-in network `name`
    pub fn for_network(name: &str) -> ConfigResult<Self> {
        let network = network::for_network(name)?;

        info!(network = %name, subnet = %network.id, "Building registry for network");

        Ok(Self::new().with_subnet(&network.id, network.config))
    }

    /// Parse a TOML registry document
    ///
    /// ```toml
    /// [subnets.calibration]
    /// id = "r314159"
    /// network_type = "fevm"
    ///
    /// [subnets.calibration.fevm]
    /// provider_http = "https://api.calibration.node.glif.io/rpc/v1"
    /// gateway_addr = "0xc7068Cea947035560128a6a6F4c8913523A5A44C"
    /// ```
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let file: RegistryFile = toml::from_str(contents)?;

        let mut subnets = HashMap::with_capacity(file.subnets.len());
        for (name, entry) in file.subnets {
            let key = entry.id.to_string();
            debug!(network = %name, subnet = %key, "Loaded subnet entry");

            let config = SubnetConfig {
                network_type: entry.network_type,
                fevm: entry.fevm,
            };
            if subnets.insert(key.clone(), config).is_some() {
                return Err(ConfigError::DuplicateSubnet(key));
            }
        }

        info!(subnets = subnets.len(), "Subnet registry loaded");
        Ok(Self { subnets })
    }

    /// Load a TOML registry file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Build from environment variables
    ///
    /// `IPC_CONFIG` (a TOML file) wins over `IPC_NETWORK` (a built-in
    /// network name); with neither set the default network is used.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_sources(
            std::env::var(CONFIG_PATH_ENV).ok(),
            std::env::var(NETWORK_ENV).ok(),
        )
    }

    fn from_sources(config_path: Option<String>, network: Option<String>) -> ConfigResult<Self> {
        match (config_path, network) {
            (Some(path), _) => Self::from_file(path),
            (None, Some(name)) => Self::for_network(name.trim()),
            (None, None) => Self::for_network(DEFAULT_NETWORK),
        }
    }

    /// Entry for a canonical subnet id string
    pub fn get(&self, key: &str) -> Option<&SubnetConfig> {
        self.subnets.get(key)
    }

    pub fn get_subnet(&self, id: &SubnetID) -> Option<&SubnetConfig> {
        self.get(&id.to_string())
    }

    pub fn len(&self) -> usize {
        self.subnets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subnets.is_empty()
    }

    /// Configured subnet keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.subnets.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const REGISTRY_TOML: &str = r#"
[subnets.calibration]
id = "r314159"
network_type = "fevm"

[subnets.calibration.fevm]
provider_http = "https://api.calibration.node.glif.io/rpc/v1"
registry_addr = "0x0341fA160C66aBB112195192aE359a6D61df45cd"
gateway_addr = "0xc7068Cea947035560128a6a6F4c8913523A5A44C"

[subnets.local]
id = "r31415926"
network_type = "fevm"

[subnets.local.fevm]
provider_http = "http://127.0.0.1:8545"
auth_token = "local-token"
"#;

    #[test]
    fn test_for_network() {
        let registry = SubnetRegistry::for_network("calibration").unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.keys(), vec!["r314159"]);

        let config = registry.get_subnet(&SubnetID::new_root(314159)).unwrap();
        assert_eq!(config.fevm.provider_http.as_str(), "https://api.calibration.node.glif.io/rpc/v1");
        assert!(registry.get("r1").is_none());
    }

    #[test]
    fn test_for_unknown_network() {
        let result = SubnetRegistry::for_network("nowhere");
        assert!(matches!(result, Err(ConfigError::UnknownNetwork(_))));
    }

    #[test]
    fn test_from_toml() {
        let registry = SubnetRegistry::from_toml_str(REGISTRY_TOML).unwrap();
        assert_eq!(registry.keys(), vec!["r314159", "r31415926"]);

        let local = registry.get("r31415926").unwrap();
        assert_eq!(local.fevm.auth_token.as_deref(), Some("local-token"));
        assert!(local.fevm.gateway_addr.is_none());
        assert!(local.fevm.registry_addr.is_none());

        let builtin = SubnetRegistry::for_network("calibration").unwrap();
        assert_eq!(registry.get("r314159"), builtin.get("r314159"));
    }

    #[test]
    fn test_from_toml_rejects_bad_entries() {
        let bad_address = REGISTRY_TOML.replace("0xc7068Cea947035560128a6a6F4c8913523A5A44C", "0x1234");
        assert!(matches!(
            SubnetRegistry::from_toml_str(&bad_address),
            Err(ConfigError::Toml(_))
        ));

        let bad_id = REGISTRY_TOML.replace("r31415926", "31415926");
        assert!(matches!(
            SubnetRegistry::from_toml_str(&bad_id),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_duplicate_subnet() {
        let duplicated = REGISTRY_TOML.replace("r31415926", "r314159");
        let result = SubnetRegistry::from_toml_str(&duplicated);
        assert!(matches!(result, Err(ConfigError::DuplicateSubnet(key)) if key == "r314159"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(REGISTRY_TOML.as_bytes()).unwrap();

        let registry = SubnetRegistry::from_file(file.path()).unwrap();
        assert_eq!(registry.len(), 2);

        let missing = SubnetRegistry::from_file("/nonexistent/ipc/registry.toml");
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_source_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(REGISTRY_TOML.as_bytes()).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let from_file =
            SubnetRegistry::from_sources(Some(path), Some("calibration".to_string())).unwrap();
        assert_eq!(from_file.len(), 2);

        let named = SubnetRegistry::from_sources(None, Some(" calibration ".to_string())).unwrap();
        assert_eq!(named.keys(), vec!["r314159"]);

        let default = SubnetRegistry::from_sources(None, None).unwrap();
        assert_eq!(default.keys(), vec!["r314159"]);

        let unknown = SubnetRegistry::from_sources(None, Some("nowhere".to_string()));
        assert!(matches!(unknown, Err(ConfigError::UnknownNetwork(_))));
    }

    #[test]
    fn test_with_subnet() {
        let id = SubnetID::new_root(1);
        let config = SubnetConfig::fevm(EvmSubnet::new("http://localhost:1234/rpc/v1").unwrap());
        let registry = SubnetRegistry::new().with_subnet(&id, config.clone());

        assert_eq!(registry.get_subnet(&id), Some(&config));
        assert!(!registry.is_empty());
    }
}
