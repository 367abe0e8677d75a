//! Contract ABI registry
//!
//! Connections never read ABI files themselves; they ask an [`AbiRegistry`]
//! for a contract by name. [`AbiStore`] is the in-memory implementation,
//! filled from `<ContractName>.json` artifacts.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{ProviderError, ProviderResult};
use crate::types::{Abi, IPC_CONTRACTS};

/// Lookup of contract ABIs by contract name
pub trait AbiRegistry: Send + Sync {
    fn lookup(&self, contract_name: &str) -> Option<Arc<Abi>>;
}

/// Whether `abi` declares a function called `method`
pub fn has_function(abi: &Abi, method: &str) -> bool {
    abi.as_array().is_some_and(|entries| {
        entries.iter().any(|entry| {
            // Solidity ABI entries without a type are functions
            let kind = entry.get("type").and_then(|t| t.as_str()).unwrap_or("function");
            kind == "function" && entry.get("name").and_then(|n| n.as_str()) == Some(method)
        })
    })
}

/// Thread-safe in-memory ABI registry
#[derive(Debug, Default)]
pub struct AbiStore {
    abis: RwLock<HashMap<String, Arc<Abi>>>,
}

impl AbiStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every IPC contract ABI from `dir`
    pub fn load_ipc_contracts(dir: impl AsRef<Path>) -> ProviderResult<Self> {
        let store = Self::new();
        store.load_dir(dir, &IPC_CONTRACTS)?;
        info!("Imported IPC contract ABIs");
        Ok(store)
    }

    /// Register an ABI under `name`, replacing any previous one
    pub fn insert(&self, name: impl Into<String>, abi: Abi) {
        self.abis.write().insert(name.into(), Arc::new(abi));
    }

    /// Load the `abi` field of a compiled contract JSON file
    pub fn load_file(&self, name: &str, path: impl AsRef<Path>) -> ProviderResult<()> {
        let load_err = |reason: String| ProviderError::AbiLoad {
            name: name.to_string(),
            reason,
        };

        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| load_err(e.to_string()))?;
        let mut artifact: serde_json::Value =
            serde_json::from_str(&contents).map_err(|e| load_err(e.to_string()))?;
        let abi = artifact
            .get_mut("abi")
            .map(serde_json::Value::take)
            .ok_or_else(|| load_err("missing `abi` field".to_string()))?;

        debug!(contract = %name, path = %path.as_ref().display(), "Loaded ABI");
        self.insert(name, abi);
        Ok(())
    }

    /// Load `<dir>/<name>.json` for each name. Stops at the first failure.
    pub fn load_dir(&self, dir: impl AsRef<Path>, names: &[&str]) -> ProviderResult<usize> {
        for name in names {
            self.load_file(name, dir.as_ref().join(format!("{name}.json")))?;
        }
        Ok(names.len())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.abis.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.abis.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.abis.read().is_empty()
    }
}

impl AbiRegistry for AbiStore {
    fn lookup(&self, contract_name: &str) -> Option<Arc<Abi>> {
        self.abis.read().get(contract_name).cloned()
    }
}
