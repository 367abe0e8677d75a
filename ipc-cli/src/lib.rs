//! IPC CLI - resolve subnets and dry-run contract calls
//!
//! The CLI never talks to a chain. Calls go through [`DryRunRpc`], which
//! logs the request and echoes it back so the resolved endpoint, contract
//! address and arguments can be inspected.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use ipc_core::{known_networks, EthAddress, SubnetRegistry};
use ipc_router_core::{AbiStore, ChainRpc, ContractCall, IpcProvider, RpcError};
use ipc_types::SubnetID;
use serde_json::{json, Value};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "ipc-cli", about = "Resolve IPC subnets to their RPC endpoints")]
pub struct Cli {
    /// Built-in network to use (defaults to $IPC_NETWORK, then calibration)
    #[arg(long, global = true)]
    pub network: Option<String>,

    /// TOML subnet registry (defaults to $IPC_CONFIG)
    #[arg(long, global = true, conflicts_with = "network")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the built-in networks
    Networks,

    /// Show the connection parameters of a subnet
    Resolve {
        /// Canonical subnet id, e.g. r314159
        subnet: SubnetID,
    },

    /// Dry-run a contract call on a subnet
    Call {
        subnet: SubnetID,

        /// Contract name; its ABI is read from <abi-dir>/<contract>.json
        #[arg(long)]
        contract: String,

        #[arg(long)]
        method: String,

        #[arg(long, default_value = "abis")]
        abi_dir: PathBuf,

        /// Contract address (defaults to the subnet gateway)
        #[arg(long)]
        address: Option<EthAddress>,

        /// Arguments as JSON values; anything else is passed as a string
        args: Vec<String>,
    },
}

/// Chain client that performs no I/O
#[derive(Debug, Default)]
pub struct DryRunRpc;

#[async_trait]
impl ChainRpc for DryRunRpc {
    async fn call(&self, call: ContractCall) -> Result<Value, RpcError> {
        info!(
            endpoint = %call.endpoint,
            contract = %call.contract,
            to = %call.address,
            method = %call.method,
            "Dry-run contract call"
        );

        Ok(json!({
            "endpoint": call.endpoint.as_str(),
            "contract": call.contract,
            "to": call.address.as_str(),
            "from": call.from.as_ref().map(|f| f.as_str()),
            "method": call.method,
            "args": call.args,
        }))
    }
}

fn load_registry(cli: &Cli) -> anyhow::Result<SubnetRegistry> {
    let registry = match (&cli.config, &cli.network) {
        (Some(path), _) => SubnetRegistry::from_file(path)?,
        (None, Some(network)) => SubnetRegistry::for_network(network)?,
        (None, None) => SubnetRegistry::from_env()?,
    };
    Ok(registry)
}

fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Execute `cli` and return what should be printed
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    match &cli.command {
        Command::Networks => Ok(known_networks().join("\n")),

        Command::Resolve { subnet } => {
            let provider = IpcProvider::new(load_registry(&cli)?, Arc::new(AbiStore::new()), Arc::new(DryRunRpc));
            let connection = provider.connection(subnet)?;

            let registry = connection
                .registry_address()
                .map_or("(none)", |r| r.as_str());
            Ok(format!(
                "subnet:   {}\nendpoint: {}\ngateway:  {}\nregistry: {}",
                connection.subnet(),
                connection.endpoint(),
                connection.gateway(),
                registry,
            ))
        }

        Command::Call {
            subnet,
            contract,
            method,
            abi_dir,
            address,
            args,
        } => {
            let abis = AbiStore::new();
            abis.load_dir(abi_dir, &[contract.as_str()])?;

            let provider = IpcProvider::new(load_registry(&cli)?, Arc::new(abis), Arc::new(DryRunRpc));
            let connection = provider.connection(subnet)?;
            let binding = match address {
                Some(address) => connection.contract(contract, address)?,
                None => connection.gateway_facet(contract)?,
            };

            let reply = binding
                .call(method, args.iter().map(|a| parse_arg(a)).collect())
                .await?;
            Ok(serde_json::to_string_pretty(&reply)?)
        }
    }
}
