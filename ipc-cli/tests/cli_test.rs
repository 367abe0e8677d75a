//! Integration tests for the CLI commands

use clap::Parser;
use ipc_cli::{run, Cli};
use ipc_router_core::ProviderError;
use serde_json::Value;

const REGISTRY_TOML: &str = r#"
[subnets.local]
id = "r31415926"
network_type = "fevm"

[subnets.local.fevm]
provider_http = "http://127.0.0.1:8545/rpc/v1"
gateway_addr = "0x77aa40b105843728088c0132e43fc44348881da8"
"#;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("ipc-cli").chain(args.iter().copied())).unwrap()
}

#[tokio::test]
async fn test_networks() {
    let output = run(cli(&["networks"])).await.unwrap();
    assert!(output.lines().any(|l| l == "calibration"));
}

#[tokio::test]
async fn test_resolve_calibration() {
    let output = run(cli(&["--network", "calibration", "resolve", "r314159"])).await.unwrap();

    assert!(output.contains("subnet:   r314159"));
    assert!(output.contains("endpoint: https://api.calibration.node.glif.io/rpc/v1"));
    assert!(output.contains("gateway:  0xc7068Cea947035560128a6a6F4c8913523A5A44C"));
    assert!(output.contains("registry: 0x0341fA160C66aBB112195192aE359a6D61df45cd"));
}

#[tokio::test]
async fn test_resolve_unconfigured() {
    let err = run(cli(&["--network", "calibration", "resolve", "r1"])).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ProviderError>(),
        Some(ProviderError::SubnetNotConfigured(_))
    ));
}

#[tokio::test]
async fn test_resolve_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("registry.toml");
    std::fs::write(&config, REGISTRY_TOML).unwrap();

    let output = run(cli(&["--config", config.to_str().unwrap(), "resolve", "r31415926"]))
        .await
        .unwrap();
    assert!(output.contains("endpoint: http://127.0.0.1:8545/rpc/v1"));
    assert!(output.contains("registry: (none)"));
}

#[tokio::test]
async fn test_dry_run_call() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("GatewayGetterFacet.json"),
        r#"{ "abi": [{ "type": "function", "name": "getParentFinality" }] }"#,
    )
    .unwrap();

    let output = run(cli(&[
        "--network",
        "calibration",
        "call",
        "r314159",
        "--contract",
        "GatewayGetterFacet",
        "--method",
        "getParentFinality",
        "--abi-dir",
        dir.path().to_str().unwrap(),
        "1000",
    ]))
    .await
    .unwrap();

    let reply: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(reply["endpoint"], "https://api.calibration.node.glif.io/rpc/v1");
    assert_eq!(reply["to"], "0xc7068Cea947035560128a6a6F4c8913523A5A44C");
    assert_eq!(reply["method"], "getParentFinality");
    assert_eq!(reply["args"], serde_json::json!([1000]));
    assert!(reply["from"].is_null());
}

#[tokio::test]
async fn test_call_without_abi() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(cli(&[
        "--network",
        "calibration",
        "call",
        "r314159",
        "--contract",
        "GatewayGetterFacet",
        "--method",
        "listSubnets",
        "--abi-dir",
        dir.path().to_str().unwrap(),
    ]))
    .await
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProviderError>(),
        Some(ProviderError::AbiLoad { .. })
    ));
}
