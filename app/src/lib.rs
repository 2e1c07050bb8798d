//! Defuse bridge selector application library

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use bridge_rpc_client::BridgeRpcClient;
use defuse_api::AppState;
use defuse_core::AppConfig;
use poa::{spawn_load, ReferenceTable, TokenSelector, TracingListener};
use tokio::sync::Mutex;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "DEFUSE_CONFIG";

/// Install the tracing subscriber (`RUST_LOG` plus default directives)
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("defuse_bridge=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();
    Ok(())
}

/// Load config from `DEFUSE_CONFIG` (or defaults), then apply env overrides
pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            tracing::info!("Loading config from {}", path.display());
            AppConfig::load(&path)?
        }
        None => AppConfig::default(),
    };
    config.apply_env_overrides()?;
    Ok(config)
}

/// Load the configured token reference list, or the bundled one
pub fn load_reference(config: &AppConfig) -> anyhow::Result<ReferenceTable> {
    let table = match &config.token_list_path {
        Some(path) => ReferenceTable::load(path)?,
        None => ReferenceTable::bundled().context("bundled token list is invalid")?,
    };
    Ok(table)
}

/// Run the service until ctrl-c
pub async fn run() -> anyhow::Result<()> {
    init_tracing()?;

    tracing::info!("Starting Defuse bridge selector");

    let config = load_config()?;
    let reference = Arc::new(load_reference(&config)?);
    tracing::info!("Reference list has {} entries", reference.len());

    let client = BridgeRpcClient::new(config.rpc.clone())?;
    let selector = Arc::new(Mutex::new(TokenSelector::new(
        reference,
        Arc::new(TracingListener),
    )));
    let load = spawn_load(selector.clone(), Arc::new(client));

    let state = AppState::new(selector);
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
        }
    };

    let served = defuse_api::start_server(state.clone(), config.api_port, shutdown).await;

    tracing::info!("Shutting down");
    state.shutdown().await;
    load.abort();

    served.context("API server failed")
}
