use std::sync::Arc;

use evm_bridge_client::{Erc20Client, EvmClient};
use futures::StreamExt;
use hemi_bridge_core::amount::format_units;
use hemi_bridge_core::chains;
use hemi_bridge_core::deployments::TokenDeployment;
use hemi_bridge_core::events;
use hemi_bridge_core::{BridgeError, BridgeParams, OftBridge};
use tracing::{info, warn};

use super::{parse_amount, resolve_chain};
use crate::config::Config;
use crate::error::{CliError, CliResult};

/// Runs one bridge and prints every lifecycle event as it arrives.
/// Succeeds only when the run ends in `bridge-succeeded`.
pub async fn send(chain: &str, amount: &str, to: Option<&str>) -> CliResult<()> {
    let config = Config::load()?;
    let source = resolve_chain("chain", chain)?;
    config.require_deployment(source)?;
    let raw_amount = parse_amount(amount)?;
    let destination = chains::chain(chains::target_chain_id(source.chain_id)?)?;

    let client = EvmClient::connect(config.rpc(source)?, config.signer()?, config.policy.clone()).await?;
    let bridge = OftBridge::new(config.deployments());
    let deployment = bridge.deployments().get(source.chain_id).map_err(BridgeError::from)?;
    check_token(&client, deployment).await;

    let from = client.from.to_string();
    let to = to.map(str::to_string).unwrap_or_else(|| from.clone());
    info!(
        amount = %format_units(raw_amount, deployment.decimals),
        symbol = %deployment.symbol,
        from = source.name,
        to = destination.name,
        recipient = %to,
        "starting bridge"
    );

    let mut operation = bridge.bridge(BridgeParams::new(raw_amount, from, to, Arc::new(client)));
    let mut seen = Vec::new();
    while let Some(event) = operation.events.next().await {
        println!("{event}");
        seen.push(event);
    }
    if let Err(e) = operation.completion.await {
        warn!("bridge task did not complete: {e}");
    }

    match events::outcome(&seen) {
        Some(event) if event.is_success() => Ok(()),
        Some(event) => Err(CliError::NotBridged(event.to_string())),
        None => Err(CliError::NotBridged("no outcome reported".to_string())),
    }
}

// Compares on-chain metadata with the configured deployment; mismatches are only logged.
async fn check_token(client: &EvmClient, deployment: &TokenDeployment) {
    let token = Erc20Client::new(deployment.token, client.clone());
    match futures::future::try_join(token.symbol(), token.decimals()).await {
        Ok((symbol, decimals)) if symbol != deployment.symbol || decimals != deployment.decimals => {
            warn!(
                token = %deployment.token,
                %symbol,
                decimals,
                "token metadata differs from {} ({} decimals)",
                deployment.symbol,
                deployment.decimals
            );
        }
        Ok(_) => {}
        Err(e) => warn!(token = %deployment.token, "could not read token metadata: {e}"),
    }
}
