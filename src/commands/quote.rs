use alloy::signers::local::PrivateKeySigner;
use evm_bridge_client::EvmClient;
use hemi_bridge_core::OftBridge;
use hemi_bridge_core::amount::format_units;
use hemi_bridge_core::chains;
use hemi_bridge_core::fees::FeeEstimationParams;
use tracing::info;

use super::{parse_address_arg, parse_amount, resolve_chain};
use crate::config::Config;
use crate::error::{CliError, CliResult};

pub async fn quote(chain: &str, amount: &str, to: Option<&str>) -> CliResult<()> {
    let config = Config::load()?;
    let source = resolve_chain("chain", chain)?;
    config.require_deployment(source)?;
    let amount = parse_amount(amount)?;
    let destination = chains::chain(chains::target_chain_id(source.chain_id)?)?;

    // Quoting is read-only; without a configured key a throwaway signer is enough.
    let signer = if config.has_signer() {
        config.signer()?
    } else {
        PrivateKeySigner::random()
    };
    let to = match to {
        Some(raw) => parse_address_arg("to", raw)?,
        None if config.has_signer() => signer.address(),
        None => return Err(CliError::invalid_argument("to", "required when EVM_PRIVATE_KEY is not set")),
    };

    let client = EvmClient::connect(config.rpc(source)?, signer, config.policy.clone()).await?;
    let bridge = OftBridge::new(config.deployments());
    info!(from = source.name, to = destination.name, recipient = %to, "quoting bridge fee");

    let fee = bridge
        .quote_send(
            &client,
            FeeEstimationParams {
                amount,
                chain_id: source.chain_id,
                to_address: to,
            },
        )
        .await?;

    println!("route:        {} -> {}", source.name, destination.name);
    println!(
        "native fee:   {} {}",
        format_units(fee.nativeFee, source.native_currency.decimals),
        source.native_currency.symbol
    );
    println!("lz token fee: {}", fee.lzTokenFee);
    Ok(())
}
