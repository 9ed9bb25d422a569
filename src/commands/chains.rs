use hemi_bridge_core::chains::{self, CHAINS};

use crate::config::Config;
use crate::error::CliResult;

pub fn chains() -> CliResult<()> {
    let config = Config::load()?;
    let deployments = config.deployments();

    println!(
        "{:<14} {:>8} {:>6}  {:<14} {:<6} {:<5} adapter",
        "chain", "id", "eid", "bridges to", "gas", "rpc"
    );
    for spec in &CHAINS {
        let counterpart = chains::chain(spec.counterpart).map(|c| c.name).unwrap_or("-");
        let rpc = config.chain(spec.chain_id).is_some_and(|c| c.rpc_url.is_some());
        let adapter = deployments
            .get(spec.chain_id)
            .map(|d| d.adapter.to_string())
            .unwrap_or_else(|_| "-".to_string());

        println!(
            "{:<14} {:>8} {:>6}  {:<14} {:<6} {:<5} {}",
            spec.name,
            spec.chain_id,
            spec.endpoint_id,
            counterpart,
            spec.native_currency.symbol,
            if rpc { "yes" } else { "no" },
            adapter,
        );
    }
    Ok(())
}
