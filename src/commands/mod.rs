pub mod chains;
pub mod encode;
pub mod quote;
pub mod send;

use alloy::primitives::{Address, U256};
use hemi_bridge_core::amount::parse_units;
use hemi_bridge_core::chains::{self as core_chains, ChainSpec};
use hemi_bridge_core::deployments::HEMI_TOKEN_DECIMALS;
use hemi_bridge_core::validation::parse_address;

use crate::error::{CliError, CliResult};

pub(crate) fn resolve_chain(arg: &'static str, query: &str) -> CliResult<&'static ChainSpec> {
    core_chains::find(query).ok_or_else(|| CliError::invalid_argument(arg, format!("unknown chain {query:?}")))
}

// Token amounts are given in whole HEMI, e.g. "12.5".
pub(crate) fn parse_amount(raw: &str) -> CliResult<U256> {
    Ok(parse_units(raw, HEMI_TOKEN_DECIMALS)?)
}

pub(crate) fn parse_address_arg(arg: &'static str, raw: &str) -> CliResult<Address> {
    parse_address(raw).map_err(|reason| CliError::invalid_argument(arg, reason))
}
