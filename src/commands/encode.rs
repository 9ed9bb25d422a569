use alloy::primitives::U256;
use hemi_bridge_core::oft::{EncodeSendParams, MessagingFee, encode_send};

use super::{parse_address_arg, parse_amount, resolve_chain};
use crate::error::{CliError, CliResult};

pub struct EncodeArgs<'a> {
    pub destination: &'a str,
    pub amount: &'a str,
    pub native_fee: &'a str,
    pub lz_token_fee: &'a str,
    pub refund: &'a str,
    pub to: &'a str,
}

// Prints `send` calldata for the adapter; no network access.
pub fn encode_send_call(args: EncodeArgs<'_>) -> CliResult<()> {
    let destination = resolve_chain("destination", args.destination)?;
    let params = EncodeSendParams {
        amount: parse_amount(args.amount)?,
        destination_chain_id: destination.chain_id,
        messaging_fee: MessagingFee {
            nativeFee: parse_wei("native-fee", args.native_fee)?,
            lzTokenFee: parse_wei("lz-token-fee", args.lz_token_fee)?,
        },
        refund_address: parse_address_arg("refund", args.refund)?,
        to_address: parse_address_arg("to", args.to)?,
    };

    println!("{}", encode_send(params)?);
    Ok(())
}

fn parse_wei(arg: &'static str, raw: &str) -> CliResult<U256> {
    U256::from_str_radix(raw.trim(), 10).map_err(|e| CliError::invalid_argument(arg, e.to_string()))
}
