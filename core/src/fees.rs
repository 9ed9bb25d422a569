use alloy::primitives::{Address, U256};
use tracing::debug;

use crate::client::ChainClient;
use crate::error::BridgeResult;
use crate::oft::{self, MessagingFee};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeEstimationParams {
    pub amount: U256,
    // Source chain; the destination is its counterpart.
    pub chain_id: u64,
    pub to_address: Address,
}

/// Asks the OFT adapter on the source chain what delivering the transfer costs.
/// Read-only; fees move with gas prices, so callers should never cache the result.
pub async fn quote_send(
    client: &dyn ChainClient,
    adapter: Address,
    params: FeeEstimationParams,
) -> BridgeResult<MessagingFee> {
    let param = oft::send_param_for(params.chain_id, params.amount, params.to_address)?;
    let dst_eid = param.dstEid;
    let fee = client.quote_send(adapter, param, false).await?;
    debug!(
        chain_id = params.chain_id,
        dst_eid,
        native_fee = %fee.nativeFee,
        lz_token_fee = %fee.lzTokenFee,
        "quoted messaging fee"
    );
    Ok(fee)
}
