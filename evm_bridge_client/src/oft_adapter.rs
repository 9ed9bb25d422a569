// LayerZero OFT adapter calls

use crate::{client::EvmClient, errors::EvmError, types::*};
use alloy::providers::DynProvider;
use hemi_bridge_core::client::PreparedTransaction;
use hemi_bridge_core::oft::{IOFT, MessagingFee, SendParam};
use tracing::debug;

#[derive(Clone)]
pub struct OftAdapterClient {
    pub adapter: Address,
    pub client: EvmClient,
}

impl OftAdapterClient {
    pub fn new(adapter: Address, client: EvmClient) -> Self {
        Self { adapter, client }
    }

    fn contract(&self) -> IOFT::IOFTInstance<DynProvider> {
        IOFT::new(self.adapter, self.client.provider.clone())
    }

    pub async fn quote_send(&self, param: SendParam, pay_in_lz_token: bool) -> Result<MessagingFee, EvmError> {
        Ok(self.contract().quoteSend(param, pay_in_lz_token).call().await?)
    }

    /// Dry-runs `send` from `from` paying `fee.nativeFee`, then estimates gas.
    /// A revert surfaces here, before anything is signed.
    pub async fn simulate_send(
        &self,
        param: SendParam,
        fee: MessagingFee,
        refund_address: Address,
        from: Address,
    ) -> Result<PreparedTransaction, EvmError> {
        let value = fee.nativeFee;
        let contract = self.contract();
        let call = contract.send(param, fee, refund_address).from(from).value(value);

        call.call().await?;
        let estimate = call.estimate_gas().await?;
        let gas_limit = self.client.policy.gas_limit_for(estimate);
        debug!(adapter = %self.adapter, estimate, gas_limit, "send simulated");

        Ok(PreparedTransaction {
            from,
            to: self.adapter,
            input: call.calldata().clone(),
            value,
            gas_limit: Some(gas_limit),
        })
    }
}
