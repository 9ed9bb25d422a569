// `ChainClient` implementation over alloy

use async_trait::async_trait;
use hemi_bridge_core::client::{ChainClient, PreparedTransaction, TxReceipt};
use hemi_bridge_core::error::ChainError;
use hemi_bridge_core::oft::{MessagingFee, SendParam};

use crate::{client::EvmClient, erc20::Erc20Client, errors::EvmError, oft_adapter::OftAdapterClient, types::*};

#[async_trait]
impl ChainClient for EvmClient {
    fn chain_id(&self) -> Option<u64> {
        Some(self.chain_id)
    }

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, ChainError> {
        Ok(Erc20Client::new(token, self.clone()).balance_of(owner).await?)
    }

    async fn native_balance(&self, owner: Address) -> Result<U256, ChainError> {
        Ok(EvmClient::native_balance(self, owner).await?)
    }

    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256, ChainError> {
        Ok(Erc20Client::new(token, self.clone()).allowance(owner, spender).await?)
    }

    async fn quote_send(
        &self,
        adapter: Address,
        param: SendParam,
        pay_in_lz_token: bool,
    ) -> Result<MessagingFee, ChainError> {
        Ok(OftAdapterClient::new(adapter, self.clone())
            .quote_send(param, pay_in_lz_token)
            .await?)
    }

    async fn simulate_send(
        &self,
        adapter: Address,
        param: SendParam,
        fee: MessagingFee,
        refund_address: Address,
        from: Address,
    ) -> Result<PreparedTransaction, ChainError> {
        Ok(OftAdapterClient::new(adapter, self.clone())
            .simulate_send(param, fee, refund_address, from)
            .await?)
    }

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
        owner: Address,
    ) -> Result<TxHash, ChainError> {
        if owner != self.from {
            return Err(EvmError::Signing(format!("no signer for {owner}")).into());
        }
        Ok(Erc20Client::new(token, self.clone()).approve(spender, amount).await?)
    }

    async fn send_transaction(&self, tx: PreparedTransaction) -> Result<TxHash, ChainError> {
        Ok(self.send_prepared(tx).await?)
    }

    async fn wait_for_receipt(&self, hash: TxHash) -> Result<TxReceipt, ChainError> {
        let receipt = EvmClient::wait_for_receipt(self, hash).await?;
        Ok(to_tx_receipt(&receipt))
    }
}
