// Core EVM client with transaction management

use std::time::Instant;

use crate::{config::*, errors::EvmError, types::*};
use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder},
};
use hemi_bridge_core::client::PreparedTransaction;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct EvmClient {
    pub provider: DynProvider,
    pub from: Address,
    pub chain_id: u64,
    pub policy: TxPolicyConfig,
}

impl EvmClient {
    pub async fn new(
        rpc: RpcConfig,
        signer: PrivateKeySigner,
        from: Address,
        policy: TxPolicyConfig,
    ) -> Result<Self, EvmError> {
        let wallet = EthereumWallet::from(signer);
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(rpc.rpc_url.parse().map_err(|e| EvmError::Config(format!("{}", e)))?);

        Ok(Self {
            provider: provider.erased(),
            from,
            chain_id: rpc.chain_id,
            policy,
        })
    }

    /// Builds a client for the signer's own address and checks the node serves `rpc.chain_id`.
    pub async fn connect(rpc: RpcConfig, signer: PrivateKeySigner, policy: TxPolicyConfig) -> Result<Self, EvmError> {
        let from = signer.address();
        let client = Self::new(rpc, signer, from, policy).await?;

        let remote = client.provider.get_chain_id().await?;
        if remote != client.chain_id {
            return Err(EvmError::Config(format!(
                "rpc serves chain {remote}, expected {}",
                client.chain_id
            )));
        }
        Ok(client)
    }

    pub async fn native_balance(&self, owner: Address) -> Result<U256, EvmError> {
        Ok(self.provider.get_balance(owner).await?)
    }

    /// Signs and broadcasts a prepared request, applying the policy fee caps.
    pub async fn send_prepared(&self, tx: PreparedTransaction) -> Result<TxHash, EvmError> {
        if tx.from != self.from {
            return Err(EvmError::Signing(format!("no signer for {}", tx.from)));
        }

        let request = self.policy.request_for(tx);
        let pending = self.provider.send_transaction(request).await?;
        let hash = *pending.tx_hash();
        debug!(chain_id = self.chain_id, tx = %hash, "transaction submitted");
        Ok(hash)
    }

    /// Polls for the receipt until it has `confirm_blocks` confirmations.
    ///
    /// Lookup errors are retried up to `max_retries` times in a row; the whole
    /// wait is bounded by `receipt_timeout_secs`.
    pub async fn wait_for_receipt(&self, hash: TxHash) -> Result<TransactionReceipt, EvmError> {
        let deadline = Instant::now() + self.policy.receipt_timeout();
        let mut failures = 0u32;

        loop {
            match self.poll_receipt(hash).await {
                Ok(Some(receipt)) => return Ok(receipt),
                Ok(None) => failures = 0,
                Err(e) => {
                    failures += 1;
                    if failures > self.policy.max_retries {
                        return Err(e);
                    }
                    warn!(tx = %hash, attempt = failures, "receipt lookup failed: {e}");
                }
            }

            if Instant::now() >= deadline {
                return Err(EvmError::Timeout(hash));
            }
            tokio::time::sleep(self.policy.poll_interval()).await;
        }
    }

    // Returns the receipt once it is deep enough.
    async fn poll_receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>, EvmError> {
        let Some(receipt) = self.provider.get_transaction_receipt(hash).await? else {
            return Ok(None);
        };

        if self.policy.confirm_blocks <= 1 {
            return Ok(Some(receipt));
        }

        let Some(mined_at) = receipt.block_number else {
            return Ok(None);
        };
        let head = self.provider.get_block_number().await?;
        let confirmations = head.saturating_sub(mined_at) + 1;
        debug!(tx = %hash, confirmations, required = self.policy.confirm_blocks, "receipt found");

        Ok((confirmations >= self.policy.confirm_blocks).then_some(receipt))
    }
}
