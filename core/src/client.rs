use alloy::primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;

use crate::error::ChainError;
use crate::oft::{MessagingFee, SendParam};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Succeeded,
    Reverted,
}

/// The parts of a mined receipt the bridge flow and its listeners look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub effective_gas_price: u128,
    pub status: TxStatus,
}

impl TxReceipt {
    pub fn succeeded(&self) -> bool {
        self.status == TxStatus::Succeeded
    }

    // Native currency spent on gas, in wei.
    pub fn fee_paid(&self) -> U256 {
        U256::from(self.gas_used) * U256::from(self.effective_gas_price)
    }
}

/// A transaction request that passed simulation and is ready to be signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTransaction {
    pub from: Address,
    pub to: Address,
    pub input: Bytes,
    pub value: U256,
    pub gas_limit: Option<u64>,
}

/// Read and write access to a single EVM chain.
///
/// One instance is bound to exactly one chain. Submission methods return as
/// soon as the wallet hands back a hash; confirmation is a separate call so the
/// caller can report the signed transaction before it is mined.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChainClient: Send + Sync {
    // Chain the client is bound to, if it knows it.
    fn chain_id(&self) -> Option<u64>;

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, ChainError>;

    async fn native_balance(&self, owner: Address) -> Result<U256, ChainError>;

    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256, ChainError>;

    // Read-only `quoteSend` on the OFT adapter.
    async fn quote_send(
        &self,
        adapter: Address,
        param: SendParam,
        pay_in_lz_token: bool,
    ) -> Result<MessagingFee, ChainError>;

    // Dry-runs `send` and returns the request that would execute it.
    async fn simulate_send(
        &self,
        adapter: Address,
        param: SendParam,
        fee: MessagingFee,
        refund_address: Address,
        from: Address,
    ) -> Result<PreparedTransaction, ChainError>;

    // Submits an ERC-20 approval signed by `owner`.
    async fn approve(&self, token: Address, spender: Address, amount: U256, owner: Address)
    -> Result<TxHash, ChainError>;

    async fn send_transaction(&self, tx: PreparedTransaction) -> Result<TxHash, ChainError>;

    async fn wait_for_receipt(&self, hash: TxHash) -> Result<TxReceipt, ChainError>;
}
