// Configuration structures for EVM client

use std::time::Duration;

use alloy::{network::TransactionBuilder, rpc::types::TransactionRequest};
use hemi_bridge_core::client::PreparedTransaction;

#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub rpc_url: String,
    pub chain_id: u64,
}

#[derive(Debug, Clone)]
pub struct TxPolicyConfig {
    // Max fee per gas in wei (None = fetch from network)
    pub max_fee_per_gas_wei: Option<u128>,
    // Max priority fee per gas in wei (None = fetch from network)
    pub max_priority_fee_per_gas_wei: Option<u128>,
    // Gas limit multiplier in basis points (10000 = 100%)
    pub gas_limit_multiplier_bps: u32,
    // Consecutive failed receipt lookups tolerated before giving up
    pub max_retries: u32,
    // Number of blocks to wait for confirmation
    pub confirm_blocks: u64,
    // Timeout for receipt polling in seconds
    pub receipt_timeout_secs: u64,
    pub receipt_poll_interval_ms: u64,
}

impl Default for TxPolicyConfig {
    fn default() -> Self {
        Self {
            max_fee_per_gas_wei: None,
            max_priority_fee_per_gas_wei: None,
            gas_limit_multiplier_bps: 12000, // 120%
            max_retries: 3,
            confirm_blocks: 1,
            receipt_timeout_secs: 300,
            receipt_poll_interval_ms: 2_000,
        }
    }
}

impl TxPolicyConfig {
    /// Pads an estimate by the configured multiplier, never going below it.
    pub fn gas_limit_for(&self, estimate: u64) -> u64 {
        let padded = u128::from(estimate) * u128::from(self.gas_limit_multiplier_bps) / 10_000;
        u64::try_from(padded).unwrap_or(u64::MAX).max(estimate)
    }

    /// Request for a prepared transaction with the fee caps applied.
    pub fn request_for(&self, tx: PreparedTransaction) -> TransactionRequest {
        let mut request = TransactionRequest::default()
            .with_from(tx.from)
            .with_to(tx.to)
            .with_input(tx.input)
            .with_value(tx.value);
        if let Some(gas_limit) = tx.gas_limit {
            request = request.with_gas_limit(gas_limit);
        }
        if let Some(max_fee) = self.max_fee_per_gas_wei {
            request = request.with_max_fee_per_gas(max_fee);
        }
        if let Some(tip) = self.max_priority_fee_per_gas_wei {
            request = request.with_max_priority_fee_per_gas(tip);
        }
        request
    }

    pub fn receipt_timeout(&self) -> Duration {
        Duration::from_secs(self.receipt_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.receipt_poll_interval_ms)
    }
}
