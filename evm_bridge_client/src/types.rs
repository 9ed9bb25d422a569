// Common types and re-exports

pub use alloy::{
    network::Ethereum,
    primitives::{Address, B256, Bytes, TxHash, U256},
    providers::Provider as _,
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
};

use alloy::network::ReceiptResponse as _;
use hemi_bridge_core::client::{TxReceipt, TxStatus};

/// Narrows an RPC receipt to what the bridge flow reports.
pub fn to_tx_receipt(receipt: &TransactionReceipt) -> TxReceipt {
    TxReceipt {
        transaction_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
        gas_used: receipt.gas_used,
        effective_gas_price: receipt.effective_gas_price,
        status: if receipt.status() {
            TxStatus::Succeeded
        } else {
            TxStatus::Reverted
        },
    }
}
