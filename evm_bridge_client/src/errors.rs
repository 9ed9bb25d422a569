// Error types for EVM operations

use alloy::primitives::TxHash;
use alloy::transports::{RpcError, TransportErrorKind};
use hemi_bridge_commons::error::{CodedError, ErrorCode};
use hemi_bridge_core::error::ChainError;

// EIP-1193 "User Rejected Request".
const USER_REJECTED_CODE: i64 = 4001;
// Geth reports reverted calls with code 3.
const EXECUTION_REVERTED_CODE: i64 = 3;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvmError {
    #[error("rpc: {0}")]
    Rpc(String),

    #[error("user rejected: {0}")]
    UserRejected(String),

    #[error("signing: {0}")]
    Signing(String),

    #[error("revert: {0}")]
    Revert(String),

    #[error("timeout waiting for receipt of {0}")]
    Timeout(TxHash),

    #[error("config: {0}")]
    Config(String),

    #[error("other: {0}")]
    Other(String),
}

impl CodedError for EvmError {
    fn code(&self) -> ErrorCode {
        match self {
            EvmError::Rpc(_) => ErrorCode::ChainRpc,
            EvmError::UserRejected(_) => ErrorCode::ChainUserRejected,
            EvmError::Signing(_) => ErrorCode::ChainSigning,
            EvmError::Revert(_) => ErrorCode::ChainReverted,
            EvmError::Timeout(_) => ErrorCode::ChainTimeout,
            EvmError::Config(_) | EvmError::Other(_) => ErrorCode::EvmClient,
        }
    }

    fn retriable(&self) -> bool {
        matches!(self, EvmError::Rpc(_) | EvmError::Timeout(_))
    }
}

impl From<RpcError<TransportErrorKind>> for EvmError {
    fn from(e: RpcError<TransportErrorKind>) -> Self {
        if let Some(resp) = e.as_error_resp() {
            let message = resp.message.to_string();
            return match resp.code {
                USER_REJECTED_CODE => EvmError::UserRejected(message),
                EXECUTION_REVERTED_CODE => EvmError::Revert(message),
                _ if message.contains("execution reverted") => EvmError::Revert(message),
                _ => EvmError::Rpc(e.to_string()),
            };
        }

        match e {
            // Wallet fillers report signer failures as local usage errors.
            RpcError::LocalUsageError(err) => EvmError::Signing(err.to_string()),
            other => EvmError::Rpc(other.to_string()),
        }
    }
}

impl From<alloy::contract::Error> for EvmError {
    fn from(e: alloy::contract::Error) -> Self {
        match e {
            alloy::contract::Error::TransportError(err) => err.into(),
            other => EvmError::Other(other.to_string()),
        }
    }
}

impl From<EvmError> for ChainError {
    fn from(e: EvmError) -> Self {
        match e {
            EvmError::Rpc(msg) => ChainError::Rpc(msg),
            EvmError::UserRejected(msg) => ChainError::UserRejected(msg),
            EvmError::Signing(msg) => ChainError::Signing(msg),
            EvmError::Revert(msg) => ChainError::Revert(msg),
            EvmError::Timeout(hash) => ChainError::Timeout(hash),
            EvmError::Config(msg) | EvmError::Other(msg) => ChainError::Other(msg),
        }
    }
}
