use alloy::primitives::TxHash;
use hemi_bridge_commons::error::{CodedError, ErrorCode, format_with_code};
use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainPairError {
    #[error("Unsupported source chain ID: {0}")]
    UnsupportedSource(u64),
    #[error("Unsupported destination chainId {0}")]
    UnsupportedDestination(u64),
    #[error("Unsupported chain ID: {0}")]
    UnknownChain(u64),
}

impl CodedError for ChainPairError {
    fn code(&self) -> ErrorCode {
        ErrorCode::ChainUnsupported
    }
}

/// Failure reported by a chain client. Submission errors that come from the
/// wallet (declined prompt, signer refusal) are kept apart from transport errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("user rejected the request: {0}")]
    UserRejected(String),
    #[error("signing failed: {0}")]
    Signing(String),
    #[error("rpc: {0}")]
    Rpc(String),
    #[error("execution reverted: {0}")]
    Revert(String),
    #[error("timed out waiting for receipt of {0}")]
    Timeout(TxHash),
    #[error("{0}")]
    Other(String),
}

impl ChainError {
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, ChainError::UserRejected(_) | ChainError::Signing(_))
    }
}

impl CodedError for ChainError {
    fn code(&self) -> ErrorCode {
        match self {
            ChainError::UserRejected(_) => ErrorCode::ChainUserRejected,
            ChainError::Signing(_) => ErrorCode::ChainSigning,
            ChainError::Rpc(_) => ErrorCode::ChainRpc,
            ChainError::Revert(_) => ErrorCode::ChainReverted,
            ChainError::Timeout(_) => ErrorCode::ChainTimeout,
            ChainError::Other(_) => ErrorCode::Unknown,
        }
    }

    fn retriable(&self) -> bool {
        matches!(self, ChainError::Rpc(_) | ChainError::Timeout(_))
    }
}

impl From<ChainError> for String {
    fn from(value: ChainError) -> Self {
        format_with_code(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeploymentError {
    #[error("HEMI token not available for chain {0}")]
    NotConfigured(u64),
}

impl CodedError for DeploymentError {
    fn code(&self) -> ErrorCode {
        ErrorCode::BridgeDeployment
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid amount {0:?}")]
    InvalidFormat(String),
    #[error("amount does not fit in 256 bits")]
    Overflow,
    #[error("unsupported decimals {0}")]
    UnsupportedDecimals(u8),
}

impl CodedError for AmountError {
    fn code(&self) -> ErrorCode {
        ErrorCode::BridgeInvalidInput
    }
}

/// Errors escaping the bridge flow. The orchestrator reports these through
/// `unexpected-error`; expected failures travel as their own events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error(transparent)]
    ChainPair(#[from] ChainPairError),
    #[error(transparent)]
    Deployment(#[from] DeploymentError),
    #[error(transparent)]
    Chain(#[from] ChainError),
    #[error("source client is not bound to a chain")]
    MissingChainId,
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("bridge task panicked: {0}")]
    Panicked(String),
}

impl CodedError for BridgeError {
    fn code(&self) -> ErrorCode {
        match self {
            BridgeError::ChainPair(err) => err.code(),
            BridgeError::Deployment(err) => err.code(),
            BridgeError::Chain(err) => err.code(),
            BridgeError::MissingChainId => ErrorCode::ChainUnsupported,
            BridgeError::InvalidInput { .. } => ErrorCode::BridgeInvalidInput,
            BridgeError::Panicked(_) => ErrorCode::BridgeUnexpected,
        }
    }

    fn retriable(&self) -> bool {
        match self {
            BridgeError::Chain(err) => err.retriable(),
            _ => false,
        }
    }
}

impl From<BridgeError> for String {
    fn from(value: BridgeError) -> Self {
        format_with_code(&value)
    }
}
