use evm_bridge_client::EvmError;
use hemi_bridge_commons::error::{CodedError, ErrorCode};
use hemi_bridge_core::error::{AmountError, BridgeError, ChainPairError};
use thiserror::Error;

use crate::config::ConfigError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Evm(#[from] EvmError),
    #[error(transparent)]
    Bridge(#[from] BridgeError),
    #[error(transparent)]
    ChainPair(#[from] ChainPairError),
    #[error("invalid amount: {0}")]
    Amount(#[from] AmountError),
    #[error("invalid --{arg}: {reason}")]
    InvalidArgument { arg: &'static str, reason: String },
    #[error("bridge did not succeed: {0}")]
    NotBridged(String),
}

impl CliError {
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}

impl CodedError for CliError {
    fn code(&self) -> ErrorCode {
        match self {
            CliError::Config(err) => err.code(),
            CliError::Evm(err) => err.code(),
            CliError::Bridge(err) => err.code(),
            CliError::ChainPair(err) => err.code(),
            CliError::Amount(err) => err.code(),
            CliError::InvalidArgument { .. } => ErrorCode::BridgeInvalidInput,
            CliError::NotBridged(_) => ErrorCode::BridgeUnexpected,
        }
    }
}
