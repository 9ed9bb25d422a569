use std::collections::HashMap;
use std::env;
use std::str::FromStr;

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use evm_bridge_client::{RpcConfig, TxPolicyConfig};
use hemi_bridge_commons::error::{CodedError, ErrorCode, ExternalError};
use hemi_bridge_core::chains::{CHAINS, ChainSpec};
use hemi_bridge_core::deployments::{Deployments, TokenDeployment, default_token_address};
use hemi_bridge_core::validation::parse_address;
use thiserror::Error;
use tracing::debug;

const PRIVATE_KEY_VAR: &str = "EVM_PRIVATE_KEY";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    MissingEnv { var: String },
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
    #[error("no OFT adapter configured for {chain} (set {var})")]
    MissingDeployment { chain: &'static str, var: String },
    #[error("invalid {var}")]
    InvalidSigner {
        var: &'static str,
        #[source]
        source: ExternalError,
    },
}

impl CodedError for ConfigError {
    fn code(&self) -> ErrorCode {
        match self {
            ConfigError::MissingEnv { .. } => ErrorCode::ConfigMissingEnv,
            ConfigError::InvalidValue { .. } => ErrorCode::ConfigInvalidValue,
            ConfigError::MissingDeployment { .. } => ErrorCode::ConfigMissingDeployment,
            ConfigError::InvalidSigner { .. } => ErrorCode::ConfigSigner,
        }
    }
}

/// Per-chain settings read from `<PREFIX>_RPC_URL`, `<PREFIX>_OFT_ADAPTER` and `<PREFIX>_TOKEN`.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub spec: &'static ChainSpec,
    pub rpc_url: Option<String>,
    pub adapter: Option<Address>,
    pub token: Option<Address>,
}

impl ChainConfig {
    fn var(spec: &ChainSpec, suffix: &str) -> String {
        format!("{}_{suffix}", spec.env_prefix)
    }

    pub fn deployment(&self) -> Option<TokenDeployment> {
        let adapter = self.adapter?;
        let token = self.token.or_else(|| default_token_address(self.spec.chain_id))?;
        Some(TokenDeployment::hemi(self.spec.chain_id, token, adapter))
    }
}

pub struct Config {
    pub chains: Vec<ChainConfig>,
    pub policy: TxPolicyConfig,
    private_key: Option<String>,
}

impl Config {
    pub fn load() -> ConfigResult<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> ConfigResult<Self> {
        Self::from_lookup(|var| vars.get(var).cloned())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let get = |var: &str| get(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let chains = CHAINS
            .iter()
            .map(|spec| {
                let address = |suffix: &str| -> ConfigResult<Option<Address>> {
                    let var = ChainConfig::var(spec, suffix);
                    get(&var)
                        .map(|raw| {
                            parse_address(&raw).map_err(|reason| ConfigError::InvalidValue {
                                var: var.clone(),
                                reason: reason.to_string(),
                            })
                        })
                        .transpose()
                };
                Ok(ChainConfig {
                    spec,
                    rpc_url: get(&ChainConfig::var(spec, "RPC_URL")),
                    adapter: address("OFT_ADAPTER")?,
                    token: address("TOKEN")?,
                })
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        let defaults = TxPolicyConfig::default();
        let policy = TxPolicyConfig {
            max_fee_per_gas_wei: parse_opt(&get, "TX_MAX_FEE_PER_GAS_WEI")?,
            max_priority_fee_per_gas_wei: parse_opt(&get, "TX_MAX_PRIORITY_FEE_PER_GAS_WEI")?,
            gas_limit_multiplier_bps: parse_opt(&get, "TX_GAS_LIMIT_MULTIPLIER_BPS")?
                .unwrap_or(defaults.gas_limit_multiplier_bps),
            max_retries: parse_opt(&get, "TX_MAX_RETRIES")?.unwrap_or(defaults.max_retries),
            confirm_blocks: parse_opt(&get, "TX_CONFIRM_BLOCKS")?.unwrap_or(defaults.confirm_blocks),
            receipt_timeout_secs: parse_opt(&get, "TX_RECEIPT_TIMEOUT_SECS")?.unwrap_or(defaults.receipt_timeout_secs),
            receipt_poll_interval_ms: parse_opt(&get, "TX_RECEIPT_POLL_INTERVAL_MS")?
                .unwrap_or(defaults.receipt_poll_interval_ms),
        };
        debug!(?policy, "transaction policy loaded");

        Ok(Self {
            chains,
            policy,
            private_key: get(PRIVATE_KEY_VAR),
        })
    }

    pub fn chain(&self, chain_id: u64) -> Option<&ChainConfig> {
        self.chains.iter().find(|c| c.spec.chain_id == chain_id)
    }

    pub fn rpc(&self, spec: &ChainSpec) -> ConfigResult<RpcConfig> {
        let rpc_url = self
            .chain(spec.chain_id)
            .and_then(|c| c.rpc_url.clone())
            .ok_or_else(|| ConfigError::MissingEnv {
                var: ChainConfig::var(spec, "RPC_URL"),
            })?;
        Ok(RpcConfig {
            rpc_url,
            chain_id: spec.chain_id,
        })
    }

    pub fn deployments(&self) -> Deployments {
        let mut deployments = Deployments::new();
        for deployment in self.chains.iter().filter_map(ChainConfig::deployment) {
            deployments.insert(deployment);
        }
        deployments
    }

    // Fails early with the variable to set instead of a generic lookup error later.
    pub fn require_deployment(&self, spec: &ChainSpec) -> ConfigResult<()> {
        match self.chain(spec.chain_id).and_then(ChainConfig::deployment) {
            Some(_) => Ok(()),
            None => Err(ConfigError::MissingDeployment {
                chain: spec.name,
                var: ChainConfig::var(spec, "OFT_ADAPTER"),
            }),
        }
    }

    pub fn signer(&self) -> ConfigResult<PrivateKeySigner> {
        let key = self.private_key.as_deref().ok_or_else(|| ConfigError::MissingEnv {
            var: PRIVATE_KEY_VAR.to_string(),
        })?;
        key.parse::<PrivateKeySigner>().map_err(|e| ConfigError::InvalidSigner {
            var: PRIVATE_KEY_VAR,
            source: ExternalError(e.to_string()),
        })
    }

    pub fn has_signer(&self) -> bool {
        self.private_key.is_some()
    }
}

fn parse_opt<T>(get: &impl Fn(&str) -> Option<String>, var: &str) -> ConfigResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get(var)
        .map(|raw| {
            raw.parse::<T>().map_err(|e| ConfigError::InvalidValue {
                var: var.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
}
