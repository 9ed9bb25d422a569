use std::collections::BTreeMap;

use alloy::primitives::{Address, address};

use crate::chains::{BSC, HEMI};
use crate::error::DeploymentError;

pub const HEMI_TOKEN_SYMBOL: &str = "HEMI";
pub const HEMI_TOKEN_DECIMALS: u8 = 18;

pub const HEMI_TOKEN_ON_HEMI: Address = address!("99e3dE3817F6081B2568208337ef83295b7f591D");
pub const HEMI_TOKEN_ON_BSC: Address = address!("5fFD0EAdc186AF9512542d0d5e5eAFC65d5aFc5B");

// Known HEMI token contracts; other chains need an explicit token address.
pub fn default_token_address(chain_id: u64) -> Option<Address> {
    match chain_id {
        HEMI => Some(HEMI_TOKEN_ON_HEMI),
        BSC => Some(HEMI_TOKEN_ON_BSC),
        _ => None,
    }
}

/// The bridged token and the OFT adapter that spends it on one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDeployment {
    pub chain_id: u64,
    pub token: Address,
    pub adapter: Address,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenDeployment {
    pub fn hemi(chain_id: u64, token: Address, adapter: Address) -> Self {
        Self {
            chain_id,
            token,
            adapter,
            symbol: HEMI_TOKEN_SYMBOL.to_string(),
            decimals: HEMI_TOKEN_DECIMALS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Deployments {
    by_chain: BTreeMap<u64, TokenDeployment>,
}

impl Deployments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, deployment: TokenDeployment) -> Self {
        self.insert(deployment);
        self
    }

    pub fn insert(&mut self, deployment: TokenDeployment) {
        self.by_chain.insert(deployment.chain_id, deployment);
    }

    pub fn get(&self, chain_id: u64) -> Result<&TokenDeployment, DeploymentError> {
        self.by_chain.get(&chain_id).ok_or(DeploymentError::NotConfigured(chain_id))
    }

    pub fn is_empty(&self) -> bool {
        self.by_chain.is_empty()
    }
}
