//! Static chain-pair table.
//!
//! Every supported chain has exactly one counterpart in the same network pair,
//! so `target_chain_id` is an involution. Endpoint ids are LayerZero v2 ids and
//! unrelated to EVM chain ids.

use crate::error::ChainPairError;

pub const BSC: u64 = 56;
pub const BSC_TESTNET: u64 = 97;
pub const HEMI: u64 = 43_111;
pub const HEMI_SEPOLIA: u64 = 743_111;

/// Chains a bridge may start from.
pub const SUPPORTED_SOURCE_CHAINS: [u64; 2] = [HEMI, BSC];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkPair {
    Main,
    Test,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCurrency {
    pub symbol: &'static str,
    pub decimals: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSpec {
    pub chain_id: u64,
    pub name: &'static str,
    // Prefix of the per-chain configuration variables (`HEMI_RPC_URL`, ...)
    pub env_prefix: &'static str,
    pub pair: NetworkPair,
    pub counterpart: u64,
    pub endpoint_id: u32,
    pub native_currency: NativeCurrency,
}

const ETH: NativeCurrency = NativeCurrency {
    symbol: "ETH",
    decimals: 18,
};

pub static CHAINS: [ChainSpec; 4] = [
    ChainSpec {
        chain_id: HEMI,
        name: "hemi",
        env_prefix: "HEMI",
        pair: NetworkPair::Main,
        counterpart: BSC,
        endpoint_id: 30_329,
        native_currency: ETH,
    },
    ChainSpec {
        chain_id: BSC,
        name: "bsc",
        env_prefix: "BSC",
        pair: NetworkPair::Main,
        counterpart: HEMI,
        endpoint_id: 30_102,
        native_currency: NativeCurrency {
            symbol: "BNB",
            decimals: 18,
        },
    },
    ChainSpec {
        chain_id: HEMI_SEPOLIA,
        name: "hemi-sepolia",
        env_prefix: "HEMI_SEPOLIA",
        pair: NetworkPair::Test,
        counterpart: BSC_TESTNET,
        endpoint_id: 40_338,
        native_currency: ETH,
    },
    ChainSpec {
        chain_id: BSC_TESTNET,
        name: "bsc-testnet",
        env_prefix: "BSC_TESTNET",
        pair: NetworkPair::Test,
        counterpart: HEMI_SEPOLIA,
        endpoint_id: 40_102,
        native_currency: NativeCurrency {
            symbol: "tBNB",
            decimals: 18,
        },
    },
];

pub fn chain(chain_id: u64) -> Result<&'static ChainSpec, ChainPairError> {
    CHAINS
        .iter()
        .find(|spec| spec.chain_id == chain_id)
        .ok_or(ChainPairError::UnknownChain(chain_id))
}

pub fn target_chain_id(source_chain_id: u64) -> Result<u64, ChainPairError> {
    chain(source_chain_id)
        .map(|spec| spec.counterpart)
        .map_err(|_| ChainPairError::UnsupportedSource(source_chain_id))
}

pub fn endpoint_id(chain_id: u64) -> Result<u32, ChainPairError> {
    chain(chain_id)
        .map(|spec| spec.endpoint_id)
        .map_err(|_| ChainPairError::UnsupportedDestination(chain_id))
}

pub fn is_supported_source(chain_id: u64) -> bool {
    SUPPORTED_SOURCE_CHAINS.contains(&chain_id)
}

// Accepts a numeric chain id, the short name ("bsc-testnet") or the env prefix ("BSC_TESTNET").
pub fn find(query: &str) -> Option<&'static ChainSpec> {
    let query = query.trim();
    if let Ok(id) = query.parse::<u64>() {
        return chain(id).ok();
    }
    CHAINS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(query) || spec.env_prefix.eq_ignore_ascii_case(query))
}
