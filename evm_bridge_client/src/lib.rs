//! # EVM Bridge Client
//!
//! alloy-backed access to the chains the HEMI OFT bridge runs on.
//!
//! ## Features
//! - Generic EVM client with EIP-1559 fee caps, gas padding, and receipt polling with confirmations
//! - ERC-20 balance, allowance and approval calls
//! - LayerZero OFT adapter quoting and send simulation
//! - A [`hemi_bridge_core::ChainClient`] implementation for [`EvmClient`]
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use evm_bridge_client::*;
//! use alloy::primitives::U256;
//! use hemi_bridge_core::deployments::{Deployments, TokenDeployment, HEMI_TOKEN_ON_HEMI};
//! use hemi_bridge_core::{BridgeParams, OftBridge};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rpc = RpcConfig {
//!         rpc_url: "https://rpc.hemi.network/rpc".into(),
//!         chain_id: 43_111,
//!     };
//!     let signer = PrivateKeySigner::random();
//!     let from = signer.address();
//!     let client = EvmClient::connect(rpc, signer, TxPolicyConfig::default()).await?;
//!
//!     let adapter = "0x0000000000000000000000000000000000000001".parse()?;
//!     let bridge = OftBridge::new(Deployments::new().with(TokenDeployment::hemi(43_111, HEMI_TOKEN_ON_HEMI, adapter)));
//!
//!     let params = BridgeParams::new(U256::from(10u8), from.to_string(), from.to_string(), Arc::new(client));
//!     for event in bridge.bridge(params).finish().await {
//!         println!("{event}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod chain_client;
pub mod client;
pub mod config;
pub mod erc20;
pub mod errors;
pub mod oft_adapter;
pub mod types;

pub use client::EvmClient;
pub use config::{RpcConfig, TxPolicyConfig};
pub use erc20::Erc20Client;
pub use errors::EvmError;
pub use oft_adapter::OftAdapterClient;
pub use types::*;
