pub mod amount;
pub mod balance;
pub mod chains;
pub mod client;
pub mod deployments;
pub mod error;
pub mod events;
pub mod fees;
pub mod oft;
pub mod orchestrator;
pub mod types;
pub mod validation;

pub use client::{ChainClient, PreparedTransaction, TxReceipt, TxStatus};
pub use error::{BridgeError, BridgeResult, ChainError, ChainPairError, DeploymentError};
pub use events::{BridgeEvent, BridgeEvents};
pub use orchestrator::{BridgeOperation, OftBridge};
pub use types::BridgeParams;
