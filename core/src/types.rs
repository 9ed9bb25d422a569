use std::fmt;
use std::sync::Arc;

use alloy::primitives::U256;

use crate::client::ChainClient;

/// Input of one bridge run. The source chain is whatever `client` is bound to.
#[derive(Clone)]
pub struct BridgeParams {
    pub amount: U256,
    pub from_address: String,
    pub to_address: String,
    pub client: Arc<dyn ChainClient>,
}

impl BridgeParams {
    pub fn new(
        amount: U256,
        from_address: impl Into<String>,
        to_address: impl Into<String>,
        client: Arc<dyn ChainClient>,
    ) -> Self {
        Self {
            amount,
            from_address: from_address.into(),
            to_address: to_address.into(),
            client,
        }
    }
}

impl fmt::Debug for BridgeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeParams")
            .field("amount", &self.amount)
            .field("from_address", &self.from_address)
            .field("to_address", &self.to_address)
            .field("chain_id", &self.client.chain_id())
            .finish()
    }
}
