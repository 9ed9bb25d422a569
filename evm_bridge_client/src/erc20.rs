// ERC-20 reads and approvals for the bridged token

use crate::{client::EvmClient, config::TxPolicyConfig, errors::EvmError, types::*};
use alloy::{providers::DynProvider, sol, sol_types::SolCall};
use hemi_bridge_core::client::PreparedTransaction;
use tracing::debug;

sol! {
    #[sol(rpc)]
    contract IERC20 {
        function decimals() external view returns (uint8);
        function symbol() external view returns (string memory);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

#[derive(Clone)]
pub struct Erc20Client {
    pub token: Address,
    pub client: EvmClient,
}

impl Erc20Client {
    pub fn new(token: Address, client: EvmClient) -> Self {
        Self { token, client }
    }

    fn contract(&self) -> IERC20::IERC20Instance<DynProvider> {
        IERC20::new(self.token, self.client.provider.clone())
    }

    pub async fn decimals(&self) -> Result<u8, EvmError> {
        Ok(self.contract().decimals().call().await?)
    }

    pub async fn symbol(&self) -> Result<String, EvmError> {
        Ok(self.contract().symbol().call().await?)
    }

    pub async fn balance_of(&self, account: Address) -> Result<U256, EvmError> {
        Ok(self.contract().balanceOf(account).call().await?)
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, EvmError> {
        Ok(self.contract().allowance(owner, spender).call().await?)
    }

    // Submits the approval through the same fee policy as any other
    // transaction and returns as soon as the node accepts it.
    pub async fn approve(&self, spender: Address, amount: U256) -> Result<TxHash, EvmError> {
        let estimate = self
            .contract()
            .approve(spender, amount)
            .from(self.client.from)
            .estimate_gas()
            .await?;
        let tx = approval(self.token, self.client.from, spender, amount, estimate, &self.client.policy);
        debug!(token = %self.token, %spender, estimate, gas_limit = ?tx.gas_limit, "approval prepared");
        self.client.send_prepared(tx).await
    }
}

fn approval(
    token: Address,
    owner: Address,
    spender: Address,
    amount: U256,
    estimate: u64,
    policy: &TxPolicyConfig,
) -> PreparedTransaction {
    PreparedTransaction {
        from: owner,
        to: token,
        input: IERC20::approveCall { spender, amount }.abi_encode().into(),
        value: U256::ZERO,
        gas_limit: Some(policy.gas_limit_for(estimate)),
    }
}
