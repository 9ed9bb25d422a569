use alloy::primitives::{Address, U256};
use tracing::debug;

use crate::amount::format_units;
use crate::chains;
use crate::client::ChainClient;
use crate::deployments::TokenDeployment;
use crate::error::ChainError;

pub struct BalanceCheck<'a> {
    pub amount: U256,
    pub client: &'a dyn ChainClient,
    pub token: &'a TokenDeployment,
    pub user: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceVerdict {
    CanBridge,
    Rejected { reason: String },
}

impl BalanceVerdict {
    #[cfg(test)]
    pub(crate) fn can_bridge(&self) -> bool {
        matches!(self, BalanceVerdict::CanBridge)
    }
}

/// Checks the token balance covers `amount` and that the user holds some
/// native currency for gas. Lookup failures become a rejection, never an error.
///
/// The gas check only tests for a non-zero balance. The real fee is compared
/// later against the messaging-fee quote.
pub async fn check_balance(check: BalanceCheck<'_>) -> BalanceVerdict {
    match run_checks(&check).await {
        Ok(verdict) => verdict,
        Err(err) => BalanceVerdict::Rejected {
            reason: format!("Failed to check balance: {err}"),
        },
    }
}

async fn run_checks(check: &BalanceCheck<'_>) -> Result<BalanceVerdict, ChainError> {
    let token = check.token;
    let balance = check.client.token_balance(token.token, check.user).await?;
    debug!(user = %check.user, %balance, required = %check.amount, "token balance");

    if balance < check.amount {
        return Ok(BalanceVerdict::Rejected {
            reason: format!(
                "Insufficient {} token balance. Required: {}, Available: {}",
                token.symbol,
                format_units(check.amount, token.decimals),
                format_units(balance, token.decimals),
            ),
        });
    }

    let native = check.client.native_balance(check.user).await?;
    if native.is_zero() {
        let symbol = chains::chain(token.chain_id)
            .map(|spec| spec.native_currency.symbol)
            .unwrap_or("native");
        return Ok(BalanceVerdict::Rejected {
            reason: format!("Insufficient {symbol} balance for gas fees"),
        });
    }

    Ok(BalanceVerdict::CanBridge)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::chains::{BSC, HEMI};
    use crate::client::MockChainClient;
    use crate::deployments::{HEMI_TOKEN_ON_BSC, HEMI_TOKEN_ON_HEMI};

    fn ether(n: u64) -> U256 {
        U256::from(n) * U256::from(10u64).pow(U256::from(18u8))
    }

    fn user() -> Address {
        Address::repeat_byte(0x11)
    }

    #[tokio::test]
    async fn passes_with_enough_tokens_and_some_gas() {
        let token = TokenDeployment::hemi(HEMI, HEMI_TOKEN_ON_HEMI, Address::repeat_byte(0xaa));
        let mut client = MockChainClient::new();
        client
            .expect_token_balance()
            .with(eq(HEMI_TOKEN_ON_HEMI), eq(user()))
            .returning(|_, _| Ok(ether(100)));
        // A single wei passes the coarse gas check.
        client.expect_native_balance().returning(|_| Ok(U256::from(1u8)));

        let verdict = check_balance(BalanceCheck {
            amount: ether(100),
            client: &client,
            token: &token,
            user: user(),
        })
        .await;

        assert!(verdict.can_bridge());
    }

    #[tokio::test]
    async fn short_token_balance_quotes_both_amounts() {
        let token = TokenDeployment::hemi(HEMI, HEMI_TOKEN_ON_HEMI, Address::repeat_byte(0xaa));
        let mut client = MockChainClient::new();
        client
            .expect_token_balance()
            .returning(|_, _| Ok(U256::from(2_500_000_000_000_000_000u128)));
        client.expect_native_balance().never();

        let verdict = check_balance(BalanceCheck {
            amount: ether(100),
            client: &client,
            token: &token,
            user: user(),
        })
        .await;

        assert_eq!(
            verdict,
            BalanceVerdict::Rejected {
                reason: "Insufficient HEMI token balance. Required: 100, Available: 2.5".into()
            }
        );
    }

    #[tokio::test]
    async fn zero_native_balance_names_the_chain_currency() {
        let token = TokenDeployment::hemi(BSC, HEMI_TOKEN_ON_BSC, Address::repeat_byte(0xaa));
        let mut client = MockChainClient::new();
        client.expect_token_balance().returning(|_, _| Ok(ether(1)));
        client.expect_native_balance().returning(|_| Ok(U256::ZERO));

        let verdict = check_balance(BalanceCheck {
            amount: ether(1),
            client: &client,
            token: &token,
            user: user(),
        })
        .await;

        assert_eq!(
            verdict,
            BalanceVerdict::Rejected {
                reason: "Insufficient BNB balance for gas fees".into()
            }
        );
    }

    #[tokio::test]
    async fn lookup_failure_becomes_a_rejection() {
        let token = TokenDeployment::hemi(HEMI, HEMI_TOKEN_ON_HEMI, Address::repeat_byte(0xaa));
        let mut client = MockChainClient::new();
        client
            .expect_token_balance()
            .returning(|_, _| Err(ChainError::Rpc("connection refused".into())));

        let verdict = check_balance(BalanceCheck {
            amount: ether(1),
            client: &client,
            token: &token,
            user: user(),
        })
        .await;

        assert_eq!(
            verdict,
            BalanceVerdict::Rejected {
                reason: "Failed to check balance: rpc: connection refused".into()
            }
        );
    }
}
