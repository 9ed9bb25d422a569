use std::any::Any;
use std::ops::ControlFlow;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use alloy::primitives::{Address, U256};
use futures::FutureExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::balance::{self, BalanceCheck, BalanceVerdict};
use crate::client::ChainClient;
use crate::deployments::{Deployments, TokenDeployment};
use crate::error::{BridgeError, BridgeResult};
use crate::events::{self, BridgeEvent, BridgeEvents, EventEmitter};
use crate::fees::{self, FeeEstimationParams};
use crate::oft::{self, MessagingFee};
use crate::types::BridgeParams;
use crate::validation::{self, ValidationResult};

const INSUFFICIENT_NATIVE_FOR_FEE: &str = "Insufficient native balance for messaging fee";

/// Handle to a running bridge: its event stream and the task driving it.
pub struct BridgeOperation {
    pub events: BridgeEvents,
    pub completion: JoinHandle<()>,
}

impl BridgeOperation {
    /// Drains every event and waits for the task to end.
    pub async fn finish(self) -> Vec<BridgeEvent> {
        let events = self.events.collect().await;
        if let Err(e) = self.completion.await {
            warn!("bridge task did not complete: {e}");
        }
        events
    }
}

/// Bridges the HEMI token through the OFT adapter configured for the source chain.
#[derive(Debug, Clone)]
pub struct OftBridge {
    deployments: Arc<Deployments>,
}

impl OftBridge {
    pub fn new(deployments: Deployments) -> Self {
        Self {
            deployments: Arc::new(deployments),
        }
    }

    pub fn deployments(&self) -> &Deployments {
        &self.deployments
    }

    /// Starts a bridge run and returns immediately.
    ///
    /// The event channel exists before the task is spawned, so `pre-bridge` is
    /// never lost. Failures are reported as events; this call itself cannot
    /// fail. Must be called from within a Tokio runtime.
    pub fn bridge(&self, params: BridgeParams) -> BridgeOperation {
        let (emitter, events) = events::channel();
        let completion = tokio::spawn(run_bridge(self.deployments.clone(), params, emitter));
        BridgeOperation { events, completion }
    }

    /// Fee preview for the configured adapter on `params.chain_id`.
    pub async fn quote_send(
        &self,
        client: &dyn ChainClient,
        params: FeeEstimationParams,
    ) -> BridgeResult<MessagingFee> {
        let adapter = self.deployments.get(params.chain_id)?.adapter;
        fees::quote_send(client, adapter, params).await
    }
}

#[instrument(name = "bridge", skip_all, fields(amount = %params.amount))]
async fn run_bridge(deployments: Arc<Deployments>, params: BridgeParams, events: EventEmitter) {
    let flow = AssertUnwindSafe(drive(&deployments, &params, &events)).catch_unwind();

    match flow.await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => events.emit(BridgeEvent::UnexpectedError(err)),
        Err(panic) => events.emit(BridgeEvent::UnexpectedError(BridgeError::Panicked(panic_message(
            panic.as_ref(),
        )))),
    }

    events.emit(BridgeEvent::Settled);
}

// Runs the flow up to its outcome. Expected failures are emitted here and end
// the run with `Ok`; anything returned as `Err` is unexpected.
async fn drive(deployments: &Deployments, params: &BridgeParams, events: &EventEmitter) -> BridgeResult<()> {
    if let ValidationResult::Invalid { reason } = validation::validate(params) {
        events.emit(BridgeEvent::ValidationFailed(reason));
        return Ok(());
    }

    events.emit(BridgeEvent::PreBridge);

    let client = params.client.as_ref();
    let source_chain_id = client.chain_id().ok_or(BridgeError::MissingChainId)?;
    let deployment = deployments.get(source_chain_id)?;
    let from = parse_field("from_address", &params.from_address)?;
    let to = parse_field("to_address", &params.to_address)?;

    let verdict = balance::check_balance(BalanceCheck {
        amount: params.amount,
        client,
        token: deployment,
        user: from,
    })
    .await;
    if let BalanceVerdict::Rejected { reason } = verdict {
        events.emit(BridgeEvent::ValidationFailed(reason));
        return Ok(());
    }

    let allowance = client.allowance(deployment.token, from, deployment.adapter).await?;
    if allowance < params.amount {
        if approve_spend(client, deployment, from, params.amount, events).await.is_break() {
            return Ok(());
        }
    } else {
        debug!(%allowance, "allowance covers amount, skipping approval");
    }

    // Always re-quote right before sending.
    let quote = fees::quote_send(
        client,
        deployment.adapter,
        FeeEstimationParams {
            amount: params.amount,
            chain_id: source_chain_id,
            to_address: to,
        },
    );
    let native_balance = async { client.native_balance(from).await.map_err(BridgeError::from) };
    let (fee, native_balance) = futures::future::try_join(quote, native_balance).await?;

    if native_balance < fee.nativeFee {
        debug!(%native_balance, native_fee = %fee.nativeFee, "native balance below messaging fee");
        events.emit(BridgeEvent::ValidationFailed(INSUFFICIENT_NATIVE_FOR_FEE.to_string()));
        return Ok(());
    }

    let param = oft::send_param_for(source_chain_id, params.amount, to)?;
    let tx = client.simulate_send(deployment.adapter, param, fee, from, from).await?;

    let hash = match client.send_transaction(tx).await {
        Ok(hash) => hash,
        Err(err) => {
            if !err.is_user_rejection() {
                warn!("bridge submission failed: {err}");
            }
            events.emit(BridgeEvent::BridgeRejected(err));
            return Ok(());
        }
    };
    events.emit(BridgeEvent::BridgeSigned(hash));

    match client.wait_for_receipt(hash).await {
        Err(err) => events.emit(BridgeEvent::BridgeFailed(err)),
        Ok(receipt) if receipt.succeeded() => {
            info!(tx = %hash, fee_paid = %receipt.fee_paid(), "bridge transaction confirmed");
            events.emit(BridgeEvent::BridgeSucceeded(receipt));
        }
        Ok(receipt) => events.emit(BridgeEvent::BridgeReverted(receipt)),
    }

    Ok(())
}

// Approves exactly `amount` for the adapter and waits for it to be mined.
async fn approve_spend(
    client: &dyn ChainClient,
    deployment: &TokenDeployment,
    owner: Address,
    amount: U256,
    events: &EventEmitter,
) -> ControlFlow<()> {
    events.emit(BridgeEvent::PreApprove);

    let hash = match client.approve(deployment.token, deployment.adapter, amount, owner).await {
        Ok(hash) => hash,
        Err(err) => {
            if !err.is_user_rejection() {
                warn!("approval submission failed: {err}");
            }
            events.emit(BridgeEvent::ApprovalRejected(err));
            return ControlFlow::Break(());
        }
    };
    events.emit(BridgeEvent::ApprovalSigned(hash));

    match client.wait_for_receipt(hash).await {
        Err(err) => {
            events.emit(BridgeEvent::ApprovalFailed(err));
            ControlFlow::Break(())
        }
        Ok(receipt) if receipt.succeeded() => {
            events.emit(BridgeEvent::ApprovalSucceeded(receipt));
            ControlFlow::Continue(())
        }
        Ok(receipt) => {
            events.emit(BridgeEvent::ApprovalReverted(receipt));
            ControlFlow::Break(())
        }
    }
}

// Addresses have already passed validation by this point.
fn parse_field(field: &'static str, value: &str) -> BridgeResult<Address> {
    validation::parse_address(value).map_err(|reason| BridgeError::InvalidInput {
        field,
        reason: reason.to_string(),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use alloy::primitives::{Bytes, TxHash};
    use async_trait::async_trait;
    use mockall::predicate::eq;

    use super::*;
    use crate::chains::{BSC, HEMI};
    use crate::client::{MockChainClient, PreparedTransaction, TxReceipt, TxStatus};
    use crate::deployments::HEMI_TOKEN_ON_HEMI;
    use crate::error::{ChainError, DeploymentError};
    use crate::oft::SendParam;

    const FROM: &str = "0x1111111111111111111111111111111111111111";
    const TO: &str = "0x2222222222222222222222222222222222222222";

    fn adapter() -> Address {
        Address::repeat_byte(0xaa)
    }

    fn approval_hash() -> TxHash {
        TxHash::repeat_byte(0x01)
    }

    fn bridge_hash() -> TxHash {
        TxHash::repeat_byte(0x02)
    }

    fn receipt(hash: TxHash, status: TxStatus) -> TxReceipt {
        TxReceipt {
            transaction_hash: hash,
            block_number: Some(100),
            gas_used: 50_000,
            effective_gas_price: 1_000_000_000,
            status,
        }
    }

    fn bridge_under_test() -> OftBridge {
        OftBridge::new(Deployments::new().with(TokenDeployment::hemi(HEMI, HEMI_TOKEN_ON_HEMI, adapter())))
    }

    /// Chain state and wallet behaviour for one run. Defaults describe a
    /// funded user without allowance whose approval and send both succeed.
    #[derive(Clone)]
    struct Scenario {
        token_balance: U256,
        native_balance: U256,
        allowance: U256,
        native_fee: U256,
        approve: Result<TxHash, ChainError>,
        approval_receipt: Result<TxStatus, ChainError>,
        simulate: Result<(), ChainError>,
        send: Result<TxHash, ChainError>,
        bridge_receipt: Result<TxStatus, ChainError>,
        expected_sends: usize,
        expected_approvals: usize,
        // Read failures; the native one only hits the re-check after approval.
        allowance_error: Option<ChainError>,
        quote_error: Option<ChainError>,
        native_recheck_error: Option<ChainError>,
    }

    impl Default for Scenario {
        fn default() -> Self {
            Self {
                token_balance: U256::from(1_000u32),
                native_balance: U256::from(10_000u32),
                allowance: U256::ZERO,
                native_fee: U256::from(500u32),
                approve: Ok(approval_hash()),
                approval_receipt: Ok(TxStatus::Succeeded),
                simulate: Ok(()),
                send: Ok(bridge_hash()),
                bridge_receipt: Ok(TxStatus::Succeeded),
                expected_sends: 1,
                expected_approvals: 1,
                allowance_error: None,
                quote_error: None,
                native_recheck_error: None,
            }
        }
    }

    impl Scenario {
        fn client(self) -> MockChainClient {
            let mut client = MockChainClient::new();
            client.expect_chain_id().return_const(Some(HEMI));

            let token_balance = self.token_balance;
            client
                .expect_token_balance()
                .with(eq(HEMI_TOKEN_ON_HEMI), eq(addr(FROM)))
                .returning(move |_, _| Ok(token_balance));

            let native_balance = self.native_balance;
            let native_recheck_error = self.native_recheck_error.clone();
            let native_reads = AtomicUsize::new(0);
            client.expect_native_balance().returning(move |_| {
                let first = native_reads.fetch_add(1, Ordering::SeqCst) == 0;
                match &native_recheck_error {
                    Some(err) if !first => Err(err.clone()),
                    _ => Ok(native_balance),
                }
            });

            let allowance = self.allowance;
            let allowance_error = self.allowance_error.clone();
            client
                .expect_allowance()
                .with(eq(HEMI_TOKEN_ON_HEMI), eq(addr(FROM)), eq(adapter()))
                .returning(move |_, _, _| allowance_error.clone().map_or(Ok(allowance), Err));

            let approve = self.approve.clone();
            client
                .expect_approve()
                .withf(|token, spender, amount, owner| {
                    *token == HEMI_TOKEN_ON_HEMI
                        && *spender == adapter()
                        && *amount == U256::from(100u8)
                        && *owner == addr(FROM)
                })
                .times(self.expected_approvals)
                .returning(move |_, _, _, _| approve.clone());

            let native_fee = self.native_fee;
            let quote_error = self.quote_error.clone();
            client.expect_quote_send().returning(move |_, _, _| match &quote_error {
                Some(err) => Err(err.clone()),
                None => Ok(MessagingFee {
                    nativeFee: native_fee,
                    lzTokenFee: U256::ZERO,
                }),
            });

            let simulate = self.simulate.clone();
            client
                .expect_simulate_send()
                .returning(move |adapter, _, fee, _, from| {
                    simulate.clone().map(|()| PreparedTransaction {
                        from,
                        to: adapter,
                        input: Bytes::from_static(&[0xc7, 0xc7, 0xf5, 0xb3]),
                        value: fee.nativeFee,
                        gas_limit: Some(300_000),
                    })
                });

            let send = self.send.clone();
            client
                .expect_send_transaction()
                .times(self.expected_sends)
                .returning(move |_| send.clone());

            let approval_receipt = self.approval_receipt.clone();
            let bridge_receipt = self.bridge_receipt.clone();
            client.expect_wait_for_receipt().returning(move |hash| {
                let status = if hash == approval_hash() {
                    approval_receipt.clone()
                } else {
                    bridge_receipt.clone()
                };
                status.map(|status| receipt(hash, status))
            });

            client
        }
    }

    fn addr(value: &str) -> Address {
        value.parse().unwrap()
    }

    fn params(amount: u64, client: impl ChainClient + 'static) -> BridgeParams {
        BridgeParams::new(U256::from(amount), FROM, TO, Arc::new(client))
    }

    async fn run(scenario: Scenario) -> Vec<BridgeEvent> {
        bridge_under_test().bridge(params(100, scenario.client())).finish().await
    }

    fn names(events: &[BridgeEvent]) -> Vec<&'static str> {
        events.iter().map(BridgeEvent::name).collect()
    }

    // Exactly one outcome, immediately followed by the single final `settled`.
    fn assert_settles_once(events: &[BridgeEvent]) {
        let outcomes = events.iter().filter(|e| e.is_outcome()).count();
        assert_eq!(outcomes, 1, "{:?}", names(events));
        assert_eq!(events.iter().filter(|e| **e == BridgeEvent::Settled).count(), 1);
        assert_eq!(events.last(), Some(&BridgeEvent::Settled));
        assert!(events[events.len() - 2].is_outcome());
    }

    #[tokio::test]
    async fn zero_amount_only_reports_validation_failure() {
        // No expectations: the client must not be touched.
        let events = bridge_under_test().bridge(params(0, MockChainClient::new())).finish().await;

        assert_eq!(
            events,
            vec![
                BridgeEvent::ValidationFailed("Amount must be greater than zero".into()),
                BridgeEvent::Settled,
            ]
        );
    }

    #[tokio::test]
    async fn pre_bridge_is_the_first_event_seen() {
        let mut operation = bridge_under_test().bridge(params(100, Scenario::default().client()));

        assert_eq!(operation.events.recv().await, Some(BridgeEvent::PreBridge));
        operation.finish().await;
    }

    #[tokio::test]
    async fn successful_bridge_with_approval_emits_full_sequence() {
        let events = run(Scenario::default()).await;

        assert_eq!(
            names(&events),
            vec![
                "pre-bridge",
                "pre-approve",
                "approval-signed",
                "approval-succeeded",
                "bridge-signed",
                "bridge-succeeded",
                "settled",
            ]
        );
        assert_eq!(events[2], BridgeEvent::ApprovalSigned(approval_hash()));
        assert_eq!(
            events[5],
            BridgeEvent::BridgeSucceeded(receipt(bridge_hash(), TxStatus::Succeeded))
        );
        assert_settles_once(&events);
    }

    #[tokio::test]
    async fn sufficient_allowance_skips_approval() {
        let events = run(Scenario {
            allowance: U256::from(100u8),
            expected_approvals: 0,
            ..Scenario::default()
        })
        .await;

        assert_eq!(
            names(&events),
            vec!["pre-bridge", "bridge-signed", "bridge-succeeded", "settled"]
        );
    }

    #[tokio::test]
    async fn insufficient_token_balance_is_a_validation_failure() {
        let events = run(Scenario {
            token_balance: U256::from(99u8),
            expected_approvals: 0,
            expected_sends: 0,
            ..Scenario::default()
        })
        .await;

        assert_eq!(names(&events), vec!["pre-bridge", "validation-failed", "settled"]);
        assert_settles_once(&events);
    }

    #[tokio::test]
    async fn approval_rejected_by_user() {
        let events = run(Scenario {
            approve: Err(ChainError::UserRejected("User denied transaction signature".into())),
            expected_sends: 0,
            ..Scenario::default()
        })
        .await;

        assert_eq!(
            names(&events),
            vec!["pre-bridge", "pre-approve", "approval-rejected", "settled"]
        );
        assert_settles_once(&events);
    }

    #[tokio::test]
    async fn approval_wait_failure() {
        let events = run(Scenario {
            approval_receipt: Err(ChainError::Timeout(approval_hash())),
            expected_sends: 0,
            ..Scenario::default()
        })
        .await;

        assert_eq!(
            names(&events),
            vec!["pre-bridge", "pre-approve", "approval-signed", "approval-failed", "settled"]
        );
        assert_settles_once(&events);
    }

    #[tokio::test]
    async fn approval_reverted_stops_before_sending() {
        let events = run(Scenario {
            approval_receipt: Ok(TxStatus::Reverted),
            expected_sends: 0,
            ..Scenario::default()
        })
        .await;

        assert_eq!(
            names(&events),
            vec!["pre-bridge", "pre-approve", "approval-signed", "approval-reverted", "settled"]
        );
        assert_eq!(
            events[3],
            BridgeEvent::ApprovalReverted(receipt(approval_hash(), TxStatus::Reverted))
        );
        assert_settles_once(&events);
    }

    #[tokio::test]
    async fn native_balance_below_fee_never_submits_the_send() {
        let events = run(Scenario {
            native_balance: U256::from(499u32),
            native_fee: U256::from(500u32),
            expected_sends: 0,
            ..Scenario::default()
        })
        .await;

        assert_eq!(
            names(&events),
            vec![
                "pre-bridge",
                "pre-approve",
                "approval-signed",
                "approval-succeeded",
                "validation-failed",
                "settled",
            ]
        );
        assert_eq!(
            events[4],
            BridgeEvent::ValidationFailed("Insufficient native balance for messaging fee".into())
        );
    }

    #[tokio::test]
    async fn bridge_rejected_by_user() {
        let events = run(Scenario {
            allowance: U256::MAX,
            expected_approvals: 0,
            send: Err(ChainError::UserRejected("User rejected the request.".into())),
            ..Scenario::default()
        })
        .await;

        assert_eq!(names(&events), vec!["pre-bridge", "bridge-rejected", "settled"]);
        assert_settles_once(&events);
    }

    #[tokio::test]
    async fn bridge_wait_failure() {
        let events = run(Scenario {
            allowance: U256::MAX,
            expected_approvals: 0,
            bridge_receipt: Err(ChainError::Rpc("header not found".into())),
            ..Scenario::default()
        })
        .await;

        assert_eq!(
            names(&events),
            vec!["pre-bridge", "bridge-signed", "bridge-failed", "settled"]
        );
        assert_settles_once(&events);
    }

    #[tokio::test]
    async fn bridge_reverted_on_chain() {
        let events = run(Scenario {
            allowance: U256::MAX,
            expected_approvals: 0,
            bridge_receipt: Ok(TxStatus::Reverted),
            ..Scenario::default()
        })
        .await;

        assert_eq!(
            names(&events),
            vec!["pre-bridge", "bridge-signed", "bridge-reverted", "settled"]
        );
        assert_settles_once(&events);
    }

    #[tokio::test]
    async fn simulation_failure_is_unexpected() {
        let revert = ChainError::Revert("LzTokenUnavailable()".into());
        let events = run(Scenario {
            allowance: U256::MAX,
            expected_approvals: 0,
            simulate: Err(revert.clone()),
            expected_sends: 0,
            ..Scenario::default()
        })
        .await;

        assert_eq!(
            events,
            vec![
                BridgeEvent::PreBridge,
                BridgeEvent::UnexpectedError(BridgeError::Chain(revert)),
                BridgeEvent::Settled,
            ]
        );
    }

    #[tokio::test]
    async fn allowance_read_failure_is_unexpected() {
        let down = ChainError::Rpc("allowance down".into());
        let events = run(Scenario {
            allowance_error: Some(down.clone()),
            expected_approvals: 0,
            expected_sends: 0,
            ..Scenario::default()
        })
        .await;

        assert_eq!(
            events,
            vec![
                BridgeEvent::PreBridge,
                BridgeEvent::UnexpectedError(BridgeError::Chain(down)),
                BridgeEvent::Settled,
            ]
        );
    }

    #[tokio::test]
    async fn fee_requote_failure_is_unexpected() {
        let events = run(Scenario {
            allowance: U256::MAX,
            expected_approvals: 0,
            quote_error: Some(ChainError::Rpc("quote down".into())),
            expected_sends: 0,
            ..Scenario::default()
        })
        .await;

        assert_eq!(names(&events), vec!["pre-bridge", "unexpected-error", "settled"]);
        assert_settles_once(&events);
    }

    #[tokio::test]
    async fn native_recheck_failure_after_approval_is_unexpected() {
        let down = ChainError::Rpc("balance down".into());
        let events = run(Scenario {
            native_recheck_error: Some(down.clone()),
            expected_sends: 0,
            ..Scenario::default()
        })
        .await;

        assert_eq!(
            names(&events),
            vec![
                "pre-bridge",
                "pre-approve",
                "approval-signed",
                "approval-succeeded",
                "unexpected-error",
                "settled"
            ]
        );
        assert_eq!(events[4], BridgeEvent::UnexpectedError(BridgeError::Chain(down)));
    }

    #[tokio::test]
    async fn missing_deployment_is_unexpected() {
        let mut client = MockChainClient::new();
        client.expect_chain_id().return_const(Some(BSC));

        let events = bridge_under_test().bridge(params(100, client)).finish().await;

        assert_eq!(
            events,
            vec![
                BridgeEvent::PreBridge,
                BridgeEvent::UnexpectedError(BridgeError::Deployment(DeploymentError::NotConfigured(BSC))),
                BridgeEvent::Settled,
            ]
        );
    }

    struct PanickingClient;

    #[async_trait]
    impl ChainClient for PanickingClient {
        fn chain_id(&self) -> Option<u64> {
            Some(HEMI)
        }

        async fn token_balance(&self, _: Address, _: Address) -> Result<U256, ChainError> {
            panic!("balance lookup exploded")
        }

        async fn native_balance(&self, _: Address) -> Result<U256, ChainError> {
            unreachable!()
        }

        async fn allowance(&self, _: Address, _: Address, _: Address) -> Result<U256, ChainError> {
            unreachable!()
        }

        async fn quote_send(&self, _: Address, _: SendParam, _: bool) -> Result<MessagingFee, ChainError> {
            unreachable!()
        }

        async fn simulate_send(
            &self,
            _: Address,
            _: SendParam,
            _: MessagingFee,
            _: Address,
            _: Address,
        ) -> Result<PreparedTransaction, ChainError> {
            unreachable!()
        }

        async fn approve(&self, _: Address, _: Address, _: U256, _: Address) -> Result<TxHash, ChainError> {
            unreachable!()
        }

        async fn send_transaction(&self, _: PreparedTransaction) -> Result<TxHash, ChainError> {
            unreachable!()
        }

        async fn wait_for_receipt(&self, _: TxHash) -> Result<TxReceipt, ChainError> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn panic_inside_the_flow_still_settles() {
        let events = bridge_under_test().bridge(params(100, PanickingClient)).finish().await;

        assert_eq!(
            events,
            vec![
                BridgeEvent::PreBridge,
                BridgeEvent::UnexpectedError(BridgeError::Panicked("balance lookup exploded".into())),
                BridgeEvent::Settled,
            ]
        );
    }

    #[tokio::test]
    async fn quote_send_uses_the_configured_adapter() {
        let mut client = MockChainClient::new();
        client
            .expect_quote_send()
            .withf(|to, param, _| *to == adapter() && param.dstEid == 30_102)
            .returning(|_, _, _| {
                Ok(MessagingFee {
                    nativeFee: U256::from(42u8),
                    lzTokenFee: U256::ZERO,
                })
            });
        let bridge = bridge_under_test();
        let params = FeeEstimationParams {
            amount: U256::from(100u8),
            chain_id: HEMI,
            to_address: addr(TO),
        };

        let fee = bridge.quote_send(&client, params).await.unwrap();
        assert_eq!(fee.nativeFee, U256::from(42u8));

        let err = bridge
            .quote_send(&client, FeeEstimationParams { chain_id: BSC, ..params })
            .await
            .unwrap_err();
        assert_eq!(err, BridgeError::Deployment(DeploymentError::NotConfigured(BSC)));
    }
}
