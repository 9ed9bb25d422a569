//! Lifecycle notifications of a bridge run.
//!
//! Every run ends with exactly one outcome event followed by `Settled`, after
//! which the channel closes.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use alloy::primitives::TxHash;
use futures::Stream;
use hemi_bridge_commons::error::format_with_code;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::client::TxReceipt;
use crate::error::{BridgeError, ChainError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    ValidationFailed(String),
    PreBridge,
    PreApprove,
    ApprovalRejected(ChainError),
    ApprovalSigned(TxHash),
    ApprovalFailed(ChainError),
    ApprovalReverted(TxReceipt),
    ApprovalSucceeded(TxReceipt),
    BridgeRejected(ChainError),
    BridgeSigned(TxHash),
    BridgeFailed(ChainError),
    BridgeReverted(TxReceipt),
    BridgeSucceeded(TxReceipt),
    UnexpectedError(BridgeError),
    Settled,
}

impl BridgeEvent {
    pub fn name(&self) -> &'static str {
        match self {
            BridgeEvent::ValidationFailed(_) => "validation-failed",
            BridgeEvent::PreBridge => "pre-bridge",
            BridgeEvent::PreApprove => "pre-approve",
            BridgeEvent::ApprovalRejected(_) => "approval-rejected",
            BridgeEvent::ApprovalSigned(_) => "approval-signed",
            BridgeEvent::ApprovalFailed(_) => "approval-failed",
            BridgeEvent::ApprovalReverted(_) => "approval-reverted",
            BridgeEvent::ApprovalSucceeded(_) => "approval-succeeded",
            BridgeEvent::BridgeRejected(_) => "bridge-rejected",
            BridgeEvent::BridgeSigned(_) => "bridge-signed",
            BridgeEvent::BridgeFailed(_) => "bridge-failed",
            BridgeEvent::BridgeReverted(_) => "bridge-reverted",
            BridgeEvent::BridgeSucceeded(_) => "bridge-succeeded",
            BridgeEvent::UnexpectedError(_) => "unexpected-error",
            BridgeEvent::Settled => "settled",
        }
    }

    /// True for the events that end a run (everything that may precede `Settled` last).
    pub fn is_outcome(&self) -> bool {
        matches!(
            self,
            BridgeEvent::ValidationFailed(_)
                | BridgeEvent::ApprovalRejected(_)
                | BridgeEvent::ApprovalFailed(_)
                | BridgeEvent::ApprovalReverted(_)
                | BridgeEvent::BridgeRejected(_)
                | BridgeEvent::BridgeFailed(_)
                | BridgeEvent::BridgeReverted(_)
                | BridgeEvent::BridgeSucceeded(_)
                | BridgeEvent::UnexpectedError(_)
        )
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BridgeEvent::BridgeSucceeded(_))
    }

    fn is_failure(&self) -> bool {
        self.is_outcome() && !self.is_success()
    }
}

impl fmt::Display for BridgeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            BridgeEvent::ValidationFailed(reason) => write!(f, "{name}: {reason}"),
            BridgeEvent::ApprovalRejected(err)
            | BridgeEvent::ApprovalFailed(err)
            | BridgeEvent::BridgeRejected(err)
            | BridgeEvent::BridgeFailed(err) => write!(f, "{name}: {}", format_with_code(err)),
            BridgeEvent::ApprovalSigned(hash) | BridgeEvent::BridgeSigned(hash) => write!(f, "{name}: {hash}"),
            BridgeEvent::ApprovalReverted(receipt)
            | BridgeEvent::ApprovalSucceeded(receipt)
            | BridgeEvent::BridgeReverted(receipt)
            | BridgeEvent::BridgeSucceeded(receipt) => match receipt.block_number {
                Some(block) => write!(f, "{name}: {} (block {block})", receipt.transaction_hash),
                None => write!(f, "{name}: {}", receipt.transaction_hash),
            },
            BridgeEvent::UnexpectedError(err) => write!(f, "{name}: {}", format_with_code(err)),
            BridgeEvent::PreBridge | BridgeEvent::PreApprove | BridgeEvent::Settled => f.write_str(name),
        }
    }
}

/// First outcome event of a finished run, if any.
pub fn outcome(events: &[BridgeEvent]) -> Option<&BridgeEvent> {
    events.iter().find(|event| event.is_outcome())
}

/// Sending half, owned by the bridge task.
pub(crate) struct EventEmitter {
    tx: mpsc::UnboundedSender<BridgeEvent>,
}

impl EventEmitter {
    pub(crate) fn emit(&self, event: BridgeEvent) {
        if event.is_failure() {
            warn!(event = event.name(), "{event}");
        } else {
            info!(event = event.name(), "{event}");
        }
        // A dropped receiver only means nobody listens anymore.
        let _ = self.tx.send(event);
    }
}

/// Receiving half handed to the caller. Ends once the run has settled.
#[derive(Debug)]
pub struct BridgeEvents {
    rx: mpsc::UnboundedReceiver<BridgeEvent>,
}

impl BridgeEvents {
    pub async fn recv(&mut self) -> Option<BridgeEvent> {
        self.rx.recv().await
    }

    /// Drains the channel until the bridge task drops its sender.
    pub async fn collect(mut self) -> Vec<BridgeEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.rx.recv().await {
            events.push(event);
        }
        events
    }
}

impl Stream for BridgeEvents {
    type Item = BridgeEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

pub(crate) fn channel() -> (EventEmitter, BridgeEvents) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventEmitter { tx }, BridgeEvents { rx })
}
