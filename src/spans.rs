//! Tracing span helpers for binding operations
//!
//! Span names are static and attributes are structured, so the spans can be
//! exported to OpenTelemetry without post-processing. The contract facades
//! use these internally; they are public for callers who want to wrap their
//! own calls in the same spans.
//!
//! # Example
//!
//! ```rust
//! use ictt_rs::spans;
//! use alloy_primitives::Address;
//!
//! let span = spans::filter_events(&Address::ZERO, "Transfer(address,address,uint256)", 0, None);
//! let _guard = span.enter();
//! // Your custom log processing here
//! ```

use alloy_primitives::{Address, TxHash};
use tracing::Span;

/// Create span for deploying a contract.
///
/// Parent: Caller's operation span
/// Children: Provider RPC calls (send + receipt polling)
#[inline]
pub fn deploy_contract(contract: &'static str, from: &Address, init_code_len: usize) -> Span {
    tracing::info_span!(
        "ictt_rs.deploy_contract",
        contract = contract,
        from = %from,
        init_code_len = init_code_len,
        contract_address = tracing::field::Empty,
        tx_hash = tracing::field::Empty,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for submitting a prepared transaction.
///
/// Parent: Caller's operation span
/// Children: Provider RPC calls
#[inline]
pub fn submit_transaction(contract_address: &Address, from: Option<&Address>) -> Span {
    tracing::info_span!(
        "ictt_rs.submit_transaction",
        contract_address = %contract_address,
        from = ?from,
        tx_hash = tracing::field::Empty,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for a historical event query.
///
/// Parent: Caller's operation span
/// Children: `eth_getLogs` RPC call
#[inline]
pub fn filter_events(
    contract_address: &Address,
    event_signature: &'static str,
    from_block: u64,
    to_block: Option<u64>,
) -> Span {
    tracing::debug_span!(
        "ictt_rs.filter_events",
        contract_address = %contract_address,
        event_signature = event_signature,
        from_block = from_block,
        to_block = ?to_block,
    )
}

/// Create span for a live event watch loop.
///
/// The span lives as long as the watch task.
#[inline]
pub fn watch_events(event_signature: &'static str) -> Span {
    tracing::info_span!(
        "ictt_rs.watch_events",
        event_signature = event_signature,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Record error information on a span following OpenTelemetry conventions.
///
/// # Example
///
/// ```rust
/// use ictt_rs::{spans, IcttError};
///
/// let span = spans::watch_events("Transfer(address,address,uint256)");
/// let error = IcttError::SinkClosed("receiver dropped".to_string());
/// spans::record_error(&span, &error);
/// ```
pub fn record_error(span: &Span, error: &crate::IcttError) {
    span.record("otel.status_code", "ERROR");
    span.record("error.type", error_type(error));
    span.record("error.message", tracing::field::display(error));
}

/// Record a transaction hash on a span once it is known.
pub fn record_tx_hash(span: &Span, tx_hash: &TxHash) {
    span.record("tx_hash", tracing::field::display(tx_hash));
}

fn error_type(error: &crate::IcttError) -> &'static str {
    use crate::IcttError::*;
    match error {
        Contract(_) => "Contract",
        Rpc(_) => "Rpc",
        PendingTransaction(_) => "PendingTransaction",
        Abi(_) | DynAbi(_) => "Abi",
        Json(_) => "Json",
        Io(_) => "Io",
        Provider(_) => "Provider",
        InvalidArtifact { .. } => "InvalidArtifact",
        ArtifactMismatch { .. } => "ArtifactMismatch",
        DeploymentFailed { .. } => "DeploymentFailed",
        UnsupportedChain(_) => "UnsupportedChain",
        MintLimitExceeded { .. } => "MintLimitExceeded",
        EventSignatureMismatch { .. } => "EventSignatureMismatch",
        UnknownSelector { .. } => "UnknownSelector",
        SinkClosed(_) => "SinkClosed",
        SubscriptionTask(_) => "SubscriptionTask",
    }
}
