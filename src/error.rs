use alloy_primitives::{Bytes, B256, U256};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IcttError {
    #[error("Contract call failed: {0}")]
    Contract(#[from] alloy_contract::Error),

    #[error("RPC error: {0}")]
    Rpc(#[from] alloy_json_rpc::RpcError<alloy_transport::TransportErrorKind>),

    #[error("Pending transaction error: {0}")]
    PendingTransaction(#[from] alloy_provider::PendingTransactionError),

    #[error("ABI encoding/decoding error: {0}")]
    Abi(#[from] alloy_sol_types::Error),

    #[error("Dynamic ABI error: {0}")]
    DynAbi(#[from] alloy_dyn_abi::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid contract artifact: {reason}")]
    InvalidArtifact { reason: String },

    #[error("Artifact does not match the {contract} ABI: {reason}")]
    ArtifactMismatch {
        contract: &'static str,
        reason: String,
    },

    #[error("Deployment of {contract} failed: {reason}")]
    DeploymentFailed {
        contract: &'static str,
        reason: String,
    },

    #[error("Unsupported chain: {0}")]
    UnsupportedChain(alloy_chains::NamedChain),

    #[error("Mint amount {requested} exceeds the per-call limit of {max}")]
    MintLimitExceeded { requested: U256, max: U256 },

    #[error("Log is not a {event} event (topic0: {got:?})")]
    EventSignatureMismatch {
        event: &'static str,
        got: Option<B256>,
    },

    #[error("Unknown function selector: {selector}")]
    UnknownSelector { selector: String },

    #[error("Event sink rejected an event: {0}")]
    SinkClosed(String),

    #[error("Subscription task failed: {0}")]
    SubscriptionTask(String),
}

impl IcttError {
    /// Returns the raw revert data carried by a failed contract call, if any.
    pub fn revert_data(&self) -> Option<Bytes> {
        match self {
            Self::Contract(err) => err.as_revert_data(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IcttError>;
