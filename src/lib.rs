//! # ictt-rs
//!
//! Typed Rust bindings for the Avalanche Interchain Token Transfer (ICTT)
//! `NativeTokenRemote` contract and the `ExampleERC20Decimals` test token.
//!
//! Each contract gets a caller for view functions, a transactor for
//! state-mutating functions and a filterer for events, all built on Alloy's
//! `sol!` codec and providers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ictt_rs::{FilterOpts, NativeTokenRemoteContract, SendTokensParams, TransactOpts};
//! use ictt_rs::FUJI_C_CHAIN_BLOCKCHAIN_ID;
//! use alloy_primitives::{address, U256};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # use alloy_provider::ProviderBuilder;
//! let provider = ProviderBuilder::new().connect("http://localhost:9650/ext/bc/C/rpc").await?;
//! let remote = NativeTokenRemoteContract::new(
//!     address!("1234567890123456789012345678901234567890"),
//!     provider,
//! );
//!
//! // Read
//! let minted = remote.caller().get_total_minted().await?;
//!
//! // Send 1 token back to the home chain
//! let sender = address!("8db97C7cEcE249c2b98bDC0226Cc4C2A57BF52FC");
//! let opts = TransactOpts::builder()
//!     .from(sender)
//!     .value(U256::from(1_000_000_000_000_000_000u128))
//!     .build();
//! let params = SendTokensParams::builder()
//!     .destination_blockchain_id(FUJI_C_CHAIN_BLOCKCHAIN_ID)
//!     .destination_token_transferrer_address(remote.caller().get_token_home_address().await?)
//!     .recipient(sender)
//!     .required_gas_limit(250_000u64)
//!     .build();
//! let tx = remote.transactor().send_tokens_transaction(&opts, params);
//!
//! // Historical events
//! let mut sent = remote
//!     .filterer()
//!     .filter_tokens_sent(&FilterOpts::from_block(0), &[], &[sender])
//!     .await?;
//! while let Some(event) = sent.next().await {
//!     let data = &event.inner.data;
//!     println!("sent {} in message {}", data.amount, data.teleporterMessageID);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Public API
//!
//! - [`NativeTokenRemoteContract`] and [`ExampleERC20DecimalsContract`] - Combined
//!   caller / transactor / filterer per deployed contract
//! - [`CallOpts`], [`TransactOpts`], [`FilterOpts`], [`WatchOpts`] - Per-call options
//! - [`EventIterator`] and [`EventSubscription`] - Historical and live event delivery
//! - [`ContractMetadata`] and [`ContractArtifact`] - Embedded ABIs and compiled artifacts
//! - [`IcttChain`] - Blockchain IDs for known Avalanche chains
//! - [`IcttError`] and [`Result`] - Error types for error handling

mod chain;
pub mod contracts;
mod deploy;
mod error;
pub mod events;
mod metadata;
mod options;
mod params;
pub mod providers;
mod subscription;
pub mod testing;
mod traits;

pub use chain::{
    IcttChain, AVALANCHE_C_CHAIN_BLOCKCHAIN_ID, BURNED_TX_FEES_ADDRESS, FUJI_C_CHAIN_BLOCKCHAIN_ID,
    NATIVE_MINTER_PRECOMPILE_ADDRESS, TELEPORTER_MESSENGER_ADDRESS,
};
pub use contracts::{
    example_erc20_decimals::{
        ExampleERC20DecimalsCaller, ExampleERC20DecimalsContract, ExampleERC20DecimalsFilterer,
        ExampleERC20DecimalsTransactor, MAX_MINT_AMOUNT,
    },
    native_token_remote::{
        NativeTokenRemoteCaller, NativeTokenRemoteContract, NativeTokenRemoteDeployArgs,
        NativeTokenRemoteFilterer, NativeTokenRemoteTransactor, SendAndCallInput, SendTokensInput,
        TeleporterFeeInfo, TokenRemoteSettings,
    },
};
pub use deploy::{deploy_transaction, init_code, Deployment};
pub use error::{IcttError, Result};
pub use events::{EventIterator, EventSubscription, IteratorState};
pub use metadata::{
    ContractArtifact, ContractMetadata, EXAMPLE_ERC20_DECIMALS_METADATA,
    NATIVE_TOKEN_REMOTE_METADATA,
};
pub use options::{CallOpts, FilterOpts, TransactOpts, WatchOpts};
pub use params::{SendAndCallParams, SendTokensParams};
pub use subscription::LogSubscription;
pub use traits::{LogSource, LogStream};

// Public module for advanced users who need custom instrumentation
pub mod spans;
