// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-call options for the contract facades.
//!
//! Read calls, transactions, historical log queries and live subscriptions
//! each take a small option struct. All of them are plain data with
//! [`bon`] builders, so callers can keep a configured value around and reuse
//! it across calls.
//!
//! # Example
//!
//! ```rust
//! use ictt_rs::{CallOpts, FilterOpts, TransactOpts};
//! use alloy_primitives::{address, U256};
//!
//! let owner = address!("8db97C7cEcE249c2b98bDC0226Cc4C2A57BF52FC");
//!
//! // Read at a pinned block as `owner`
//! let call = CallOpts::builder().from(owner).block(19_000_000u64.into()).build();
//!
//! // Send 1 AVAX along with the transaction
//! let tx = TransactOpts::builder()
//!     .from(owner)
//!     .value(U256::from(10u64).pow(U256::from(18u64)))
//!     .build();
//!
//! // Query logs from block 100 to the chain head
//! let filter = FilterOpts::from_block(100);
//! assert!(filter.end.is_none());
//! ```

use alloy_contract::{CallBuilder, CallDecoder};
use alloy_network::{Ethereum, TransactionBuilder};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::{BlockId, Filter, TransactionRequest};
use bon::Builder;

/// Options applied to read-only contract calls.
#[derive(Builder, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOpts {
    /// Optional `msg.sender` for the call
    pub from: Option<Address>,
    /// Block to execute the call against (defaults to latest)
    pub block: Option<BlockId>,
}

impl CallOpts {
    pub(crate) fn apply<P, D>(&self, mut call: CallBuilder<P, D>) -> CallBuilder<P, D>
    where
        P: Provider<Ethereum>,
        D: CallDecoder,
    {
        if let Some(from) = self.from {
            call = call.from(from);
        }
        if let Some(block) = self.block {
            call = call.block(block);
        }
        call
    }
}

/// Options applied to state-mutating transactions.
///
/// `from` is required; everything else is left for the provider's fillers
/// when unset.
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactOpts {
    /// Account that signs and sends the transaction
    pub from: Address,
    /// Native value attached to the transaction (payable functions only)
    pub value: Option<U256>,
    /// Explicit gas limit
    pub gas_limit: Option<u64>,
    /// Explicit nonce
    pub nonce: Option<u64>,
}

impl TransactOpts {
    /// Shorthand for options that only set the sender.
    pub fn from_address(from: Address) -> Self {
        Self {
            from,
            value: None,
            gas_limit: None,
            nonce: None,
        }
    }

    pub(crate) fn apply<P, D>(&self, call: CallBuilder<P, D>) -> CallBuilder<P, D>
    where
        P: Provider<Ethereum>,
        D: CallDecoder,
    {
        let mut call = call.from(self.from);
        if let Some(value) = self.value {
            call = call.value(value);
        }
        if let Some(gas_limit) = self.gas_limit {
            call = call.gas(gas_limit);
        }
        if let Some(nonce) = self.nonce {
            call = call.nonce(nonce);
        }
        call
    }

    pub(crate) fn apply_to_request(&self, request: TransactionRequest) -> TransactionRequest {
        let mut request = request.with_from(self.from);
        if let Some(value) = self.value {
            request = request.with_value(value);
        }
        if let Some(gas_limit) = self.gas_limit {
            request = request.with_gas_limit(gas_limit);
        }
        if let Some(nonce) = self.nonce {
            request = request.with_nonce(nonce);
        }
        request
    }
}

/// Block range for historical log queries.
#[derive(Builder, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOpts {
    /// First block of the range (inclusive)
    #[builder(default)]
    pub start: u64,
    /// Last block of the range (inclusive); `None` means the chain head
    pub end: Option<u64>,
}

impl FilterOpts {
    /// Query from `start` up to the chain head.
    pub fn from_block(start: u64) -> Self {
        Self { start, end: None }
    }

    pub(crate) fn apply(&self, filter: Filter) -> Filter {
        let filter = filter.from_block(self.start);
        match self.end {
            Some(end) => filter.to_block(end),
            None => filter,
        }
    }
}

/// Starting point for live log subscriptions.
#[derive(Builder, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchOpts {
    /// First block to deliver logs from; `None` starts at the chain head
    pub start: Option<u64>,
}

impl WatchOpts {
    pub(crate) fn apply(&self, filter: Filter) -> Filter {
        match self.start {
            Some(start) => filter.from_block(start),
            None => filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_call_opts_default_is_empty() {
        let opts = CallOpts::default();
        assert!(opts.from.is_none());
        assert!(opts.block.is_none());
    }

    #[test]
    fn test_transact_opts_builder() {
        let from = address!("1234567890123456789012345678901234567890");
        let opts = TransactOpts::builder()
            .from(from)
            .value(U256::from(5))
            .gas_limit(250_000)
            .build();

        assert_eq!(opts.from, from);
        assert_eq!(opts.value, Some(U256::from(5)));
        assert_eq!(opts.gas_limit, Some(250_000));
        assert!(opts.nonce.is_none());
    }

    #[test]
    fn test_transact_opts_apply_to_request() {
        let from = address!("1234567890123456789012345678901234567890");
        let opts = TransactOpts::builder()
            .from(from)
            .value(U256::from(7))
            .nonce(3)
            .build();

        let request = opts.apply_to_request(TransactionRequest::default());

        assert_eq!(request.from, Some(from));
        assert_eq!(request.value, Some(U256::from(7)));
        assert_eq!(request.nonce, Some(3));
        assert!(request.gas.is_none());
    }

    #[test]
    fn test_filter_opts_block_range() {
        let filter = FilterOpts::builder()
            .start(10)
            .end(20)
            .build()
            .apply(Filter::new());

        assert_eq!(filter.get_from_block(), Some(10));
        assert_eq!(filter.get_to_block(), Some(20));
    }

    #[test]
    fn test_filter_opts_open_ended() {
        let filter = FilterOpts::from_block(42).apply(Filter::new());

        assert_eq!(filter.get_from_block(), Some(42));
        assert_eq!(filter.get_to_block(), None);
    }

    #[test]
    fn test_watch_opts_without_start_leaves_filter_untouched() {
        let filter = WatchOpts::default().apply(Filter::new());
        assert_eq!(filter.get_from_block(), None);

        let filter = WatchOpts::builder().start(5).build().apply(Filter::new());
        assert_eq!(filter.get_from_block(), Some(5));
    }
}
