//! Core trait abstractions for log delivery.
//!
//! The filterer facades never talk to an RPC client directly. They go through
//! [`LogSource`], which covers the two ways logs reach a caller: a one-shot
//! historical query and a live feed. The production implementation wraps an
//! Alloy provider ([`AlloyLogSource`](crate::providers::AlloyLogSource));
//! tests use [`FakeLogSource`](crate::testing::FakeLogSource).
//!
//! # Example: Implementing a Test Fake
//!
//! ```rust,ignore
//! use ictt_rs::{LogSource, LogStream, Result};
//! use alloy_rpc_types::{Filter, Log};
//!
//! struct StaticLogs(Vec<Log>);
//!
//! #[async_trait::async_trait]
//! impl LogSource for StaticLogs {
//!     async fn query_logs(&self, _filter: &Filter) -> Result<Vec<Log>> {
//!         Ok(self.0.clone())
//!     }
//!
//!     async fn watch_logs(&self, _filter: &Filter) -> Result<LogStream> {
//!         Ok(Box::pin(futures::stream::empty()))
//!     }
//! }
//! ```

use alloy_rpc_types::{Filter, Log};
use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::Result;

/// Stream of raw logs fed by a live subscription.
///
/// An `Err` item reports a subscription failure and is the last item the
/// consumer should expect.
pub type LogStream = BoxStream<'static, Result<Log>>;

/// Source of raw contract logs.
///
/// # Test Scenarios
///
/// Implementing this trait with fakes enables testing:
/// - Empty and non-empty historical ranges
/// - Live feeds that end cleanly or with an error
/// - Feeds that stay open until the caller unsubscribes
/// - RPC failures on query
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Returns every log matching `filter` in its block range.
    ///
    /// # Errors
    ///
    /// Returns an error if the RPC call fails.
    async fn query_logs(&self, filter: &Filter) -> Result<Vec<Log>>;

    /// Opens a live feed of logs matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the subscription cannot be installed.
    async fn watch_logs(&self, filter: &Filter) -> Result<LogStream>;
}
