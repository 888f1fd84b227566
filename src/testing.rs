//! Test utilities and fake implementations for the event facades
//!
//! This module provides a fake [`LogSource`] that serves pre-configured logs,
//! so filterers and watch loops can be exercised without a node. It covers
//! historical queries, live feeds that end, fail or stay open, and RPC
//! failures.

use alloy_primitives::Address;
use alloy_rpc_types::{Filter, Log};
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use futures::{stream, StreamExt};
use std::sync::{Arc, Mutex};

use crate::traits::{LogSource, LogStream};
use crate::{IcttError, Result};

// ============================================================================
// Log helpers
// ============================================================================

/// Builds the raw log `address` would emit for `event` in `block_number`.
pub fn log_for<E: SolEvent>(address: Address, event: &E, block_number: u64) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address,
            data: event.encode_log_data(),
        },
        block_number: Some(block_number),
        ..Default::default()
    }
}

fn in_block_range(filter: &Filter, log: &Log) -> bool {
    let Some(block) = log.block_number else {
        return true;
    };
    let after_start = filter.get_from_block().is_none_or(|from| block >= from);
    let before_end = filter.get_to_block().is_none_or(|to| block <= to);
    after_start && before_end
}

// ============================================================================
// Fake Log Source
// ============================================================================

#[derive(Clone, Debug)]
enum LiveItem {
    Log(Log),
    Error(String),
}

/// A fake log source serving pre-configured logs.
///
/// Historical queries honour the filter's address, topics and block range.
/// Live feeds deliver the configured items in order, then end, unless
/// [`keep_open`](Self::keep_open) was called.
///
/// This allows testing scenarios like:
/// - Topic filtering on indexed arguments
/// - Subscriptions that fail mid-stream
/// - Cancelling a subscription that never ends on its own
/// - `eth_getLogs` failures
#[derive(Clone, Debug, Default)]
pub struct FakeLogSource {
    history: Arc<Mutex<Vec<Log>>>,
    live: Arc<Mutex<Vec<LiveItem>>>,
    keep_open: Arc<Mutex<bool>>,
    query_failure: Arc<Mutex<Option<String>>>,
    watch_failure: Arc<Mutex<Option<String>>>,
    filters: Arc<Mutex<Vec<Filter>>>,
}

impl FakeLogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a log returned by historical queries
    pub fn add_log(&self, log: Log) {
        self.history.lock().unwrap().push(log);
    }

    /// Add a log delivered by live feeds
    pub fn add_live_log(&self, log: Log) {
        self.live.lock().unwrap().push(LiveItem::Log(log));
    }

    /// Make live feeds fail at this point with a provider error
    pub fn add_live_error(&self, message: &str) {
        self.live
            .lock()
            .unwrap()
            .push(LiveItem::Error(message.to_string()));
    }

    /// Keep live feeds open after the configured items are delivered
    pub fn keep_open(&self) {
        *self.keep_open.lock().unwrap() = true;
    }

    /// Configure historical queries to fail
    pub fn fail_queries(&self, message: &str) {
        *self.query_failure.lock().unwrap() = Some(message.to_string());
    }

    /// Configure subscription installation to fail
    pub fn fail_watch(&self, message: &str) {
        *self.watch_failure.lock().unwrap() = Some(message.to_string());
    }

    /// Get the number of queries and subscriptions made
    pub fn request_count(&self) -> usize {
        self.filters.lock().unwrap().len()
    }

    /// Get the filter of the most recent query or subscription
    pub fn last_filter(&self) -> Option<Filter> {
        self.filters.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LogSource for FakeLogSource {
    async fn query_logs(&self, filter: &Filter) -> Result<Vec<Log>> {
        self.filters.lock().unwrap().push(filter.clone());

        if let Some(message) = self.query_failure.lock().unwrap().clone() {
            return Err(IcttError::Provider(message));
        }

        Ok(self
            .history
            .lock()
            .unwrap()
            .iter()
            .filter(|log| filter.matches(&log.inner) && in_block_range(filter, log))
            .cloned()
            .collect())
    }

    async fn watch_logs(&self, filter: &Filter) -> Result<LogStream> {
        self.filters.lock().unwrap().push(filter.clone());

        if let Some(message) = self.watch_failure.lock().unwrap().clone() {
            return Err(IcttError::Provider(message));
        }

        let items: Vec<Result<Log>> = self
            .live
            .lock()
            .unwrap()
            .iter()
            .filter_map(|item| match item {
                LiveItem::Log(log) if filter.matches(&log.inner) => Some(Ok(log.clone())),
                LiveItem::Log(_) => None,
                LiveItem::Error(message) => Some(Err(IcttError::Provider(message.clone()))),
            })
            .collect();

        let feed = stream::iter(items);
        if *self.keep_open.lock().unwrap() {
            Ok(feed.chain(stream::pending()).boxed())
        } else {
            Ok(feed.boxed())
        }
    }
}
