//! Alloy-based log source implementation.

use std::time::Duration;

use alloy_network::Ethereum;
use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log};
use async_trait::async_trait;
use futures::{stream, Stream, StreamExt};
use tracing::{debug, instrument, trace, warn};

use crate::error::{IcttError, Result};
use crate::traits::{LogSource, LogStream};

/// Production log source wrapping Alloy's [`Provider`] trait.
///
/// Historical queries go through `eth_getLogs`. Live feeds install an
/// `eth_newFilter` filter and poll it, which works over plain HTTP as well as
/// websocket transports.
///
/// # Examples
///
/// ```rust,no_run
/// use ictt_rs::providers::AlloyLogSource;
/// use alloy_provider::ProviderBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let rpc_url = "http://localhost:9650/ext/bc/C/rpc".parse()?;
/// let provider = ProviderBuilder::new().connect_http(rpc_url);
///
/// let logs = AlloyLogSource::new(provider).with_poll_interval(Duration::from_secs(2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AlloyLogSource<P>
where
    P: Provider<Ethereum> + Clone,
{
    provider: P,
    poll_interval: Option<Duration>,
}

impl<P> AlloyLogSource<P>
where
    P: Provider<Ethereum> + Clone,
{
    /// Creates a new [`AlloyLogSource`] wrapping the given Alloy provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            poll_interval: None,
        }
    }

    /// Overrides the provider's default filter polling interval.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = Some(poll_interval);
        self
    }

    /// Returns a reference to the underlying Alloy provider.
    pub fn inner(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P> LogSource for AlloyLogSource<P>
where
    P: Provider<Ethereum> + Clone + Send + Sync,
{
    #[instrument(skip(self, filter))]
    async fn query_logs(&self, filter: &Filter) -> Result<Vec<Log>> {
        trace!("Querying historical logs");
        let logs = self.provider.get_logs(filter).await?;

        debug!(log_count = logs.len(), "Historical logs retrieved");
        Ok(logs)
    }

    #[instrument(skip(self, filter))]
    async fn watch_logs(&self, filter: &Filter) -> Result<LogStream> {
        trace!("Installing log filter");
        let mut poller = self.provider.watch_logs(filter).await?;
        if let Some(poll_interval) = self.poll_interval {
            poller = poller.with_poll_interval(poll_interval);
        }

        debug!("Log filter installed");
        Ok(live_feed(poller.into_stream()))
    }
}

/// Flattens polled log batches into a feed that never ends cleanly.
///
/// Alloy's poller only logs failed polls and stops once the node rejects the
/// filter or the transport goes away. The end of the poller is reported as a
/// terminal error on the feed.
fn live_feed<S>(batches: S) -> LogStream
where
    S: Stream<Item = Vec<Log>> + Send + 'static,
{
    batches
        .flat_map(|logs| stream::iter(logs.into_iter().map(Ok)))
        .chain(stream::once(async {
            warn!(event = "log_filter_poller_stopped");
            Err(IcttError::Provider("log filter poller stopped".to_string()))
        }))
        .boxed()
}
