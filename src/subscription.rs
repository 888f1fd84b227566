//! Background delivery of raw logs.
//!
//! A [`LogSubscription`] owns a task that drains a [`LogStream`](crate::traits::LogStream) into a
//! bounded channel. Consumers (the event iterator and the watch loop) only ever
//! see the channel side. Dropping the subscription, or calling
//! [`LogSubscription::unsubscribe`], stops the feeding task.

use alloy_rpc_types::Log;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::error::Result;

/// Number of raw logs buffered between the feeding task and the consumer.
pub const LOG_BUFFER_SIZE: usize = 128;

/// Channel of raw logs fed by a background task.
#[derive(Debug)]
pub struct LogSubscription {
    logs: mpsc::Receiver<Result<Log>>,
    feeder: JoinHandle<()>,
}

impl LogSubscription {
    /// Spawns a task forwarding `stream` into a new subscription.
    ///
    /// The task stops after forwarding the first `Err` item, when the stream
    /// ends, or when the receiving side goes away. Must be called from within
    /// a Tokio runtime.
    pub fn spawn<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Log>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(LOG_BUFFER_SIZE);
        let feeder = tokio::spawn(async move {
            let mut stream = Box::pin(stream);
            while let Some(item) = stream.next().await {
                let failed = item.is_err();
                if tx.send(item).await.is_err() {
                    trace!(event = "log_subscription_receiver_dropped");
                    return;
                }
                if failed {
                    debug!(event = "log_subscription_failed");
                    return;
                }
            }
            trace!(event = "log_subscription_exhausted");
        });

        Self { logs: rx, feeder }
    }

    /// Subscription over a fixed set of already-fetched logs.
    pub fn from_logs(logs: Vec<Log>) -> Self {
        Self::spawn(futures::stream::iter(logs.into_iter().map(Ok)))
    }

    /// Waits for the next raw log.
    ///
    /// Returns `None` once the feed has ended and every buffered log has been
    /// delivered.
    pub async fn recv(&mut self) -> Option<Result<Log>> {
        self.logs.recv().await
    }

    /// Returns an already-buffered log without waiting.
    pub fn try_recv(&mut self) -> Option<Result<Log>> {
        self.logs.try_recv().ok()
    }

    /// Stops the feeding task.
    ///
    /// Logs buffered before the call can still be drained with
    /// [`try_recv`](Self::try_recv).
    pub fn unsubscribe(&mut self) {
        self.feeder.abort();
        self.logs.close();
    }
}

impl Drop for LogSubscription {
    fn drop(&mut self) {
        self.feeder.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IcttError;
    use alloy_primitives::{Address, LogData};
    use futures::stream;

    fn raw_log(block_number: u64) -> Log {
        Log {
            inner: alloy_primitives::Log {
                address: Address::ZERO,
                data: LogData::new_unchecked(vec![], Default::default()),
            },
            block_number: Some(block_number),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_from_logs_delivers_in_order_then_ends() {
        let mut subscription = LogSubscription::from_logs(vec![raw_log(1), raw_log(2)]);

        let first = subscription.recv().await.unwrap().unwrap();
        let second = subscription.recv().await.unwrap().unwrap();

        assert_eq!(first.block_number, Some(1));
        assert_eq!(second.block_number, Some(2));
        assert!(subscription.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_feed_stops_after_first_error() {
        let items = vec![
            Ok(raw_log(1)),
            Err(IcttError::Provider("filter not found".to_string())),
            Ok(raw_log(2)),
        ];
        let mut subscription = LogSubscription::spawn(stream::iter(items));

        assert!(subscription.recv().await.unwrap().is_ok());
        assert!(matches!(
            subscription.recv().await,
            Some(Err(IcttError::Provider(_)))
        ));
        assert!(subscription.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_unsubscribe_ends_pending_feed() {
        let mut subscription = LogSubscription::spawn(stream::pending::<Result<Log>>());
        subscription.unsubscribe();

        assert!(subscription.recv().await.is_none());
        assert!(subscription.try_recv().is_none());
    }
}
