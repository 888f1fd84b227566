//! Typed event delivery on top of raw log subscriptions.
//!
//! Every contract event is exposed three ways:
//!
//! - **filter**: a historical query returning an [`EventIterator`], a pull-based
//!   cursor with the minimal `next` / `error` / `close` contract
//! - **watch**: a live subscription forwarding decoded events into a
//!   caller-supplied [`Sink`] until it is cancelled or fails, see [`watch`]
//! - **parse**: decoding a single raw log the caller already holds
//!
//! The per-contract filterers generate these triples with an internal macro;
//! the generic machinery lives on [`EventFilterer`].

use std::fmt::Debug;
use std::marker::PhantomData;

use alloy_primitives::{Address, B256, U256};
use alloy_rpc_types::{Filter, Log};
use alloy_sol_types::SolEvent;
use futures::{Sink, SinkExt, Stream};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn, Instrument};

use crate::error::{IcttError, Result};
use crate::options::{FilterOpts, WatchOpts};
use crate::spans;
use crate::subscription::LogSubscription;
use crate::traits::LogSource;

/// Conversion of an indexed event argument into its 32-byte topic.
pub trait IntoTopic {
    fn into_topic(self) -> B256;
}

impl IntoTopic for B256 {
    fn into_topic(self) -> B256 {
        self
    }
}

impl IntoTopic for Address {
    fn into_topic(self) -> B256 {
        self.into_word()
    }
}

impl IntoTopic for U256 {
    fn into_topic(self) -> B256 {
        B256::from(self)
    }
}

/// Topic restrictions for an event's indexed arguments, in declaration order.
///
/// Each slot holds the accepted values for one indexed argument; an empty
/// slot matches any value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedTopics {
    slots: Vec<Vec<B256>>,
}

impl IndexedTopics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the accepted values for the next indexed argument.
    pub fn with<T: IntoTopic + Copy>(mut self, values: &[T]) -> Self {
        self.slots
            .push(values.iter().map(|value| value.into_topic()).collect());
        self
    }

    /// Builds the log filter for event `E` emitted by `address`.
    pub fn to_filter<E: SolEvent>(&self, address: Address) -> Filter {
        let mut filter = Filter::new()
            .address(address)
            .event_signature(E::SIGNATURE_HASH);

        for (position, values) in self.slots.iter().enumerate() {
            if values.is_empty() {
                continue;
            }
            filter = match position {
                0 => filter.topic1(values.clone()),
                1 => filter.topic2(values.clone()),
                2 => filter.topic3(values.clone()),
                _ => filter,
            };
        }

        filter
    }
}

/// Decodes a raw log as event `E`, checking the event signature first.
pub fn decode_event<E: SolEvent>(log: &Log) -> Result<Log<E>> {
    let topic0 = log.inner.data.topics().first().copied();
    if topic0 != Some(E::SIGNATURE_HASH) {
        return Err(IcttError::EventSignatureMismatch {
            event: E::SIGNATURE,
            got: topic0,
        });
    }

    Ok(log.log_decode::<E>()?)
}

/// Lifecycle of an [`EventIterator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorState {
    /// The underlying subscription may still deliver logs
    InProgress,
    /// The subscription ended; only already-buffered logs remain
    Done,
}

/// Pull-based cursor over decoded events of type `E`.
///
/// # Example
///
/// ```rust,no_run
/// # use ictt_rs::{FilterOpts, NativeTokenRemoteContract};
/// # use alloy_network::Ethereum;
/// # use alloy_provider::Provider;
/// # async fn example<P: Provider<Ethereum> + Clone>(
/// #     remote: NativeTokenRemoteContract<P>,
/// # ) -> Result<(), Box<dyn std::error::Error>> {
/// let mut sends = remote
///     .filterer()
///     .filter_tokens_sent(&FilterOpts::from_block(0), &[], &[])
///     .await?;
///
/// while let Some(sent) = sends.next().await {
///     println!("{} sent {}", sent.inner.data.sender, sent.inner.data.amount);
/// }
/// if let Some(err) = sends.error() {
///     eprintln!("iteration stopped: {err}");
/// }
/// sends.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EventIterator<E> {
    subscription: LogSubscription,
    state: IteratorState,
    fail: Option<IcttError>,
    _event: PhantomData<fn() -> E>,
}

impl<E: SolEvent> EventIterator<E> {
    pub fn new(subscription: LogSubscription) -> Self {
        Self {
            subscription,
            state: IteratorState::InProgress,
            fail: None,
            _event: PhantomData,
        }
    }

    /// Advances to the next decoded event.
    ///
    /// Returns `None` when the subscription is exhausted or when an error
    /// occurred; check [`error`](Self::error) to tell the two apart. Once an
    /// error is recorded every further call returns `None`.
    pub async fn next(&mut self) -> Option<Log<E>> {
        if self.fail.is_some() {
            return None;
        }

        let item = match self.state {
            IteratorState::Done => self.subscription.try_recv()?,
            IteratorState::InProgress => match self.subscription.recv().await {
                Some(item) => item,
                None => {
                    self.state = IteratorState::Done;
                    return None;
                }
            },
        };

        match item.and_then(|log| decode_event::<E>(&log)) {
            Ok(event) => Some(event),
            Err(err) => {
                debug!(
                    event_name = E::SIGNATURE,
                    error = %err,
                    event = "event_iteration_failed"
                );
                self.state = IteratorState::Done;
                self.fail = Some(err);
                None
            }
        }
    }

    /// Returns the error that stopped iteration, if any.
    pub fn error(&self) -> Option<&IcttError> {
        self.fail.as_ref()
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> IteratorState {
        self.state
    }

    /// Stops the underlying subscription.
    ///
    /// Logs that were already buffered are still returned by
    /// [`next`](Self::next).
    pub fn close(&mut self) {
        self.subscription.unsubscribe();
        self.state = IteratorState::Done;
    }

    /// Converts the iterator into a stream; a recorded error becomes the
    /// final item.
    pub fn into_stream(self) -> impl Stream<Item = Result<Log<E>>>
    where
        E: 'static,
    {
        futures::stream::unfold(Some(self), |iter| async move {
            let mut iter = iter?;
            match iter.next().await {
                Some(event) => Some((Ok(event), Some(iter))),
                None => iter.fail.take().map(|err| (Err(err), None)),
            }
        })
    }
}

/// Handle to a running [`watch`] loop.
#[derive(Debug)]
pub struct EventSubscription {
    quit: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<()>>,
}

impl EventSubscription {
    /// Returns `true` once the watch loop has terminated.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancels the watch loop and waits for it to stop.
    pub async fn unsubscribe(mut self) -> Result<()> {
        if let Some(quit) = self.quit.take() {
            let _ = quit.send(());
        }
        self.wait().await
    }

    /// Waits for the watch loop to terminate on its own.
    ///
    /// Resolves to the first error the loop observed, or `Ok(())` if the
    /// feed ended cleanly or the loop was cancelled.
    pub async fn wait(self) -> Result<()> {
        let Self { quit, handle } = self;
        let outcome = handle
            .await
            .map_err(|err| IcttError::SubscriptionTask(err.to_string()));
        drop(quit);
        outcome?
    }
}

/// Forwards decoded `E` events from `subscription` into `sink`.
///
/// The spawned loop waits on the next log and on cancellation at the same
/// time. It stops on the first decode error, subscription error or sink
/// failure and reports that error through the returned handle. Cancellation
/// and a cleanly ended feed both resolve to `Ok(())`.
pub fn watch<E, S>(mut subscription: LogSubscription, mut sink: S) -> EventSubscription
where
    E: SolEvent + Send + 'static,
    S: Sink<Log<E>> + Send + Unpin + 'static,
    S::Error: Debug,
{
    let (quit, mut quit_rx) = oneshot::channel::<()>();
    let span = spans::watch_events(E::SIGNATURE);

    let handle = tokio::spawn(
        async move {
            let outcome = forward::<E, S>(&mut subscription, &mut sink, &mut quit_rx).await;
            if let Err(ref err) = outcome {
                spans::record_error(&tracing::Span::current(), err);
            }
            outcome
        }
        .instrument(span),
    );

    EventSubscription {
        quit: Some(quit),
        handle,
    }
}

async fn forward<E, S>(
    subscription: &mut LogSubscription,
    sink: &mut S,
    quit_rx: &mut oneshot::Receiver<()>,
) -> Result<()>
where
    E: SolEvent,
    S: Sink<Log<E>> + Unpin,
    S::Error: Debug,
{
    loop {
        tokio::select! {
            item = subscription.recv() => {
                let log = match item {
                    Some(Ok(log)) => log,
                    Some(Err(err)) => {
                        warn!(error = %err, event = "watch_subscription_failed");
                        return Err(err);
                    }
                    None => {
                        info!(event = "watch_subscription_ended");
                        return Ok(());
                    }
                };

                let decoded = decode_event::<E>(&log)?;

                // A full sink must not block cancellation
                tokio::select! {
                    sent = sink.send(decoded) => {
                        sent.map_err(|err| IcttError::SinkClosed(format!("{err:?}")))?;
                    }
                    _ = &mut *quit_rx => {
                        debug!(event = "watch_cancelled_while_sending");
                        subscription.unsubscribe();
                        return Ok(());
                    }
                }
            }
            _ = &mut *quit_rx => {
                debug!(event = "watch_cancelled");
                subscription.unsubscribe();
                return Ok(());
            }
        }
    }
}

/// Generic filter / watch / parse machinery bound to one contract address.
#[derive(Debug, Clone)]
pub struct EventFilterer<L> {
    address: Address,
    source: L,
}

impl<L: LogSource> EventFilterer<L> {
    pub fn new(address: Address, source: L) -> Self {
        Self { address, source }
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        self.address
    }

    /// Returns the log source
    pub fn source(&self) -> &L {
        &self.source
    }

    /// Queries historical `E` events matching `topics` in the `opts` range.
    pub async fn filter_logs<E: SolEvent>(
        &self,
        opts: &FilterOpts,
        topics: IndexedTopics,
    ) -> Result<EventIterator<E>> {
        let span = spans::filter_events(&self.address, E::SIGNATURE, opts.start, opts.end);
        let filter = opts.apply(topics.to_filter::<E>(self.address));

        let logs = self.source.query_logs(&filter).instrument(span).await?;
        debug!(
            contract_address = %self.address,
            event_name = E::SIGNATURE,
            log_count = logs.len(),
            event = "event_logs_queried"
        );

        Ok(EventIterator::new(LogSubscription::from_logs(logs)))
    }

    /// Subscribes to live `E` events matching `topics`, forwarding them to `sink`.
    pub async fn watch_logs<E, S>(
        &self,
        opts: &WatchOpts,
        topics: IndexedTopics,
        sink: S,
    ) -> Result<EventSubscription>
    where
        E: SolEvent + Send + 'static,
        S: Sink<Log<E>> + Send + Unpin + 'static,
        S::Error: Debug,
    {
        let filter = opts.apply(topics.to_filter::<E>(self.address));
        let stream = self.source.watch_logs(&filter).await?;

        info!(
            contract_address = %self.address,
            event_name = E::SIGNATURE,
            start_block = ?opts.start,
            event = "event_watch_started"
        );

        Ok(watch(LogSubscription::spawn(stream), sink))
    }

    /// Decodes one raw log as event `E`.
    pub fn parse_log<E: SolEvent>(&self, log: &Log) -> Result<Log<E>> {
        decode_event::<E>(log)
    }
}

/// Generates the typed `filter_*` / `watch_*` / `parse_*` triple for one event.
///
/// Must be invoked inside an `impl` block whose type has an
/// `events: EventFilterer<L>` field. Indexed arguments are listed after the
/// method names, in declaration order.
macro_rules! event_bindings {
    (
        $(#[$meta:meta])*
        $event:ident => $filter:ident, $watch:ident, $parse:ident
        $(; $arg:ident : $arg_ty:ty)* $(;)?
    ) => {
        $(#[$meta])*
        ///
        /// Queries historical events. Empty indexed-argument slices match any value.
        pub async fn $filter(
            &self,
            opts: &$crate::options::FilterOpts,
            $($arg: &[$arg_ty],)*
        ) -> $crate::error::Result<$crate::events::EventIterator<$event>> {
            let topics = $crate::events::IndexedTopics::new()$(.with($arg))*;
            self.events.filter_logs::<$event>(opts, topics).await
        }

        #[doc = concat!(
            "Forwards live `", stringify!($event), "` events into `sink` until the ",
            "returned subscription is cancelled or fails. Empty indexed-argument ",
            "slices match any value."
        )]
        pub async fn $watch<S>(
            &self,
            opts: &$crate::options::WatchOpts,
            sink: S,
            $($arg: &[$arg_ty],)*
        ) -> $crate::error::Result<$crate::events::EventSubscription>
        where
            S: futures::Sink<alloy_rpc_types::Log<$event>> + Send + Unpin + 'static,
            S::Error: std::fmt::Debug,
        {
            let topics = $crate::events::IndexedTopics::new()$(.with($arg))*;
            self.events.watch_logs::<$event, S>(opts, topics, sink).await
        }

        #[doc = concat!("Decodes a raw log as a `", stringify!($event), "` event.")]
        pub fn $parse(
            &self,
            log: &alloy_rpc_types::Log,
        ) -> $crate::error::Result<alloy_rpc_types::Log<$event>> {
            self.events.parse_log::<$event>(log)
        }
    };
}

pub(crate) use event_bindings;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};
    use alloy_sol_types::sol;
    use futures::channel::mpsc;
    use futures::StreamExt;

    sol! {
        #[derive(Debug, PartialEq, Eq)]
        event Ping(address indexed from, uint256 indexed round, uint256 value);

        #[derive(Debug, PartialEq, Eq)]
        event Pong(address indexed to);
    }

    fn ping_log(round: u64, value: u64) -> Log {
        ping_log_at(Address::ZERO, round, value)
    }

    fn ping_log_at(contract: Address, round: u64, value: u64) -> Log {
        let event = Ping {
            from: address!("00000000000000000000000000000000000000aa"),
            round: U256::from(round),
            value: U256::from(value),
        };
        Log {
            inner: alloy_primitives::Log {
                address: contract,
                data: event.encode_log_data(),
            },
            block_number: Some(round),
            ..Default::default()
        }
    }

    fn pong_log() -> Log {
        let event = Pong {
            to: Address::ZERO,
        };
        Log {
            inner: alloy_primitives::Log {
                address: Address::ZERO,
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_into_topic_left_pads_addresses_and_integers() {
        let addr = address!("00000000000000000000000000000000000000aa");
        assert_eq!(
            addr.into_topic(),
            b256!("00000000000000000000000000000000000000000000000000000000000000aa")
        );
        assert_eq!(
            U256::from(0x0102).into_topic(),
            b256!("0000000000000000000000000000000000000000000000000000000000000102")
        );
    }

    #[test]
    fn test_indexed_topics_build_filter() {
        let contract = address!("1111111111111111111111111111111111111111");
        let from = address!("00000000000000000000000000000000000000aa");
        let filter = IndexedTopics::new()
            .with(&[from])
            .with::<U256>(&[])
            .to_filter::<Ping>(contract);

        assert!(filter.matches(&ping_log_at(contract, 1, 5).inner));
        assert!(!filter.matches(&pong_log().inner));
        assert!(!filter.matches(&ping_log(1, 5).inner));
    }

    #[test]
    fn test_decode_event_rejects_other_signature() {
        let err = decode_event::<Ping>(&pong_log()).unwrap_err();
        assert!(matches!(
            err,
            IcttError::EventSignatureMismatch { event, .. } if event == Ping::SIGNATURE
        ));
    }

    #[tokio::test]
    async fn test_iterator_yields_events_then_done() {
        let subscription = LogSubscription::from_logs(vec![ping_log(1, 10), ping_log(2, 20)]);
        let mut iter = EventIterator::<Ping>::new(subscription);

        assert_eq!(iter.state(), IteratorState::InProgress);
        assert_eq!(iter.next().await.unwrap().inner.data.value, U256::from(10));
        assert_eq!(iter.next().await.unwrap().inner.data.value, U256::from(20));
        assert!(iter.next().await.is_none());
        assert_eq!(iter.state(), IteratorState::Done);
        assert!(iter.error().is_none());
    }

    #[tokio::test]
    async fn test_iterator_records_decode_failure() {
        let subscription = LogSubscription::from_logs(vec![ping_log(1, 10), pong_log()]);
        let mut iter = EventIterator::<Ping>::new(subscription);

        assert!(iter.next().await.is_some());
        assert!(iter.next().await.is_none());
        assert!(matches!(
            iter.error(),
            Some(IcttError::EventSignatureMismatch { .. })
        ));
        // Sticky after failure
        assert!(iter.next().await.is_none());
    }

    #[tokio::test]
    async fn test_iterator_surfaces_subscription_error() {
        let items = vec![
            Ok(ping_log(1, 10)),
            Err(IcttError::Provider("connection reset".to_string())),
        ];
        let mut iter = EventIterator::<Ping>::new(LogSubscription::spawn(
            futures::stream::iter(items),
        ));

        assert!(iter.next().await.is_some());
        assert!(iter.next().await.is_none());
        assert_eq!(iter.state(), IteratorState::Done);
        assert!(matches!(iter.error(), Some(IcttError::Provider(_))));
    }

    #[tokio::test]
    async fn test_iterator_close_stops_pending_feed() {
        let subscription = LogSubscription::spawn(futures::stream::pending::<Result<Log>>());
        let mut iter = EventIterator::<Ping>::new(subscription);

        iter.close();

        assert_eq!(iter.state(), IteratorState::Done);
        assert!(iter.next().await.is_none());
        assert!(iter.error().is_none());
    }

    #[tokio::test]
    async fn test_into_stream_ends_with_error() {
        let items = vec![
            Ok(ping_log(1, 10)),
            Err(IcttError::Provider("boom".to_string())),
        ];
        let iter = EventIterator::<Ping>::new(LogSubscription::spawn(futures::stream::iter(items)));

        let collected: Vec<_> = iter.into_stream().collect().await;

        assert_eq!(collected.len(), 2);
        assert!(collected[0].is_ok());
        assert!(matches!(collected[1], Err(IcttError::Provider(_))));
    }

    #[tokio::test]
    async fn test_watch_forwards_events_and_ends_cleanly() {
        let (tx, rx) = mpsc::channel(8);
        let subscription = LogSubscription::from_logs(vec![ping_log(1, 1), ping_log(2, 2)]);

        let handle = watch::<Ping, _>(subscription, tx);
        handle.wait().await.unwrap();

        let received: Vec<_> = rx.collect().await;
        assert_eq!(received.len(), 2);
        assert_eq!(received[1].inner.data.round, U256::from(2));
    }

    #[tokio::test]
    async fn test_watch_propagates_subscription_error() {
        let (tx, _rx) = mpsc::channel(8);
        let items = vec![Err(IcttError::Provider("filter expired".to_string()))];

        let handle = watch::<Ping, _>(LogSubscription::spawn(futures::stream::iter(items)), tx);

        assert!(matches!(handle.wait().await, Err(IcttError::Provider(_))));
    }

    #[tokio::test]
    async fn test_watch_reports_closed_sink() {
        let (tx, rx) = mpsc::channel(8);
        drop(rx);

        let handle = watch::<Ping, _>(LogSubscription::from_logs(vec![ping_log(1, 1)]), tx);

        assert!(matches!(handle.wait().await, Err(IcttError::SinkClosed(_))));
    }

    #[tokio::test]
    async fn test_watch_unsubscribe_returns_ok() {
        let (tx, _rx) = mpsc::channel::<Log<Ping>>(8);
        let subscription = LogSubscription::spawn(futures::stream::pending::<Result<Log>>());

        let handle = watch::<Ping, _>(subscription, tx);
        assert!(!handle.is_finished());

        handle.unsubscribe().await.unwrap();
    }

    #[tokio::test]
    async fn test_watch_unsubscribe_while_sink_is_full() {
        // Never drained, so the second send blocks
        let (tx, _rx) = mpsc::channel::<Log<Ping>>(0);
        let logs = futures::stream::iter((1..=5).map(|round| Ok(ping_log(round, round))))
            .chain(futures::stream::pending());

        let handle = watch::<Ping, _>(LogSubscription::spawn(logs), tx);
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(!handle.is_finished());

        let outcome = tokio::time::timeout(std::time::Duration::from_secs(2), handle.unsubscribe())
            .await
            .expect("unsubscribe returns while the sink is full");
        assert!(outcome.is_ok());
    }
}
