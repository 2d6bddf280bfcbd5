//! The channel a streaming traversal pushes its values through.
//!
//! A traversal producer owns a [`StreamSender`] and a consumer drains the
//! matching [`StreamReceiver`]. The channel is bounded (by default a
//! rendezvous: each value is handed over directly, nothing is buffered) and
//! the producer gives up instead of blocking forever when
//!
//! - the consumer cancels through its [`CancelToken`],
//! - the consumer drops its receiver,
//! - a configured send timeout elapses.
//!
//! A producer that gives up drops its sender, which closes the channel.
//!
//! # Examples
//!
//! ```
//! use bstree::stream::{channel, StreamConfig};
//! use std::thread;
//!
//! let (sender, receiver) = channel(StreamConfig::new());
//! let producer = thread::spawn(move || {
//!     for i in 0..3 {
//!         sender.send(i)?;
//!     }
//!     Ok::<_, bstree::stream::StreamError>(())
//! });
//!
//! assert_eq!(receiver.collect::<Vec<_>>(), vec![0, 1, 2]);
//! assert!(producer.join().unwrap().is_ok());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Default pause between two attempts to hand a value over.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_micros(50);

/// Why a streaming traversal stopped before sending its last value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// The consumer fired its [`CancelToken`].
    #[error("stream cancelled by the consumer")]
    Cancelled,
    /// The receiving half was dropped.
    #[error("stream receiver dropped before the traversal finished")]
    Disconnected,
    /// The consumer did not take a value in time.
    #[error("consumer did not take a value within {0:?}")]
    Timeout(Duration),
    /// The thread running the traversal panicked.
    #[error("traversal producer panicked")]
    ProducerPanicked,
}

/// How a stream channel buffers and waits.
#[derive(Clone, Debug)]
pub struct StreamConfig {
    capacity: usize,
    send_timeout: Option<Duration>,
    poll_interval: Duration,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamConfig {
    /// Rendezvous channel, no timeout.
    pub fn new() -> Self {
        Self {
            capacity: 0,
            send_timeout: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Number of values the channel holds before a send has to wait. `0`
    /// means every value is handed directly to a waiting consumer.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Longest time a single send waits for room before failing with
    /// [`StreamError::Timeout`].
    pub fn send_timeout(mut self, timeout: Duration) -> Self {
        self.send_timeout = Some(timeout);
        self
    }

    /// Pause between two attempts of a waiting send.
    ///
    /// A send waiting for room can't block on the channel and still notice a
    /// cancel, so it retries after this pause. The interval bounds how late a
    /// waiting producer notices a cancel or a freed slot. A shorter
    /// interval lowers that latency and costs more wakeups while the consumer
    /// stalls. [`Duration::ZERO`] yields instead of sleeping, which keeps a
    /// core busy for as long as the consumer stalls; use it only for
    /// consumers that drain promptly.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

/// A shared flag a consumer sets to stop its producer.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that has not fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the token. Every clone observes it.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) was called on this token or a clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Creates a connected sender/receiver pair.
pub fn channel<T>(config: StreamConfig) -> (StreamSender<T>, StreamReceiver<T>) {
    let (tx, rx) = mpsc::sync_channel(config.capacity);
    let cancel = CancelToken::new();
    let sender = StreamSender {
        tx,
        cancel: cancel.clone(),
        send_timeout: config.send_timeout,
        poll_interval: config.poll_interval,
    };
    (sender, StreamReceiver { rx, cancel })
}

/// The producing half of a stream channel. Dropping it closes the channel.
#[derive(Debug)]
pub struct StreamSender<T> {
    tx: SyncSender<T>,
    cancel: CancelToken,
    send_timeout: Option<Duration>,
    poll_interval: Duration,
}

impl<T> StreamSender<T> {
    /// Hands `value` to the consumer, waiting for room if the channel is
    /// full.
    pub fn send(&self, value: T) -> Result<(), StreamError> {
        let deadline = self.send_timeout.map(|timeout| Instant::now() + timeout);
        let mut value = value;
        loop {
            if self.cancel.is_cancelled() {
                return Err(StreamError::Cancelled);
            }
            match self.tx.try_send(value) {
                Ok(()) => return Ok(()),
                // A consumer that cancels and then hangs up reports the cancel.
                Err(TrySendError::Disconnected(_)) if self.cancel.is_cancelled() => {
                    return Err(StreamError::Cancelled)
                }
                Err(TrySendError::Disconnected(_)) => return Err(StreamError::Disconnected),
                Err(TrySendError::Full(returned)) => value = returned,
            }
            if let (Some(deadline), Some(timeout)) = (deadline, self.send_timeout) {
                if Instant::now() >= deadline {
                    return Err(StreamError::Timeout(timeout));
                }
            }
            if self.poll_interval.is_zero() {
                thread::yield_now();
            } else {
                thread::sleep(self.poll_interval);
            }
        }
    }

    /// Whether the consumer asked the producer to stop.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// The consuming half of a stream channel.
///
/// Iterating yields every value until the producer closes the channel.
#[derive(Debug)]
pub struct StreamReceiver<T> {
    rx: Receiver<T>,
    cancel: CancelToken,
}

impl<T> StreamReceiver<T> {
    /// Blocks for the next value. `None` once the channel is closed.
    pub fn recv(&self) -> Option<T> {
        self.rx.recv().ok()
    }

    /// Waits at most `timeout` for the next value.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<T> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Tells the producer to stop at its next send.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A handle that can cancel the producer from elsewhere.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

impl<T> Iterator for StreamReceiver<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.recv()
    }
}

/// A traversal running on its own thread, drained by iterating.
///
/// Dropping the stream drops its receiver: the producer fails its next send
/// with [`StreamError::Disconnected`] and releases the tree.
#[derive(Debug)]
pub struct TraversalStream<T> {
    receiver: StreamReceiver<T>,
    producer: JoinHandle<Result<usize, StreamError>>,
}

impl<T> TraversalStream<T> {
    pub(crate) fn new(
        receiver: StreamReceiver<T>,
        producer: JoinHandle<Result<usize, StreamError>>,
    ) -> Self {
        Self { receiver, producer }
    }

    /// Tells the producer to stop at its next send.
    pub fn cancel(&self) {
        self.receiver.cancel();
    }

    /// Stops consuming and waits for the producer. Returns how many values
    /// it sent, or why it stopped early.
    pub fn finish(self) -> Result<usize, StreamError> {
        let Self { receiver, producer } = self;
        drop(receiver);
        producer
            .join()
            .map_err(|_| StreamError::ProducerPanicked)?
    }
}

impl<T> Iterator for TraversalStream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.receiver.recv()
    }
}
