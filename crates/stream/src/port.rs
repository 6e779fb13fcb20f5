//! The ingest port: a bounded channel of frames with a producer half and a
//! consumer half.
//!
//! The producer offers one batch per accept cycle. When the channel already
//! holds `capacity` frames the offer stalls until the consumer drains one.
//! The producer sends the end sentinel exactly once, when it is finished;
//! dropping it without finishing leaves the consumer with a truncated
//! stream.

use std::sync::mpsc::{Receiver, SyncSender, TryRecvError, TrySendError, sync_channel};

use serde::Serialize;
use tracing::{debug, trace};

use crate::batcher::LineBatches;
use crate::config::StreamConfig;
use crate::error::StreamError;
use crate::frame::{Batch, Frame, Item};
use crate::schedule::Schedule;

/// Creates a connected producer and consumer.
///
/// # Errors
///
/// Returns [`StreamError`] if `config` fails validation.
///
/// # Example
///
/// ```
/// use nearlink_stream::{Item, StreamConfig, ingest_port};
///
/// let (mut producer, mut consumer) = ingest_port(&StreamConfig::new(4)).unwrap();
/// producer.offer_line((0..6).map(|i| Item::new(i, i * 2))).unwrap();
/// producer.finish().unwrap();
///
/// let mut seen = Vec::new();
/// while let Some(batch) = consumer.next_batch().unwrap() {
///     seen.extend(batch.into_valid().map(|item| item.value));
/// }
/// assert_eq!(seen, vec![0, 2, 4, 6, 8, 10]);
/// ```
pub fn ingest_port<T>(config: &StreamConfig) -> Result<(Producer<T>, Consumer<T>), StreamError> {
    config.validate()?;
    let (tx, rx) = sync_channel(config.capacity());
    let producer = Producer {
        tx,
        batch_size: config.batch_size(),
        schedule: config.schedule(),
        stats: ProducerStats::default(),
    };
    let consumer = Consumer {
        rx,
        batch_size: config.batch_size(),
        schedule: config.schedule(),
        line: 0,
        next_index: None,
        ended: false,
        stats: ConsumerStats::default(),
    };
    Ok((producer, consumer))
}

/// Outcome of a non-blocking offer.
#[derive(Debug)]
pub enum Offer<T> {
    /// The batch is in the channel.
    Accepted,
    /// The channel is full; the batch is handed back untouched.
    Stalled(Batch<T>),
}

/// Counters kept by a [`Producer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProducerStats {
    /// Batches accepted by the channel.
    pub batches: usize,
    /// Batches carrying the line-end marker.
    pub lines: usize,
    /// Offers that found the channel full.
    pub stalls: usize,
}

/// Counters kept by a [`Consumer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConsumerStats {
    /// Batches received.
    pub batches: usize,
    /// Lines completed.
    pub lines: usize,
    /// Valid slots received.
    pub accepted: usize,
    /// Padding slots received.
    pub padding: usize,
}

/// Sending half of an ingest port.
#[derive(Debug)]
pub struct Producer<T> {
    tx: SyncSender<Frame<T>>,
    batch_size: usize,
    schedule: Schedule,
    stats: ProducerStats,
}

impl<T> Producer<T> {
    fn check(&self, batch: &Batch<T>) -> Result<(), StreamError> {
        if batch.len() != self.batch_size {
            return Err(StreamError::BatchSizeMismatch {
                expected: self.batch_size,
                got: batch.len(),
            });
        }
        Ok(())
    }

    fn accepted(&mut self, line_end: bool) {
        self.stats.batches += 1;
        if line_end {
            self.stats.lines += 1;
        }
    }

    /// Offers a batch without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::BatchSizeMismatch`] if the batch has the wrong
    /// number of slots, or [`StreamError::Disconnected`] if the consumer is
    /// gone.
    pub fn try_offer(&mut self, batch: Batch<T>) -> Result<Offer<T>, StreamError> {
        self.check(&batch)?;
        let line_end = batch.is_line_end();
        match self.tx.try_send(Frame::Batch(batch)) {
            Ok(()) => {
                self.accepted(line_end);
                Ok(Offer::Accepted)
            }
            Err(TrySendError::Full(Frame::Batch(batch))) => {
                self.stats.stalls += 1;
                Ok(Offer::Stalled(batch))
            }
            Err(TrySendError::Full(Frame::End)) => unreachable!("offered a batch"),
            Err(TrySendError::Disconnected(_)) => Err(StreamError::Disconnected),
        }
    }

    /// Offers a batch, waiting while the channel is full.
    ///
    /// # Errors
    ///
    /// Same as [`try_offer`](Self::try_offer).
    pub fn offer(&mut self, batch: Batch<T>) -> Result<(), StreamError> {
        match self.try_offer(batch)? {
            Offer::Accepted => Ok(()),
            Offer::Stalled(batch) => {
                trace!(stalls = self.stats.stalls, "ingest channel full, waiting");
                let line_end = batch.is_line_end();
                self.tx
                    .send(Frame::Batch(batch))
                    .map_err(|_| StreamError::Disconnected)?;
                self.accepted(line_end);
                Ok(())
            }
        }
    }

    /// Frames `items` as one line and offers every batch in order.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Disconnected`] if the consumer is gone.
    pub fn offer_line<I>(&mut self, items: I) -> Result<(), StreamError>
    where
        I: IntoIterator<Item = Item<T>>,
    {
        for batch in LineBatches::new(items, self.batch_size) {
            self.offer(batch)?;
        }
        Ok(())
    }

    /// Offers `n_points` payloads laid out by the configured schedule.
    ///
    /// `value(i)` is called once per slot, so under the triangular schedule
    /// a point is produced once for every line it appears on.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Disconnected`] if the consumer is gone.
    pub fn offer_points<F>(&mut self, n_points: usize, mut value: F) -> Result<(), StreamError>
    where
        F: FnMut(usize) -> T,
    {
        for line in self.schedule.lines(n_points) {
            self.offer_line(line.map(|i| Item::new(i, value(i))))?;
        }
        Ok(())
    }

    /// Returns the counters so far.
    pub fn stats(&self) -> ProducerStats {
        self.stats
    }

    /// Sends the end sentinel and closes the producer.
    ///
    /// Consuming `self` makes a second end marker impossible.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Disconnected`] if the consumer is gone.
    pub fn finish(self) -> Result<ProducerStats, StreamError> {
        self.tx
            .send(Frame::End)
            .map_err(|_| StreamError::Disconnected)?;
        debug!(
            batches = self.stats.batches,
            lines = self.stats.lines,
            stalls = self.stats.stalls,
            "producer finished"
        );
        Ok(self.stats)
    }
}

/// Receiving half of an ingest port.
///
/// Checks every batch against the configured batch size and the schedule's
/// index order, and tracks line boundaries so the end marker can only
/// arrive between lines.
#[derive(Debug)]
pub struct Consumer<T> {
    rx: Receiver<Frame<T>>,
    batch_size: usize,
    schedule: Schedule,
    line: usize,
    /// Index the next valid slot must carry; `None` before a line's first.
    next_index: Option<usize>,
    ended: bool,
    stats: ConsumerStats,
}

impl<T> Consumer<T> {
    /// Receives the next batch, waiting for one if the channel is empty.
    ///
    /// Returns `Ok(None)` once the end marker has been received, and on
    /// every call after that.
    ///
    /// # Errors
    ///
    /// - [`StreamError::BatchSizeMismatch`] if a batch has the wrong slot count.
    /// - [`StreamError::IndexOutOfOrder`] if a valid slot breaks the schedule.
    /// - [`StreamError::UnterminatedLine`] if the end marker arrives mid-line.
    /// - [`StreamError::Truncated`] if the producer left without an end marker.
    pub fn next_batch(&mut self) -> Result<Option<Batch<T>>, StreamError> {
        if self.ended {
            return Ok(None);
        }
        let frame = self.rx.recv().map_err(|_| StreamError::Truncated)?;
        self.accept(frame)
    }

    /// Receives the next batch if one is already waiting.
    ///
    /// Returns `Ok(None)` when the channel is momentarily empty or the stream
    /// has ended; use [`is_ended`](Self::is_ended) to tell the two apart.
    ///
    /// # Errors
    ///
    /// Same as [`next_batch`](Self::next_batch).
    pub fn try_next_batch(&mut self) -> Result<Option<Batch<T>>, StreamError> {
        if self.ended {
            return Ok(None);
        }
        match self.rx.try_recv() {
            Ok(frame) => self.accept(frame),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(StreamError::Truncated),
        }
    }

    /// Returns `true` once the end marker has been received.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Returns the counters so far.
    pub fn stats(&self) -> ConsumerStats {
        self.stats
    }

    fn accept(&mut self, frame: Frame<T>) -> Result<Option<Batch<T>>, StreamError> {
        let batch = match frame {
            Frame::Batch(batch) => batch,
            Frame::End => {
                if self.next_index.is_some() {
                    return Err(StreamError::UnterminatedLine { line: self.line });
                }
                self.ended = true;
                debug!(
                    batches = self.stats.batches,
                    lines = self.stats.lines,
                    accepted = self.stats.accepted,
                    "end of stream"
                );
                return Ok(None);
            }
        };
        if batch.len() != self.batch_size {
            return Err(StreamError::BatchSizeMismatch {
                expected: self.batch_size,
                got: batch.len(),
            });
        }

        let mut expected = self
            .next_index
            .unwrap_or_else(|| self.schedule.first_index(self.line));
        let mut valid = 0;
        for item in batch.valid() {
            if item.index != expected {
                return Err(StreamError::IndexOutOfOrder {
                    line: self.line,
                    expected,
                    got: item.index,
                });
            }
            expected += 1;
            valid += 1;
        }

        self.stats.batches += 1;
        self.stats.accepted += valid;
        self.stats.padding += batch.len() - valid;
        if batch.is_line_end() {
            self.stats.lines += 1;
            self.line += 1;
            self.next_index = None;
        } else {
            self.next_index = Some(expected);
        }
        Ok(Some(batch))
    }
}
