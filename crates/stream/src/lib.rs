//! Bounded-batch ingest port for streaming point sets.
//!
//! A producer frames points into fixed-size batches. Each slot is either a
//! valid `(index, payload)` item or padding, and the last batch of a line
//! carries a line-end marker. Batches travel over a bounded channel, so a
//! producer that outpaces its consumer stalls instead of buffering without
//! limit. The stream closes with a single end sentinel.
//!
//! | Piece | Type | Notes |
//! |-------|------|-------|
//! | Slots | [`Item`], [`Batch`] | `None` slots are padding |
//! | Framing | [`LineBatches`] | Pads the tail batch, marks line end |
//! | Layout | [`Schedule`] | One line, or one line per anchor point |
//! | Transport | [`ingest_port`] | `Producer` / `Consumer` over a bounded channel |
//!
//! # Architecture
//!
//! ```text
//! Producer::offer_points()
//!   └─ Schedule::lines()           (schedule.rs)
//!        └─ LineBatches            (batcher.rs, pad + line end)
//!             └─ Producer::offer() (port.rs, stalls while full)
//!                  ══ sync_channel(capacity) ══
//! Consumer::next_batch()           (port.rs, size/order/line checks)
//! ```

pub mod batcher;
pub mod config;
pub mod error;
pub mod frame;
pub mod port;
pub mod schedule;

pub use batcher::LineBatches;
pub use config::StreamConfig;
pub use error::StreamError;
pub use frame::{Batch, Frame, Item};
pub use port::{Consumer, ConsumerStats, Offer, Producer, ProducerStats, ingest_port};
pub use schedule::Schedule;
