//! Splitting a line into fixed-size, padded batches.

use std::iter::Peekable;

use crate::frame::{Batch, Item};

/// Frames one line of items into batches of exactly `batch_size` slots.
///
/// The final batch is padded with invalid slots and carries the line-end
/// marker. An empty line becomes a single all-padding batch with the
/// line-end marker, so every line is visible to the consumer.
///
/// ```
/// use nearlink_stream::{Item, LineBatches};
///
/// let items = (0..5).map(|i| Item::new(i, i * 10));
/// let batches: Vec<_> = LineBatches::new(items, 4).collect();
///
/// assert_eq!(batches.len(), 2);
/// assert_eq!(batches[1].n_valid(), 1);
/// assert!(batches[1].is_line_end());
/// ```
pub struct LineBatches<I: Iterator> {
    items: Peekable<I>,
    batch_size: usize,
    done: bool,
}

impl<I: Iterator> LineBatches<I> {
    /// Frames `items` into batches of `batch_size` slots.
    ///
    /// # Panics
    ///
    /// Panics if `batch_size` is zero.
    pub fn new<J>(items: J, batch_size: usize) -> Self
    where
        J: IntoIterator<IntoIter = I>,
    {
        assert!(batch_size > 0, "batch_size must be >= 1");
        Self {
            items: items.into_iter().peekable(),
            batch_size,
            done: false,
        }
    }
}

impl<T, I> Iterator for LineBatches<I>
where
    I: Iterator<Item = Item<T>>,
{
    type Item = Batch<T>;

    fn next(&mut self) -> Option<Batch<T>> {
        if self.done {
            return None;
        }
        let mut slots: Vec<Option<Item<T>>> = Vec::with_capacity(self.batch_size);
        slots.extend(self.items.by_ref().take(self.batch_size).map(Some));
        slots.resize_with(self.batch_size, || None);
        let line_end = self.items.peek().is_none();
        self.done = line_end;
        Some(Batch::new(slots, line_end))
    }
}
