//! Batches, slots and the end-of-stream sentinel.

/// A valid slot: a point index and its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<T> {
    /// Index assigned to the payload at ingestion.
    pub index: usize,
    /// The payload.
    pub value: T,
}

impl<T> Item<T> {
    /// Creates a new item.
    pub fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }
}

/// A fixed-size group of slots offered in one accept cycle.
///
/// Each slot is either a valid [`Item`] or padding (`None`). Padding carries
/// no data and is skipped by consumers. `line_end` marks the last batch of a
/// logical input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<T> {
    slots: Vec<Option<Item<T>>>,
    line_end: bool,
}

impl<T> Batch<T> {
    /// Creates a batch from its slots.
    pub fn new(slots: Vec<Option<Item<T>>>, line_end: bool) -> Self {
        Self { slots, line_end }
    }

    /// Returns every slot, padding included.
    pub fn slots(&self) -> &[Option<Item<T>>] {
        &self.slots
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the batch has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of valid slots.
    pub fn n_valid(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if this is the last batch of its line.
    pub fn is_line_end(&self) -> bool {
        self.line_end
    }

    /// Iterates over the valid items, skipping padding.
    pub fn valid(&self) -> impl Iterator<Item = &Item<T>> + '_ {
        self.slots.iter().flatten()
    }

    /// Consumes the batch and yields its valid items.
    pub fn into_valid(self) -> impl Iterator<Item = Item<T>> {
        self.slots.into_iter().flatten()
    }
}

/// What travels over the ingest channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame<T> {
    /// A batch of slots.
    Batch(Batch<T>),
    /// End of stream. Sent exactly once, after the last batch.
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_skips_padding() {
        let batch = Batch::new(
            vec![Some(Item::new(4, 'a')), None, Some(Item::new(5, 'b')), None],
            true,
        );
        assert_eq!(batch.len(), 4);
        assert_eq!(batch.n_valid(), 2);
        assert!(batch.is_line_end());
        let idx: Vec<_> = batch.valid().map(|i| i.index).collect();
        assert_eq!(idx, vec![4, 5]);
        let values: Vec<_> = batch.into_valid().map(|i| i.value).collect();
        assert_eq!(values, vec!['a', 'b']);
    }

    #[test]
    fn test_all_padding() {
        let batch: Batch<u8> = Batch::new(vec![None; 3], false);
        assert_eq!(batch.n_valid(), 0);
        assert!(!batch.is_empty());
        assert_eq!(batch.valid().count(), 0);
    }
}
