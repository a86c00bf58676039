//! Fixed-capacity circular history
//!
//! Every scrolling track stores its per-block columns in a `RingHistory`:
//! a flat backing store plus a write cursor that advances modulo capacity.
//! Wraparound is resolved in exactly one place (`as_slices`), which hands
//! back the old-to-new ordering as two borrowed slices so compositing can
//! stay a pair of bulk copies instead of a per-element modulo.

/// Circular history with a fixed capacity chosen at construction.
///
/// Slots are never "empty": construction and `reset` fill every slot with a
/// neutral value, so pre-warm-up reads see defined data rather than garbage.
pub struct RingHistory<T> {
    slots: Vec<T>,
    cursor: usize,
}

impl<T: Clone> RingHistory<T> {
    /// Create a history of `capacity` slots, every slot set to `fill`.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, fill: T) -> Self {
        assert!(capacity > 0, "RingHistory capacity must be non-zero");
        Self {
            slots: vec![fill; capacity],
            cursor: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot index the next `write` will overwrite (the oldest column).
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Store `column` at the cursor, then advance the cursor by one, wrapping.
    pub fn write(&mut self, column: T) {
        let w = self.slots.len();
        self.slots[self.cursor] = column;
        self.cursor = (self.cursor + 1) % w;
    }

    /// The most recently written column.
    #[inline]
    pub fn latest(&self) -> &T {
        let w = self.slots.len();
        &self.slots[(self.cursor + w - 1) % w]
    }

    /// Resolve wraparound: the full history as `(older, newer)` slices.
    ///
    /// Concatenated they are the `capacity` columns in write order,
    /// oldest first. The slot at the cursor is the oldest, so the first
    /// slice is `[cursor..]` and the second is `[..cursor]`.
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (newer, older) = self.slots.split_at(self.cursor);
        (older, newer)
    }

    /// Refill every slot with `fill` and move the cursor back to zero.
    pub fn reset(&mut self, fill: T) {
        for slot in &mut self.slots {
            *slot = fill.clone();
        }
        self.cursor = 0;
    }

    /// Logical old-to-new iteration without materializing a copy.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (older, newer) = self.as_slices();
        older.iter().chain(newer.iter())
    }
}
