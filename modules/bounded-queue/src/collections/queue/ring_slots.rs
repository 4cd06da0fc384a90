use alloc::boxed::Box;


/// Fixed ring of slots addressed by a read cursor and a write cursor.
///
/// Both cursors stay in `[0, capacity)`. When they are equal the ring is either empty or full;
/// the `wrapped` flag tells the two apart. It flips every time one of the cursors wraps from
/// `capacity - 1` back to `0`, so it is set exactly while the write cursor is one lap ahead of
/// the read cursor.
pub struct RingSlots<T> {
  slots:   Box<[Option<T>]>,
  read:    usize,
  write:   usize,
  wrapped: bool,
}

impl<T> RingSlots<T> {
  /// Allocates `capacity` empty slots.
  ///
  /// # Panics
  ///
  /// Panics if `capacity` is zero.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    assert!(capacity > 0, "ring capacity must be positive");
    let slots = (0..capacity).map(|_| None).collect();
    Self { slots, read: 0, write: 0, wrapped: false }
  }

  /// Returns the number of slots.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Returns the number of occupied slots, derived from the cursors alone.
  #[must_use]
  pub fn len(&self) -> usize {
    if self.wrapped { self.write + self.capacity() - self.read } else { self.write - self.read }
  }

  /// Indicates whether no slot is occupied.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    !self.wrapped && self.read == self.write
  }

  /// Indicates whether every slot is occupied.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    self.wrapped && self.read == self.write
  }

  /// Index of the next slot to read.
  #[must_use]
  pub const fn read_cursor(&self) -> usize {
    self.read
  }

  /// Index of the next slot to write.
  #[must_use]
  pub const fn write_cursor(&self) -> usize {
    self.write
  }

  /// Indicates whether the write cursor is one lap ahead of the read cursor.
  #[must_use]
  pub const fn is_wrapped(&self) -> bool {
    self.wrapped
  }

  /// Stores `item` in the slot under the write cursor.
  ///
  /// # Errors
  ///
  /// Hands `item` back when every slot is occupied.
  pub fn push(&mut self, item: T) -> Result<(), T> {
    if self.is_full() {
      return Err(item);
    }
    self.slots[self.write] = Some(item);
    self.write = self.advance(self.write);
    Ok(())
  }

  /// Takes the element under the read cursor, leaving its slot empty.
  pub fn pop(&mut self) -> Option<T> {
    if self.is_empty() {
      return None;
    }
    let item = self.slots[self.read].take()?;
    self.read = self.advance(self.read);
    Some(item)
  }

  /// Returns a reference to the element under the read cursor.
  #[must_use]
  pub fn front(&self) -> Option<&T> {
    if self.is_empty() {
      return None;
    }
    self.slots[self.read].as_ref()
  }

  fn advance(&mut self, cursor: usize) -> usize {
    let next = cursor + 1;
    if next == self.capacity() {
      self.wrapped = !self.wrapped;
      0
    } else {
      next
    }
  }
}
