
/// State change reported to a [`QueueObserver`](super::QueueObserver).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueEvent {
  /// An element was stored; `len` is the length right after the store.
  Enqueued {
    /// Queue length after the operation.
    len: usize,
  },
  /// An element was removed; `len` is the length right after the removal.
  Dequeued {
    /// Queue length after the operation.
    len: usize,
  },
  /// An enqueue was refused because the queue was full.
  Overflow {
    /// Capacity of the refusing queue.
    capacity: usize,
  },
  /// An enqueue was refused because the element carried no key.
  InvalidEntryType,
}

impl From<&QueueEvent> for &'static str {
  fn from(event: &QueueEvent) -> Self {
    match event {
      | QueueEvent::Enqueued { .. } => "enqueued",
      | QueueEvent::Dequeued { .. } => "dequeued",
      | QueueEvent::Overflow { .. } => "overflow",
      | QueueEvent::InvalidEntryType => "invalid_entry_type",
    }
  }
}
