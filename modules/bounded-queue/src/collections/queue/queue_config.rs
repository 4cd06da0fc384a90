
/// Capacity used when a queue is configured with a capacity of zero.
pub const DEFAULT_CAPACITY: usize = 1 << 16;

/// Construction parameters of a [`BoundedQueue`](super::BoundedQueue).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueConfig {
  capacity:         usize,
  membership_index: bool,
}

impl QueueConfig {
  /// Creates a configuration with the given capacity and no membership index.
  ///
  /// A capacity of zero selects [`DEFAULT_CAPACITY`].
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    let capacity = if capacity == 0 { DEFAULT_CAPACITY } else { capacity };
    Self { capacity, membership_index: false }
  }

  /// Enables or disables the membership index.
  #[must_use]
  pub const fn with_membership_index(mut self, enabled: bool) -> Self {
    self.membership_index = enabled;
    self
  }

  /// Returns the number of slots the queue allocates.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Indicates whether the queue maintains a membership index.
  #[must_use]
  pub const fn membership_index(&self) -> bool {
    self.membership_index
  }
}

impl Default for QueueConfig {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}
