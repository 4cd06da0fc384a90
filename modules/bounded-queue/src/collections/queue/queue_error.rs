use core::fmt;


/// Errors returned by [`BoundedQueue`](super::BoundedQueue) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueueError<T> {
  /// Every slot is occupied. Contains the element that was attempted to be added.
  Overflow(T),
  /// The membership index is enabled but the element carries no key. Contains the rejected
  /// element.
  InvalidEntryType(T),
  /// A membership query was issued on a queue built without a membership index.
  MembershipDisabled,
}

impl<T> QueueError<T> {
  /// Extracts the payload carried by variants that preserve the element on failure.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Overflow(item) | Self::InvalidEntryType(item) => Some(item),
      | Self::MembershipDisabled => None,
    }
  }
}

impl<T> fmt::Display for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Overflow(_) => f.write_str("queue overflow"),
      | Self::InvalidEntryType(_) => f.write_str("invalid entry type: element carries no key"),
      | Self::MembershipDisabled => f.write_str("membership index is disabled"),
    }
  }
}

impl<T: fmt::Debug> core::error::Error for QueueError<T> {}
