use alloc::string::String;
use core::hash::Hash;

/// Capability an element provides so the queue can index it by key.
///
/// Returning `None` marks an element that carries no key; a queue with its membership index
/// enabled rejects such elements with [`QueueError::InvalidEntryType`](super::QueueError).
pub trait Keyed {
  /// Identifier recorded in the membership index.
  type Key: Hash + Eq + Clone;

  /// Returns the key of this element, if it has one.
  fn queue_key(&self) -> Option<&Self::Key>;
}

impl Keyed for String {
  type Key = String;

  fn queue_key(&self) -> Option<&Self::Key> {
    Some(self)
  }
}
