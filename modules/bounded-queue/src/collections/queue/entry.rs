use alloc::{string::String, vec::Vec};

use super::Keyed;

#[cfg(test)]
mod tests;

/// Keyed record carried through the queue.
///
/// The queue only looks at the key; the value is an opaque payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry<V = Vec<u8>> {
  key:   String,
  value: V,
}

impl<V> Entry<V> {
  /// Creates an entry from a key and a payload.
  #[must_use]
  pub fn new(key: impl Into<String>, value: V) -> Self {
    Self { key: key.into(), value }
  }

  /// Returns the key.
  #[must_use]
  pub fn key(&self) -> &str {
    &self.key
  }

  /// Returns the payload.
  #[must_use]
  pub const fn value(&self) -> &V {
    &self.value
  }

  /// Splits the entry into its key and payload.
  #[must_use]
  pub fn into_parts(self) -> (String, V) {
    (self.key, self.value)
  }
}

impl<V> Keyed for Entry<V> {
  type Key = String;

  fn queue_key(&self) -> Option<&Self::Key> {
    Some(&self.key)
  }
}
