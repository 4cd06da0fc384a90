use alloc::{boxed::Box, string::String};
use core::{any::Any, fmt};

use super::{Entry, Keyed};


/// Type-erased queue element.
///
/// Lets one queue carry heterogeneous payloads. Only an [`Entry`] with the default `Vec<u8>`
/// payload yields a key; anything else is unkeyed and is refused by queues that maintain a
/// membership index.
pub struct AnyEntry(Box<dyn Any + Send + Sync>);

impl AnyEntry {
  /// Boxes `value` as a type-erased element.
  #[must_use]
  pub fn new<T>(value: T) -> Self
  where
    T: Any + Send + Sync, {
    Self(Box::new(value))
  }

  /// Returns a reference to the payload if it is a `T`.
  #[must_use]
  pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
    self.0.downcast_ref()
  }

  /// Recovers the payload if it is a `T`, handing the element back otherwise.
  ///
  /// # Errors
  ///
  /// Returns `self` unchanged when the payload is not a `T`.
  pub fn downcast<T: Any>(self) -> Result<T, Self> {
    match self.0.downcast::<T>() {
      | Ok(value) => Ok(*value),
      | Err(other) => Err(Self(other)),
    }
  }
}

impl From<Entry> for AnyEntry {
  fn from(entry: Entry) -> Self {
    Self::new(entry)
  }
}

impl Keyed for AnyEntry {
  type Key = String;

  fn queue_key(&self) -> Option<&Self::Key> {
    self.downcast_ref::<Entry>().and_then(Keyed::queue_key)
  }
}

impl fmt::Debug for AnyEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.downcast_ref::<Entry>() {
      | Some(entry) => f.debug_tuple("AnyEntry").field(entry).finish(),
      | None => f.write_str("AnyEntry(..)"),
    }
  }
}
