use core::{borrow::Borrow, hash::Hash};

use super::{Keyed, MembershipIndex, QueueConfig, QueueError, RingSlots};


/// Unsynchronised queue state: the slot ring plus the optional membership index.
///
/// [`BoundedQueue`](super::BoundedQueue) keeps one of these behind its lock. Every method leaves
/// the index mirroring exactly the keys resident in the ring.
pub struct BoundedQueueState<E: Keyed> {
  slots:      RingSlots<E>,
  membership: Option<MembershipIndex<E::Key>>,
}

impl<E: Keyed> BoundedQueueState<E> {
  /// Allocates the ring, and the index when the configuration asks for one.
  #[must_use]
  pub fn new(config: QueueConfig) -> Self {
    let capacity = config.capacity();
    let membership = config.membership_index().then(|| MembershipIndex::with_capacity(capacity));
    Self { slots: RingSlots::with_capacity(capacity), membership }
  }

  /// Appends `item` at the tail.
  ///
  /// Validation happens before anything is written: a rejected element leaves the ring and the
  /// index untouched.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Overflow`] when the ring is full and [`QueueError::InvalidEntryType`]
  /// when the membership index is enabled and `item` carries no key.
  pub fn enqueue(&mut self, item: E) -> Result<(), QueueError<E>> {
    if self.slots.is_full() {
      return Err(QueueError::Overflow(item));
    }
    let key = match self.membership {
      | Some(_) => {
        let Some(key) = item.queue_key().cloned() else {
          return Err(QueueError::InvalidEntryType(item));
        };
        Some(key)
      },
      | None => None,
    };
    self.slots.push(item).map_err(QueueError::Overflow)?;
    if let (Some(index), Some(key)) = (self.membership.as_mut(), key) {
      index.insert(key);
    }
    Ok(())
  }

  /// Removes the element at the head, or returns `None` when the queue is empty.
  pub fn dequeue(&mut self) -> Option<E> {
    let item = self.slots.pop()?;
    if let (Some(index), Some(key)) = (self.membership.as_mut(), item.queue_key()) {
      index.remove(key);
    }
    Some(item)
  }

  /// Indicates whether an element carrying `key` is resident.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::MembershipDisabled`] when the state was built without an index.
  pub fn has<Q>(&self, key: &Q) -> Result<bool, QueueError<E>>
  where
    E::Key: Borrow<Q>,
    Q: Hash + Eq + ?Sized, {
    match &self.membership {
      | Some(index) => Ok(index.contains(key)),
      | None => Err(QueueError::MembershipDisabled),
    }
  }

  /// Returns the number of resident elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.slots.len()
  }

  /// Indicates whether no element is resident.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.slots.is_empty()
  }

  /// Indicates whether every slot is occupied.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.slots.is_full()
  }

  /// Returns the fixed capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.slots.capacity()
  }

  /// Returns the membership index, if enabled.
  #[must_use]
  pub const fn membership(&self) -> Option<&MembershipIndex<E::Key>> {
    self.membership.as_ref()
  }

  /// Returns the slot ring.
  #[must_use]
  pub const fn slots(&self) -> &RingSlots<E> {
    &self.slots
  }
}
