use alloc::sync::Arc;
use core::{borrow::Borrow, hash::Hash, marker::PhantomData};

use super::{BoundedQueueState, Keyed, QueueConfig, QueueError, QueueEvent, QueueObserver};
use crate::sync::{SpinSyncMutex, SyncMutexLike};


/// Fixed-capacity FIFO queue shared between producers and consumers.
///
/// Every operation takes the lock `M` for its whole duration, so each call is atomic with respect
/// to every other call. Nothing ever waits for space or data: a full queue refuses with
/// [`QueueError::Overflow`] and an empty one answers `None`.
pub struct BoundedQueue<E, M = SpinSyncMutex<BoundedQueueState<E>>>
where
  E: Keyed,
  M: SyncMutexLike<BoundedQueueState<E>>, {
  state:              M,
  capacity:           usize,
  membership_enabled: bool,
  observer:           Option<Arc<dyn QueueObserver>>,
  _pd:                PhantomData<E>,
}

impl<E: Keyed> BoundedQueue<E> {
  /// Creates a spinlock-protected queue.
  ///
  /// A `capacity` of zero selects [`DEFAULT_CAPACITY`](super::DEFAULT_CAPACITY).
  #[must_use]
  pub fn new(capacity: usize, use_membership_index: bool) -> Self {
    Self::with_config(QueueConfig::new(capacity).with_membership_index(use_membership_index))
  }

  /// Creates a spinlock-protected queue from a configuration.
  #[must_use]
  pub fn from_config(config: QueueConfig) -> Self {
    Self::with_config(config)
  }
}

impl<E, M> BoundedQueue<E, M>
where
  E: Keyed,
  M: SyncMutexLike<BoundedQueueState<E>>,
{
  /// Creates a queue guarded by the lock type `M`.
  #[must_use]
  pub fn with_config(config: QueueConfig) -> Self {
    Self {
      state:              M::new(BoundedQueueState::new(config)),
      capacity:           config.capacity(),
      membership_enabled: config.membership_index(),
      observer:           None,
      _pd:                PhantomData,
    }
  }

  /// Attaches an observer notified after every state change and every refused enqueue.
  #[must_use]
  pub fn with_observer(mut self, observer: Arc<dyn QueueObserver>) -> Self {
    self.observer = Some(observer);
    self
  }

  /// Appends `item` at the tail.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Overflow`] when the queue is full and [`QueueError::InvalidEntryType`]
  /// when the membership index is enabled and `item` carries no key. Both hand the element back
  /// and leave the queue unchanged.
  pub fn enqueue(&self, item: E) -> Result<(), QueueError<E>> {
    let result = self.state.with_lock(|state| state.enqueue(item).map(|()| state.len()));
    match &result {
      | Ok(len) => self.notify(QueueEvent::Enqueued { len: *len }),
      | Err(QueueError::Overflow(_)) => self.notify(QueueEvent::Overflow { capacity: self.capacity }),
      | Err(QueueError::InvalidEntryType(_)) => self.notify(QueueEvent::InvalidEntryType),
      | Err(QueueError::MembershipDisabled) => {},
    }
    result.map(|_| ())
  }

  /// Removes and returns the element at the head, or `None` when the queue is empty.
  pub fn dequeue(&self) -> Option<E> {
    let (item, len) = self.state.with_lock(|state| {
      let item = state.dequeue();
      (item, state.len())
    });
    if item.is_some() {
      self.notify(QueueEvent::Dequeued { len });
    }
    item
  }

  /// Indicates whether an element carrying `key` is currently queued.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::MembershipDisabled`] when the queue was built without a membership
  /// index.
  pub fn has<Q>(&self, key: &Q) -> Result<bool, QueueError<E>>
  where
    E::Key: Borrow<Q>,
    Q: Hash + Eq + ?Sized, {
    self.state.with_lock(|state| state.has(key))
  }

  /// Indicates whether the queue holds no element.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.state.with_lock(|state| state.is_empty())
  }

  /// Indicates whether every slot is occupied.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.state.with_lock(|state| state.is_full())
  }

  /// Returns the number of queued elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.state.with_lock(|state| state.len())
  }

  /// Returns the fixed capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Indicates whether the queue maintains a membership index.
  #[must_use]
  pub const fn membership_enabled(&self) -> bool {
    self.membership_enabled
  }

  /// Consumes the queue and returns its unsynchronised state.
  #[must_use]
  pub fn into_state(self) -> BoundedQueueState<E> {
    self.state.into_inner()
  }

  fn notify(&self, event: QueueEvent) {
    if let Some(observer) = &self.observer {
      observer.on_event(&event);
    }
  }
}
