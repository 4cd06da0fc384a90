use core::ops::{Deref, DerefMut};

mod spin_sync_mutex;

pub use spin_sync_mutex::SpinSyncMutex;

/// Exclusive lock abstraction the queue serialises its state through.
///
/// Implementations must hand out at most one guard at a time; the queue relies on the guard to
/// make every operation atomic with respect to every other one.
pub trait SyncMutexLike<T> {
  /// Guard type returned by [`SyncMutexLike::lock`].
  type Guard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Creates a new mutex instance wrapping the provided value.
  fn new(value: T) -> Self;

  /// Consumes the mutex and returns the inner value.
  fn into_inner(self) -> T;

  /// Locks the mutex and returns a guard to the protected value.
  fn lock(&self) -> Self::Guard<'_>;

  /// Runs `f` with the lock held and releases it before returning.
  fn with_lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = self.lock();
    f(&mut *guard)
  }
}
