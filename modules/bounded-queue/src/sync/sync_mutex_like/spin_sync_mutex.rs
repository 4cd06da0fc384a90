use crate::sync::sync_mutex_like::SyncMutexLike;

#[cfg(test)]
mod tests;

/// Default lock of [`BoundedQueue`](crate::BoundedQueue), backed by [`spin::Mutex`].
///
/// Every queue operation spins on this lock for the duration of one enqueue, dequeue or lookup,
/// which keeps the queue usable without `std`. With the `std` feature, `StdBoundedQueue` swaps
/// it for a `std::sync::Mutex`.
pub struct SpinSyncMutex<T>(spin::Mutex<T>);

impl<T> SpinSyncMutex<T> {
  /// Creates a new spinlock-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(spin::Mutex::new(value))
  }

  /// Consumes the wrapper and returns the underlying value.
  #[must_use]
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }

  /// Locks the mutex and returns a guard to the protected value.
  #[must_use]
  pub fn lock(&self) -> spin::MutexGuard<'_, T> {
    self.0.lock()
  }

  /// Indicates whether some guard currently holds the lock.
  #[must_use]
  pub fn is_locked(&self) -> bool {
    self.0.is_locked()
  }
}

impl<T> SyncMutexLike<T> for SpinSyncMutex<T> {
  type Guard<'a>
    = spin::MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    SpinSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    SpinSyncMutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    SpinSyncMutex::lock(self)
  }
}
