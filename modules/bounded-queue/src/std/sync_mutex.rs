extern crate std;

use std::sync::Mutex;

use super::sync_mutex_guard::StdSyncMutexGuard;
use crate::sync::SyncMutexLike;


/// Mutex wrapper backed by [`std::sync::Mutex`].
///
/// A poisoned lock is recovered rather than reported: queue state is only mutated after every
/// check has passed, so a panic on another thread cannot leave it half-updated.
pub struct StdSyncMutex<T>(Mutex<T>);

impl<T> StdSyncMutex<T> {
  /// Creates a new mutex-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(Mutex::new(value))
  }

  /// Consumes the mutex and returns the inner value.
  #[must_use]
  pub fn into_inner(self) -> T {
    match self.0.into_inner() {
      | Ok(value) => value,
      | Err(poisoned) => poisoned.into_inner(),
    }
  }

  /// Locks the mutex and returns a guard to the protected value.
  #[must_use]
  pub fn lock(&self) -> StdSyncMutexGuard<'_, T> {
    match self.0.lock() {
      | Ok(guard) => StdSyncMutexGuard::new(guard),
      | Err(poisoned) => StdSyncMutexGuard::new(poisoned.into_inner()),
    }
  }
}

impl<T> SyncMutexLike<T> for StdSyncMutex<T> {
  type Guard<'a>
    = StdSyncMutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    StdSyncMutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    StdSyncMutex::lock(self)
  }
}
