extern crate std;

use core::ops::{Deref, DerefMut};
use std::sync::MutexGuard;

/// Access to the state of a [`StdBoundedQueue`](super::StdBoundedQueue) while one operation runs.
///
/// Obtained from [`StdSyncMutex::lock`](super::StdSyncMutex::lock); the queue is unlocked again
/// when the guard drops, including on the error paths of `enqueue`.
pub struct StdSyncMutexGuard<'a, T> {
  guard: MutexGuard<'a, T>,
}

impl<'a, T> StdSyncMutexGuard<'a, T> {
  pub(crate) const fn new(guard: MutexGuard<'a, T>) -> Self {
    Self { guard }
  }
}

impl<T> Deref for StdSyncMutexGuard<'_, T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.guard
  }
}

impl<T> DerefMut for StdSyncMutexGuard<'_, T> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.guard
  }
}
