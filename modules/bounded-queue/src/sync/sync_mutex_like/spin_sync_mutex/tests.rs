use alloc::vec::Vec;

use super::SpinSyncMutex;
use crate::{
  collections::queue::{BoundedQueueState, Entry, QueueConfig},
  sync::sync_mutex_like::SyncMutexLike,
};

#[test]
fn lock_guards_exclusive_access() {
  let mutex = SpinSyncMutex::new(1_u32);
  {
    let mut guard = mutex.lock();
    assert!(mutex.is_locked());
    *guard += 1;
  }
  assert!(!mutex.is_locked());
  assert_eq!(*mutex.lock(), 2);
}

#[test]
fn with_lock_releases_after_closure() {
  let mutex = <SpinSyncMutex<u32> as SyncMutexLike<u32>>::new(10);
  let seen = mutex.with_lock(|value| {
    *value *= 3;
    *value
  });
  assert_eq!(seen, 30);
  assert!(!mutex.is_locked());
}

#[test]
fn into_inner_returns_latest_value() {
  let mutex = SpinSyncMutex::new(5_u8);
  *mutex.lock() = 9;
  assert_eq!(<SpinSyncMutex<u8> as SyncMutexLike<u8>>::into_inner(mutex), 9);
}

fn bump_through_guard<M: SyncMutexLike<u32>>(mutex: &M) -> u32 {
  let mut guard: M::Guard<'_> = mutex.lock();
  *guard += 1;
  *guard
}

#[test]
fn guard_type_is_reachable_through_the_trait() {
  let mutex = SpinSyncMutex::new(41_u32);
  assert_eq!(bump_through_guard(&mutex), 42);
  assert!(!mutex.is_locked());
}

#[test]
fn queue_state_lock_is_released_after_each_operation() {
  let config = QueueConfig::new(1).with_membership_index(true);
  let mutex = SpinSyncMutex::new(BoundedQueueState::<Entry>::new(config));
  assert!(mutex.with_lock(|state| state.enqueue(Entry::new("a", Vec::new()))).is_ok());
  assert!(!mutex.is_locked());
  assert!(mutex.with_lock(|state| state.enqueue(Entry::new("b", Vec::new()))).is_err());
  assert!(!mutex.is_locked());
  assert_eq!(mutex.with_lock(|state| state.has("a")).ok(), Some(true));
}
