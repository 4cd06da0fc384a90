#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::unnecessary_struct_initialization)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::empty_enum)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::if_same_then_else)]
#![deny(clippy::cmp_null)]
#![no_std]

//! Fixed-capacity FIFO ring queue with an optional O(1) membership index.
//!
//! [`BoundedQueue`] keeps its elements in a preallocated ring of slots and rejects producers with
//! [`QueueError::Overflow`] once every slot is taken. When built with a membership index it also
//! answers "is this key currently queued" without scanning the ring, which makes it usable as a
//! dedup buffer for in-flight work items.
//!
//! ```
//! use bounded_queue_rs::{BoundedQueue, Entry};
//!
//! let queue = BoundedQueue::new(2, true);
//! queue.enqueue(Entry::new("key1", b"value1".to_vec())).unwrap();
//! assert_eq!(queue.has("key1"), Ok(true));
//!
//! let entry = queue.dequeue().unwrap();
//! assert_eq!(entry.key(), "key1");
//! assert_eq!(queue.has("key1"), Ok(false));
//! assert!(queue.dequeue().is_none());
//! ```

extern crate alloc;

/// Queue collections.
pub mod collections;
/// Std-only integrations: `std::sync::Mutex` backed locking and `tracing` output.
#[cfg(feature = "std")]
pub mod std;
/// Lock abstractions used to serialise queue access.
pub mod sync;

pub use collections::queue::{
  AnyEntry, BoundedQueue, BoundedQueueState, DEFAULT_CAPACITY, Entry, Keyed, MembershipIndex, QueueConfig, QueueError,
  QueueEvent, QueueObserver, RingSlots,
};
#[cfg(feature = "std")]
pub use self::std::{StdBoundedQueue, StdSyncMutex, StdSyncMutexGuard, TracingQueueObserver};
pub use sync::{SpinSyncMutex, SyncMutexLike};
