mod sync_mutex;
mod sync_mutex_guard;
mod tracing_queue_observer;

pub use sync_mutex::StdSyncMutex;
pub use sync_mutex_guard::StdSyncMutexGuard;
pub use tracing_queue_observer::TracingQueueObserver;

use crate::collections::queue::{BoundedQueue, BoundedQueueState};

/// Bounded queue guarded by `std::sync::Mutex` instead of a spinlock.
pub type StdBoundedQueue<E> = BoundedQueue<E, StdSyncMutex<BoundedQueueState<E>>>;
