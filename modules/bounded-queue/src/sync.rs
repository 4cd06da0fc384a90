/// Synchronous mutex abstractions shared across runtimes.
pub mod sync_mutex_like;

pub use sync_mutex_like::{SpinSyncMutex, SyncMutexLike};
