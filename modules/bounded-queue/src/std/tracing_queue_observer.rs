//! `tracing`-backed queue observer for standard environments.


use tracing::{Level, event};

use crate::collections::queue::{QueueEvent, QueueObserver};

/// Queue observer that forwards [`QueueEvent`]s to the `tracing` crate.
///
/// Stores and removals are emitted at `TRACE`, refused enqueues because of a full queue at
/// `DEBUG` and refused unkeyed elements at `WARN`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingQueueObserver;

impl TracingQueueObserver {
  /// Target name used in emitted events.
  pub const DEFAULT_TARGET: &'static str = "bounded_queue::events";

  /// Creates the observer.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl QueueObserver for TracingQueueObserver {
  fn on_event(&self, queue_event: &QueueEvent) {
    let kind: &'static str = queue_event.into();
    match *queue_event {
      | QueueEvent::Enqueued { len } | QueueEvent::Dequeued { len } => {
        event!(target: TracingQueueObserver::DEFAULT_TARGET, Level::TRACE, kind = kind, len = len as u64, "{}", kind);
      },
      | QueueEvent::Overflow { capacity } => {
        event!(
          target: TracingQueueObserver::DEFAULT_TARGET,
          Level::DEBUG,
          kind = kind,
          capacity = capacity as u64,
          "queue overflow"
        );
      },
      | QueueEvent::InvalidEntryType => {
        event!(target: TracingQueueObserver::DEFAULT_TARGET, Level::WARN, kind = kind, "element carries no key");
      },
    }
  }
}
