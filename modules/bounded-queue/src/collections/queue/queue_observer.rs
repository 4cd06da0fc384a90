use super::QueueEvent;

/// Receives [`QueueEvent`]s from a queue it is attached to.
///
/// Callbacks run on the calling thread after the queue lock has been released, so an observer
/// may query the queue it observes.
pub trait QueueObserver: Send + Sync {
  /// Handles one event.
  fn on_event(&self, event: &QueueEvent);
}
