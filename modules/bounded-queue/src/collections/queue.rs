//! Bounded FIFO queue built on a fixed ring of slots.

mod any_entry;
mod bounded_queue;
mod bounded_queue_state;
mod entry;
mod keyed;
mod membership_index;
mod queue_config;
mod queue_error;
mod queue_event;
mod queue_observer;
mod ring_slots;

pub use any_entry::AnyEntry;
pub use bounded_queue::BoundedQueue;
pub use bounded_queue_state::BoundedQueueState;
pub use entry::Entry;
pub use keyed::Keyed;
pub use membership_index::MembershipIndex;
pub use queue_config::{DEFAULT_CAPACITY, QueueConfig};
pub use queue_error::QueueError;
pub use queue_event::QueueEvent;
pub use queue_observer::QueueObserver;
pub use ring_slots::RingSlots;
