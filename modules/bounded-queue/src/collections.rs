/// FIFO ring queue, its membership index and the values they exchange with callers.
pub mod queue;
