use bounded_queue_rs::{BoundedQueue, Entry, QueueError};

fn main() -> Result<(), QueueError<Entry>> {
  // without membership index
  let queue = BoundedQueue::new(100, false);
  let entry = Entry::new("key", b"value".to_vec());
  queue.enqueue(entry.clone())?;

  let dequeued = queue.dequeue().expect("an entry was just enqueued");
  assert_eq!(dequeued.key(), entry.key());
  println!("dequeue: {dequeued:?}");

  // with membership index
  let queue = BoundedQueue::new(100, true);
  let entry = Entry::new("key2", b"value2".to_vec());
  queue.enqueue(entry.clone())?;

  if !queue.has(entry.key())? {
    panic!("expected {} to be queued", entry.key());
  }

  let dequeued = queue.dequeue().expect("an entry was just enqueued");
  assert_eq!(dequeued.key(), entry.key());
  println!("dequeue: {dequeued:?}");
  println!("still queued: {}", queue.has(entry.key())?);

  Ok(())
}
