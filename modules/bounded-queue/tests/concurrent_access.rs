use std::{
  collections::HashMap,
  sync::{Arc, Barrier},
  thread,
};

use bounded_queue_rs::{BoundedQueue, Entry, QueueError, StdBoundedQueue, SyncMutexLike};

const PRODUCERS: usize = 5;
const PER_PRODUCER: usize = 200;

fn producer_entry(producer: usize, seq: usize) -> Entry<usize> {
  Entry::new(format!("p{producer}-{seq}"), producer * PER_PRODUCER + seq)
}

fn spawn_producers<M>(queue: &Arc<BoundedQueue<Entry<usize>, M>>) -> Vec<thread::JoinHandle<()>>
where
  M: SyncMutexLike<bounded_queue_rs::BoundedQueueState<Entry<usize>>> + Send + Sync + 'static, {
  let barrier = Arc::new(Barrier::new(PRODUCERS));
  (0..PRODUCERS)
    .map(|producer| {
      let queue = Arc::clone(queue);
      let barrier = Arc::clone(&barrier);
      thread::spawn(move || {
        barrier.wait();
        for seq in 0..PER_PRODUCER {
          queue.enqueue(producer_entry(producer, seq)).expect("capacity covers every producer");
        }
      })
    })
    .collect()
}

fn assert_per_producer_order(drained: &[Entry<usize>]) {
  let mut next_seq: HashMap<usize, usize> = HashMap::new();
  for entry in drained {
    let producer = entry.value() / PER_PRODUCER;
    let seq = entry.value() % PER_PRODUCER;
    let expected = next_seq.entry(producer).or_insert(0);
    assert_eq!(seq, *expected, "producer {producer} out of order");
    *expected += 1;
  }
  assert_eq!(next_seq.len(), PRODUCERS);
  assert!(next_seq.values().all(|count| *count == PER_PRODUCER));
}

#[test]
fn concurrent_enqueue_loses_nothing() {
  let queue = Arc::new(BoundedQueue::new(PRODUCERS * PER_PRODUCER, false));
  for handle in spawn_producers(&queue) {
    handle.join().expect("producer panicked");
  }

  assert_eq!(queue.len(), PRODUCERS * PER_PRODUCER);
  assert!(queue.is_full());

  let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
  assert_eq!(drained.len(), PRODUCERS * PER_PRODUCER);
  assert_per_producer_order(&drained);
}

#[test]
fn concurrent_enqueue_with_std_mutex_and_membership() {
  let config = bounded_queue_rs::QueueConfig::new(PRODUCERS * PER_PRODUCER).with_membership_index(true);
  let queue: Arc<StdBoundedQueue<Entry<usize>>> = Arc::new(StdBoundedQueue::with_config(config));
  for handle in spawn_producers(&queue) {
    handle.join().expect("producer panicked");
  }

  assert_eq!(queue.len(), PRODUCERS * PER_PRODUCER);
  for producer in 0..PRODUCERS {
    for seq in 0..PER_PRODUCER {
      assert_eq!(queue.has(format!("p{producer}-{seq}").as_str()), Ok(true));
    }
  }

  let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
  assert_per_producer_order(&drained);
  assert_eq!(queue.has("p0-0"), Ok(false));
}

#[test]
fn producers_and_consumers_balance_out() {
  let queue = Arc::new(BoundedQueue::new(8, true));
  let total = PRODUCERS * PER_PRODUCER;

  let producers: Vec<_> = (0..PRODUCERS)
    .map(|producer| {
      let queue = Arc::clone(&queue);
      thread::spawn(move || {
        let mut seq = 0;
        while seq < PER_PRODUCER {
          match queue.enqueue(producer_entry(producer, seq)) {
            | Ok(()) => seq += 1,
            | Err(QueueError::Overflow(_)) => thread::yield_now(),
            | Err(other) => panic!("unexpected enqueue failure: {other}"),
          }
        }
      })
    })
    .collect();

  let consumer = {
    let queue = Arc::clone(&queue);
    thread::spawn(move || {
      let mut received = Vec::with_capacity(total);
      while received.len() < total {
        match queue.dequeue() {
          | Some(entry) => received.push(entry),
          | None => thread::yield_now(),
        }
      }
      received
    })
  };

  for handle in producers {
    handle.join().expect("producer panicked");
  }
  let received = consumer.join().expect("consumer panicked");

  assert_eq!(received.len(), total);
  assert_per_producer_order(&received);
  assert!(queue.is_empty());
  assert_eq!(queue.has("p0-0"), Ok(false));
}
