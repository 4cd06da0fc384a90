use core::{borrow::Borrow, hash::Hash};

use ahash::RandomState;
use hashbrown::HashMap;


/// Key index mirroring the keys resident in a queue.
///
/// Each distinct key maps to the number of queued elements carrying it, so a key enqueued twice
/// stays a member until its last copy is removed.
pub struct MembershipIndex<K> {
  residents: HashMap<K, usize, RandomState>,
}

impl<K> MembershipIndex<K>
where
  K: Hash + Eq,
{
  /// Creates an empty index sized for roughly `capacity_hint` distinct keys.
  #[must_use]
  pub fn with_capacity(capacity_hint: usize) -> Self {
    Self { residents: HashMap::with_capacity_and_hasher(capacity_hint, RandomState::new()) }
  }

  /// Records one more resident element carrying `key`.
  pub fn insert(&mut self, key: K) {
    *self.residents.entry(key).or_insert(0) += 1;
  }

  /// Forgets one resident element carrying `key`; the key leaves the index with its last copy.
  ///
  /// Returns `false` when the key was not resident.
  pub fn remove<Q>(&mut self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized, {
    let remaining = match self.residents.get_mut(key) {
      | Some(count) => {
        *count -= 1;
        *count
      },
      | None => return false,
    };
    if remaining == 0 {
      self.residents.remove(key);
    }
    true
  }

  /// Indicates whether at least one resident element carries `key`.
  #[must_use]
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized, {
    self.residents.contains_key(key)
  }

  /// Returns how many resident elements carry `key`.
  #[must_use]
  pub fn multiplicity<Q>(&self, key: &Q) -> usize
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized, {
    self.residents.get(key).copied().unwrap_or(0)
  }

  /// Returns the number of distinct resident keys.
  #[must_use]
  pub fn len(&self) -> usize {
    self.residents.len()
  }

  /// Indicates whether no key is resident.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.residents.is_empty()
  }
}
