use alloc::{string::String, vec};

use super::Entry;
use crate::collections::queue::Keyed;

#[test]
fn entry_exposes_key_and_payload() {
  let entry = Entry::new("key1", vec![1_u8, 2, 3]);
  assert_eq!(entry.key(), "key1");
  assert_eq!(entry.value(), &vec![1_u8, 2, 3]);
  assert_eq!(entry.queue_key().map(String::as_str), Some("key1"));
}

#[test]
fn into_parts_returns_owned_fields() {
  let (key, value) = Entry::new(String::from("k"), "payload").into_parts();
  assert_eq!(key, "k");
  assert_eq!(value, "payload");
}
