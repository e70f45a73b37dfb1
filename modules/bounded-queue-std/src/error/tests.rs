use std::error::Error;

use super::*;

#[test]
fn queue_error_messages_are_stable() {
  assert_eq!(QueueError::InvalidCapacity.to_string(), "queue capacity must be a positive integer");
  assert_eq!(QueueError::Interrupted.to_string(), "blocking queue operation interrupted");
  assert_eq!(QueueError::Full.to_string(), "queue is full");
  assert_eq!(QueueError::Empty.to_string(), "queue is empty");
}

#[test]
fn enqueue_error_hands_back_item() {
  let err = EnqueueError::new(QueueError::Full, String::from("payload"));
  assert_eq!(err.error(), QueueError::Full);
  assert_eq!(err.item(), "payload");
  assert!(!err.is_interrupted());

  let (kind, item) = err.into_parts();
  assert_eq!(kind, QueueError::Full);
  assert_eq!(item, "payload");
}

#[test]
fn enqueue_error_reports_source_and_converts() {
  struct Opaque;

  let err = EnqueueError::new(QueueError::Interrupted, Opaque);
  assert!(err.is_interrupted());
  assert_eq!(format!("{err:?}"), "EnqueueError { error: Interrupted, .. }");
  assert_eq!(err.to_string(), "element rejected: blocking queue operation interrupted");
  assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("blocking queue operation interrupted"));

  let kind: QueueError = err.into();
  assert_eq!(kind, QueueError::Interrupted);
}
