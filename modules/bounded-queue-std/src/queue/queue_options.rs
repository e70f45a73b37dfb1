//! Construction options for [`BoundedQueue`](crate::BoundedQueue).

use super::{WakePolicy, DEFAULT_WAKE_POLICY};
use crate::QueueError;


/// Capacity and wake policy for a [`BoundedQueue`](crate::BoundedQueue).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueOptions {
  /// Maximum number of elements held at once. Must be non-zero.
  pub capacity:    usize,
  /// Notification strategy applied after each mutation.
  pub wake_policy: WakePolicy,
}

impl QueueOptions {
  /// Creates options with the given capacity and the default wake policy.
  #[must_use]
  pub const fn with_capacity(capacity: usize) -> Self {
    Self { capacity, wake_policy: DEFAULT_WAKE_POLICY }
  }

  /// Replaces the wake policy.
  #[must_use]
  pub const fn with_wake_policy(mut self, wake_policy: WakePolicy) -> Self {
    self.wake_policy = wake_policy;
    self
  }

  /// Checks the options, returning them unchanged when they describe a usable queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when `capacity` is zero.
  pub const fn validate(self) -> Result<Self, QueueError> {
    if self.capacity == 0 {
      return Err(QueueError::InvalidCapacity);
    }
    Ok(self)
  }
}
