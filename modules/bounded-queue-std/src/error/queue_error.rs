//! Queue error kinds.

use core::fmt;

/// Reasons a queue operation or construction can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueueError {
  /// The requested capacity is zero, negative, or does not fit a `usize`.
  InvalidCapacity,
  /// A blocking call was abandoned because its [`Interrupter`](crate::Interrupter) was raised.
  Interrupted,
  /// The queue holds `capacity` elements and the call would have to block.
  Full,
  /// The queue holds no elements and the call would have to block.
  Empty,
}

impl fmt::Display for QueueError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::InvalidCapacity => f.write_str("queue capacity must be a positive integer"),
      | Self::Interrupted => f.write_str("blocking queue operation interrupted"),
      | Self::Full => f.write_str("queue is full"),
      | Self::Empty => f.write_str("queue is empty"),
    }
  }
}

impl std::error::Error for QueueError {}
