//! Notification strategy used after each queue mutation.

/// Wake-up strategy applied whenever an element is appended or removed.
///
/// Both strategies give the same observable behaviour; they differ only in how many suspended
/// threads are woken to re-test their predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WakePolicy {
  /// One condition shared by producers and consumers. Every mutation wakes every waiter.
  #[default]
  Broadcast,
  /// Separate not-full and not-empty conditions. A mutation wakes one waiter of the kind that can
  /// now make progress.
  Dedicated,
}

/// Policy used when none is configured.
pub const DEFAULT_WAKE_POLICY: WakePolicy = WakePolicy::Broadcast;
