//! `std::sync::Mutex` paired with the condition variables a bounded queue waits on.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::queue::WakePolicy;


/// State transition a waiter is interested in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Signal {
  /// A slot was freed.
  NotFull,
  /// An element was appended.
  NotEmpty,
}

/// Mutex plus condition variables, notified according to a [`WakePolicy`].
///
/// Under [`WakePolicy::Broadcast`] both signals share `primary` and every notification wakes all
/// waiters. Under [`WakePolicy::Dedicated`] `NotFull` waits on `primary`, `NotEmpty` waits on
/// `secondary`, and a notification wakes a single waiter of the matching kind.
pub(crate) struct StdMonitor<S> {
  state:     Mutex<S>,
  primary:   Condvar,
  secondary: Condvar,
  policy:    WakePolicy,
}

impl<S> StdMonitor<S> {
  pub(crate) const fn new(state: S, policy: WakePolicy) -> Self {
    Self { state: Mutex::new(state), primary: Condvar::new(), secondary: Condvar::new(), policy }
  }

  pub(crate) const fn policy(&self) -> WakePolicy {
    self.policy
  }

  /// Locks the state. A poisoned lock is recovered since guarded sections never run foreign code.
  pub(crate) fn lock(&self) -> MutexGuard<'_, S> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Releases `guard`, suspends until `signal` is notified (or spuriously), then reacquires.
  pub(crate) fn wait<'a>(&self, guard: MutexGuard<'a, S>, signal: Signal) -> MutexGuard<'a, S> {
    self.condvar(signal).wait(guard).unwrap_or_else(PoisonError::into_inner)
  }

  /// Announces `signal` to waiters.
  pub(crate) fn notify(&self, signal: Signal) {
    match self.policy {
      | WakePolicy::Broadcast => self.primary.notify_all(),
      | WakePolicy::Dedicated => self.condvar(signal).notify_one(),
    }
  }

  /// Wakes every waiter regardless of what it waits for.
  pub(crate) fn notify_everyone(&self) {
    self.primary.notify_all();
    self.secondary.notify_all();
  }

  const fn condvar(&self, signal: Signal) -> &Condvar {
    match (self.policy, signal) {
      | (WakePolicy::Broadcast, _) | (WakePolicy::Dedicated, Signal::NotFull) => &self.primary,
      | (WakePolicy::Dedicated, Signal::NotEmpty) => &self.secondary,
    }
  }
}
