use std::sync::Arc;

use portable_atomic::{AtomicBool, AtomicU64, Ordering};
use spin::Mutex;

use super::WakeTarget;


type Registered = (u64, Arc<dyn WakeTarget>);

/// Cancellation handle for blocking queue calls.
///
/// Pass it to [`BoundedQueue::enqueue_interruptibly`](crate::BoundedQueue::enqueue_interruptibly)
/// or [`BoundedQueue::dequeue_interruptibly`](crate::BoundedQueue::dequeue_interruptibly) and call
/// [`interrupt`](Self::interrupt) from any thread to abandon the wait. Clones share one flag.
///
/// The flag is consulted only when a call would otherwise suspend. It stays raised until
/// [`clear`](Self::clear) is called, so every wait using the handle is abandoned, including waits
/// that start after the interrupt.
#[derive(Clone)]
pub struct Interrupter {
  inner: Arc<Inner>,
}

struct Inner {
  raised:  AtomicBool,
  next_id: AtomicU64,
  targets: Mutex<Vec<Registered>>,
}

impl Interrupter {
  /// Creates a handle in the lowered state.
  #[must_use]
  pub fn new() -> Self {
    let inner = Inner { raised: AtomicBool::new(false), next_id: AtomicU64::new(0), targets: Mutex::new(Vec::new()) };
    Self { inner: Arc::new(inner) }
  }

  /// Raises the flag and wakes every wait currently registered with this handle.
  pub fn interrupt(&self) {
    self.inner.raised.store(true, Ordering::SeqCst);
    let targets: Vec<Arc<dyn WakeTarget>> =
      self.inner.targets.lock().iter().map(|(_, target)| Arc::clone(target)).collect();
    for target in targets {
      target.wake_all();
    }
  }

  /// Returns `true` while the flag is raised.
  #[must_use]
  pub fn is_interrupted(&self) -> bool {
    self.inner.raised.load(Ordering::SeqCst)
  }

  /// Lowers the flag, returning whether it was raised.
  #[must_use]
  pub fn clear(&self) -> bool {
    self.inner.raised.swap(false, Ordering::SeqCst)
  }

  /// Returns the number of waits currently parked on this handle.
  #[must_use]
  pub fn registered_waits(&self) -> usize {
    self.inner.targets.lock().len()
  }

  pub(crate) fn register(&self, target: Arc<dyn WakeTarget>) -> InterruptRegistration<'_> {
    let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
    self.inner.targets.lock().push((id, target));
    InterruptRegistration { interrupter: self, id }
  }
}

impl Default for Interrupter {
  fn default() -> Self {
    Self::new()
  }
}

impl core::fmt::Debug for Interrupter {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Interrupter").field("interrupted", &self.is_interrupted()).finish()
  }
}

/// Keeps a wake target registered for as long as the wait it belongs to is in progress.
pub(crate) struct InterruptRegistration<'a> {
  interrupter: &'a Interrupter,
  id:          u64,
}

impl Drop for InterruptRegistration<'_> {
  fn drop(&mut self) {
    let mut targets = self.interrupter.inner.targets.lock();
    if let Some(index) = targets.iter().position(|(id, _)| *id == self.id) {
      targets.swap_remove(index);
    }
  }
}
