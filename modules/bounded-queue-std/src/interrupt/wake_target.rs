/// Something an [`Interrupter`](super::Interrupter) can rouse when it is raised.
///
/// Implementations must acquire the lock their waiters check the interrupt flag under before
/// notifying, otherwise a waiter that tested the flag just before suspending misses the wake-up.
pub(crate) trait WakeTarget: Send + Sync {
  fn wake_all(&self);
}
