//! Fixed-capacity blocking FIFO queue.

use std::{
  collections::VecDeque,
  fmt,
  sync::{Arc, MutexGuard},
};

use tracing::{debug, trace};

use super::{QueueOptions, WakePolicy};
use crate::{
  error::{EnqueueError, QueueError},
  interrupt::{InterruptRegistration, Interrupter, WakeTarget},
  sync::{Signal, StdMonitor},
};


/// Upper bound on the slots reserved up front; larger queues grow their buffer on demand.
const PREALLOCATED_SLOTS: usize = 1024;

type Items<'a, T> = MutexGuard<'a, VecDeque<T>>;

/// Fixed-capacity FIFO queue shared by producer and consumer threads.
///
/// [`enqueue`](Self::enqueue) suspends while the queue holds `capacity` elements and
/// [`dequeue`](Self::dequeue) suspends while it is empty. Both release the queue lock for the
/// duration of the wait and re-test their predicate on every wake-up. Clones are handles to the
/// same queue.
///
/// ```
/// use std::thread;
///
/// use bounded_queue_std_rs::BoundedQueue;
///
/// let queue = BoundedQueue::new(1)?;
/// let producer = queue.clone();
/// let handle = thread::spawn(move || {
///   for value in [1, 2, 3] {
///     producer.enqueue(value);
///   }
/// });
///
/// let received: Vec<i32> = (0..3).map(|_| queue.dequeue()).collect();
/// assert_eq!(received, [1, 2, 3]);
/// handle.join().unwrap();
/// # Ok::<(), bounded_queue_std_rs::QueueError>(())
/// ```
pub struct BoundedQueue<T> {
  shared: Arc<Shared<T>>,
}

struct Shared<T> {
  capacity: usize,
  monitor:  StdMonitor<VecDeque<T>>,
}

impl<T: Send> WakeTarget for Shared<T> {
  fn wake_all(&self) {
    let _items = self.monitor.lock();
    self.monitor.notify_everyone();
  }
}

impl<T> BoundedQueue<T> {
  /// Creates an empty queue holding at most `capacity` elements, using the default wake policy.
  ///
  /// Any integer type is accepted so that signed inputs are validated instead of wrapped.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when `capacity` is zero or negative, or does not fit a
  /// `usize`.
  pub fn new<C>(capacity: C) -> Result<Self, QueueError>
  where
    C: TryInto<usize>, {
    let capacity = capacity.try_into().map_err(|_| QueueError::InvalidCapacity)?;
    Self::with_options(QueueOptions::with_capacity(capacity))
  }

  /// Creates an empty queue from explicit options.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when `options.capacity` is zero.
  pub fn with_options(options: QueueOptions) -> Result<Self, QueueError> {
    let QueueOptions { capacity, wake_policy } = options.validate()?;
    debug!(capacity, ?wake_policy, "bounded queue created");
    let items = VecDeque::with_capacity(capacity.min(PREALLOCATED_SLOTS));
    Ok(Self { shared: Arc::new(Shared { capacity, monitor: StdMonitor::new(items, wake_policy) }) })
  }

  /// Appends `item`, suspending the calling thread while the queue is full.
  pub fn enqueue(&self, mut item: T) {
    let mut items = self.shared.monitor.lock();
    loop {
      match self.push_back(&mut items, item) {
        | Ok(()) => return,
        | Err(rejected) => item = rejected,
      }
      items = self.suspend(items, Signal::NotFull);
    }
  }

  /// Removes and returns the oldest element, suspending the calling thread while the queue is empty.
  #[must_use = "dequeued elements are removed from the queue"]
  pub fn dequeue(&self) -> T {
    let mut items = self.shared.monitor.lock();
    loop {
      if let Some(item) = self.pop_front(&mut items) {
        return item;
      }
      items = self.suspend(items, Signal::NotEmpty);
    }
  }

  /// Appends `item` if a slot is free, without blocking.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] together with `item` when the queue is full.
  pub fn try_enqueue(&self, item: T) -> Result<(), EnqueueError<T>> {
    let mut items = self.shared.monitor.lock();
    self.push_back(&mut items, item).map_err(|item| EnqueueError::new(QueueError::Full, item))
  }

  /// Removes and returns the oldest element if there is one, without blocking.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn try_dequeue(&self) -> Result<T, QueueError> {
    let mut items = self.shared.monitor.lock();
    self.pop_front(&mut items).ok_or(QueueError::Empty)
  }

  /// Returns the number of elements currently held.
  #[must_use]
  pub fn len(&self) -> usize {
    self.shared.monitor.lock().len()
  }

  /// Returns `true` when the queue holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.shared.monitor.lock().is_empty()
  }

  /// Returns `true` when the queue holds `capacity` elements.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.shared.monitor.lock().len() >= self.shared.capacity
  }

  /// Returns the maximum number of elements held at once.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.shared.capacity
  }

  /// Returns how many elements can be appended before producers start blocking.
  #[must_use]
  pub fn remaining_capacity(&self) -> usize {
    self.shared.capacity - self.len()
  }

  /// Returns the wake policy the queue was built with.
  #[must_use]
  pub fn wake_policy(&self) -> WakePolicy {
    self.shared.monitor.policy()
  }

  fn push_back(&self, items: &mut VecDeque<T>, item: T) -> Result<(), T> {
    if items.len() >= self.shared.capacity {
      return Err(item);
    }
    items.push_back(item);
    self.shared.monitor.notify(Signal::NotEmpty);
    Ok(())
  }

  fn pop_front(&self, items: &mut VecDeque<T>) -> Option<T> {
    let item = items.pop_front()?;
    self.shared.monitor.notify(Signal::NotFull);
    Some(item)
  }

  fn suspend<'a>(&'a self, items: Items<'a, T>, signal: Signal) -> Items<'a, T> {
    match signal {
      | Signal::NotFull => trace!(capacity = self.shared.capacity, "queue full; producer suspended"),
      | Signal::NotEmpty => trace!(capacity = self.shared.capacity, "queue empty; consumer suspended"),
    }
    self.shared.monitor.wait(items, signal)
  }
}

impl<T: Send + 'static> BoundedQueue<T> {
  /// Appends `item` like [`enqueue`](Self::enqueue), abandoning the wait once `interrupter` is
  /// raised.
  ///
  /// The interrupter is only consulted while the queue is full. A free slot always wins, even when
  /// the interrupter is already raised.
  ///
  /// Only available for `T: Send + 'static`: while suspended, the queue registers itself with the
  /// interrupter as an `Arc<dyn WakeTarget>`, and the interrupter may outlive the call. Queues of
  /// borrowed elements, such as ones built inside [`std::thread::scope`] around non-`'static` data,
  /// can only use the uninterruptible forms.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Interrupted`] together with `item` when the wait was abandoned. The
  /// queue is left unchanged and the interrupter stays raised.
  pub fn enqueue_interruptibly(&self, mut item: T, interrupter: &Interrupter) -> Result<(), EnqueueError<T>> {
    let mut items = self.shared.monitor.lock();
    match self.push_back(&mut items, item) {
      | Ok(()) => return Ok(()),
      | Err(rejected) => item = rejected,
    }

    let _registration = self.register(interrupter);
    loop {
      if interrupter.is_interrupted() {
        trace!(capacity = self.shared.capacity, "suspended producer interrupted");
        return Err(EnqueueError::new(QueueError::Interrupted, item));
      }
      items = self.suspend(items, Signal::NotFull);
      match self.push_back(&mut items, item) {
        | Ok(()) => return Ok(()),
        | Err(rejected) => item = rejected,
      }
    }
  }

  /// Removes the oldest element like [`dequeue`](Self::dequeue), abandoning the wait once
  /// `interrupter` is raised.
  ///
  /// The interrupter is only consulted while the queue is empty.
  ///
  /// Only available for `T: Send + 'static`: while suspended, the queue registers itself with the
  /// interrupter as an `Arc<dyn WakeTarget>`, and the interrupter may outlive the call. Queues of
  /// borrowed elements, such as ones built inside [`std::thread::scope`] around non-`'static` data,
  /// can only use the uninterruptible forms.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Interrupted`] when the wait was abandoned. The queue is left unchanged
  /// and the interrupter stays raised.
  pub fn dequeue_interruptibly(&self, interrupter: &Interrupter) -> Result<T, QueueError> {
    let mut items = self.shared.monitor.lock();
    if let Some(item) = self.pop_front(&mut items) {
      return Ok(item);
    }

    let _registration = self.register(interrupter);
    loop {
      if interrupter.is_interrupted() {
        trace!(capacity = self.shared.capacity, "suspended consumer interrupted");
        return Err(QueueError::Interrupted);
      }
      items = self.suspend(items, Signal::NotEmpty);
      if let Some(item) = self.pop_front(&mut items) {
        return Ok(item);
      }
    }
  }

  fn register<'i>(&self, interrupter: &'i Interrupter) -> InterruptRegistration<'i> {
    let target: Arc<dyn WakeTarget> = self.shared.clone();
    interrupter.register(target)
  }
}

impl<T> Clone for BoundedQueue<T> {
  fn clone(&self) -> Self {
    Self { shared: Arc::clone(&self.shared) }
  }
}

impl<T> fmt::Debug for BoundedQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BoundedQueue")
      .field("capacity", &self.shared.capacity)
      .field("len", &self.len())
      .field("wake_policy", &self.wake_policy())
      .finish()
  }
}
