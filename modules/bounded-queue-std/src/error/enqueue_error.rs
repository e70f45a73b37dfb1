//! Enqueue failure carrying the rejected element.

use core::fmt;

use super::QueueError;

/// Failure of an enqueue call. The element that could not be inserted is handed back.
pub struct EnqueueError<T> {
  error: QueueError,
  item:  T,
}

impl<T> EnqueueError<T> {
  pub(crate) const fn new(error: QueueError, item: T) -> Self {
    Self { error, item }
  }

  /// Returns the reason the element was rejected.
  #[must_use]
  pub const fn error(&self) -> QueueError {
    self.error
  }

  /// Borrows the rejected element.
  #[must_use]
  pub const fn item(&self) -> &T {
    &self.item
  }

  /// Consumes the error and returns the rejected element.
  #[must_use]
  pub fn into_item(self) -> T {
    self.item
  }

  /// Splits the error into its reason and the rejected element.
  #[must_use]
  pub fn into_parts(self) -> (QueueError, T) {
    (self.error, self.item)
  }

  /// Returns `true` when the call was abandoned through an interrupter.
  #[must_use]
  pub fn is_interrupted(&self) -> bool {
    self.error == QueueError::Interrupted
  }
}

impl<T> fmt::Debug for EnqueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("EnqueueError").field("error", &self.error).finish_non_exhaustive()
  }
}

impl<T> fmt::Display for EnqueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "element rejected: {}", self.error)
  }
}

impl<T> std::error::Error for EnqueueError<T> {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    Some(&self.error)
  }
}

impl<T> From<EnqueueError<T>> for QueueError {
  fn from(err: EnqueueError<T>) -> Self {
    err.error
  }
}
