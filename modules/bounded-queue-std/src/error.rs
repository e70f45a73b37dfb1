mod enqueue_error;
mod queue_error;

#[cfg(test)]
mod tests;

pub use enqueue_error::EnqueueError;
pub use queue_error::QueueError;
