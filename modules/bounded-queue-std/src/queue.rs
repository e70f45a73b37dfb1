mod bounded_queue;
mod queue_options;
mod wake_policy;

pub use bounded_queue::BoundedQueue;
pub use queue_options::QueueOptions;
pub use wake_policy::{WakePolicy, DEFAULT_WAKE_POLICY};
