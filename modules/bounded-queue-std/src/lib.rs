#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::unnecessary_struct_initialization)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_async)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::empty_enum)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::naive_bytecount)]
#![deny(clippy::if_same_then_else)]
#![deny(clippy::cmp_null)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! Fixed-capacity blocking queue for std threads.
//!
//! [`BoundedQueue`] is shared between any number of producer and consumer threads. Producers
//! suspend while the queue is full and consumers suspend while it is empty; every suspension
//! releases the queue lock and re-tests its predicate after waking. Waits can be abandoned through
//! an [`Interrupter`], which replaces the thread interruption other runtimes provide.

/// Error types reported by queue operations.
pub mod error;
/// Cancellation handles for blocking queue operations.
pub mod interrupt;
/// The bounded blocking queue and its construction options.
pub mod queue;
mod sync;

pub use error::{EnqueueError, QueueError};
pub use interrupt::Interrupter;
pub use queue::{BoundedQueue, QueueOptions, WakePolicy};

/// Prelude module that re-exports commonly used types.
pub mod prelude {
  pub use crate::{
    error::{EnqueueError, QueueError},
    interrupt::Interrupter,
    queue::{BoundedQueue, QueueOptions, WakePolicy, DEFAULT_WAKE_POLICY},
  };
}
