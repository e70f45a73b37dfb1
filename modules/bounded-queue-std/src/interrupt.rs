mod interrupter;
mod wake_target;

pub use interrupter::Interrupter;
pub(crate) use interrupter::InterruptRegistration;
pub(crate) use wake_target::WakeTarget;
