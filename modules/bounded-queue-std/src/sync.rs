//! Lock and condition-variable plumbing shared by the queue and the interrupter.

mod std_monitor;

pub(crate) use std_monitor::{Signal, StdMonitor};
