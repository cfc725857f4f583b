//! Software timer scheduler
//!
//! A fixed set of named one-shot timers counted down from the tick source
//! and polled from the main loop. Periodic behaviour comes from callbacks
//! that re-arm their own slot.

pub mod executor;
pub mod timer;

pub use executor::{Scheduler, TimerHandler};
pub use timer::{Action, Timer, TimerId, MAX_TIMERS};
