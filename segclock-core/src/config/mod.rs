//! Configuration types
//!
//! Defines the timing, key, display and RTC settings of the clock and a
//! parser for the `clock.toml` subset embedded in the firmware.

pub mod parse;
pub mod types;

pub use parse::parse_config;
pub use types::*;
