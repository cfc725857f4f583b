//! Board-agnostic core logic for the seven-segment clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Tick source shared between the tick interrupt and the main loop
//! - One-shot software timer scheduler
//! - Key debounce / hold / repeat state machine
//! - Display multiplexer and glyph table
//! - Blink controller
//! - Clock-setting mode machine
//! - Configuration types and parser
//! - Traits for the panel and RTC collaborators

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod log;

pub mod app;
pub mod blink;
pub mod config;
pub mod display;
pub mod keys;
pub mod scheduler;
pub mod state;
pub mod tick;
pub mod time;
pub mod traits;

pub use app::{ClockApp, ClockState};
