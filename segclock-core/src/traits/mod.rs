//! Collaborator traits
//!
//! These traits define the interface between the clock logic and the
//! board: the shared segment/key lines and the RTC chip.

pub mod display;
pub mod keypad;
pub mod rtc;

pub use display::SegmentBus;
pub use keypad::KeyInput;
pub use rtc::{RtcClock, RtcError};
