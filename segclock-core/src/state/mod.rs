//! Clock-setting mode machine
//!
//! Which field, if any, the keys are editing. Transitions are a pure
//! function of the current mode and a key event.

pub mod mode;

pub use mode::Mode;
