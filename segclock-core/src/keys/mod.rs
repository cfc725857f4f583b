//! Key debounce, hold and auto-repeat
//!
//! One counter-and-limit state machine per key, advanced once per key poll.
//! The same counter measures press confirmation, hold delay, repeat
//! interval and release confirmation; only the limit changes.

pub mod events;
pub mod keypad;
pub mod machine;

pub use events::{Key, KeyEvent, KEY_COUNT};
pub use keypad::Keypad;
pub use machine::{Button, ButtonState};
