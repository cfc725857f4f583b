//! Key sampling trait

use crate::keys::KEY_COUNT;

/// Raw key sampling
///
/// Implementations return the instantaneous level of every key line; all
/// debouncing happens in [`crate::keys`].
pub trait KeyInput {
    /// Sample every key, `true` = pressed, indexed by [`crate::keys::Key::index`]
    fn sample(&mut self) -> [bool; KEY_COUNT];
}
