//! Key identities and the events a key can raise

/// Number of physical keys
pub const KEY_COUNT: usize = 3;

/// Physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Enter / advance clock-setting mode
    Set,
    /// Move between hours and minutes
    Right,
    /// Increment the focused field
    Up,
}

impl Key {
    /// All keys in sampling order
    pub const ALL: [Key; KEY_COUNT] = [Key::Set, Key::Right, Key::Up];

    /// Index into per-key arrays
    pub const fn index(self) -> usize {
        match self {
            Key::Set => 0,
            Key::Right => 1,
            Key::Up => 2,
        }
    }
}

/// Logical key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    /// Press confirmed after the debounce threshold
    Press,
    /// Key held past the hold delay
    Hold,
    /// Auto-repeat while still held
    Repeat,
}
