//! Timer slots and the actions they fire

/// Number of timer slots
pub const MAX_TIMERS: usize = 4;

/// Named timer slots
///
/// The slot set is fixed at compile time; there is no dynamic allocation
/// and no way to run out of timers at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerId {
    /// Key sampling cadence
    Keys,
    /// Digit / colon blink
    Blink,
    /// RTC refresh
    Rtc,
    /// Leave clock-setting mode after inactivity
    EditTimeout,
}

impl TimerId {
    /// Number of slots
    pub const COUNT: usize = MAX_TIMERS;

    /// All slots in firing order
    pub const ALL: [TimerId; MAX_TIMERS] = [
        TimerId::Keys,
        TimerId::Blink,
        TimerId::Rtc,
        TimerId::EditTimeout,
    ];

    /// Slot index
    pub const fn index(self) -> usize {
        match self {
            TimerId::Keys => 0,
            TimerId::Blink => 1,
            TimerId::Rtc => 2,
            TimerId::EditTimeout => 3,
        }
    }
}

/// Work a timer performs when it expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Sample the keys and advance every debounce state machine
    PollKeys,
    /// Toggle the blinking digits
    Blink,
    /// Read the time from the RTC
    ReadRtc,
    /// Leave clock-setting mode and commit the edited time
    ExitEdit,
}

/// One timer slot
///
/// A slot with no action is inactive; its `remaining_ms` is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timer {
    /// Time left before expiry in milliseconds, may go negative when polls coalesce
    pub remaining_ms: i32,
    /// Action fired on expiry
    pub action: Option<Action>,
}

impl Timer {
    /// An inactive slot
    pub const fn idle() -> Self {
        Self {
            remaining_ms: i32::MAX,
            action: None,
        }
    }

    /// Check if the slot is armed
    pub fn is_armed(&self) -> bool {
        self.action.is_some()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_order() {
        for (i, id) in TimerId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_idle_timer_is_disarmed() {
        assert!(!Timer::idle().is_armed());
        assert!(!Timer::default().is_armed());
    }
}
