//! Mode definition

use crate::display::Digit;
use crate::keys::{Key, KeyEvent};

/// Clock modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Showing the RTC time
    #[default]
    Run,
    /// Editing the hours
    SetHours,
    /// Editing the minutes
    SetMinutes,
}

impl Mode {
    /// Check if a time field is being edited
    pub fn is_editing(&self) -> bool {
        !matches!(self, Mode::Run)
    }

    /// Digits of the field being edited
    pub fn focus(&self) -> Option<[Digit; 2]> {
        match self {
            Mode::Run => None,
            Mode::SetHours => Some([Digit::D0, Digit::D1]),
            Mode::SetMinutes => Some([Digit::D2, Digit::D3]),
        }
    }

    /// Process a key event and return the next mode
    ///
    /// Only confirmed presses change modes; holding a key never does.
    pub fn transition(self, key: Key, event: KeyEvent) -> Self {
        use Mode::*;

        if event != KeyEvent::Press {
            return self;
        }

        match (self, key) {
            // Set walks Run -> hours -> minutes -> Run
            (Run, Key::Set) => SetHours,
            (SetHours, Key::Set) => SetMinutes,
            (SetMinutes, Key::Set) => Run,

            // Right swaps the edited field
            (SetHours, Key::Right) => SetMinutes,
            (SetMinutes, Key::Right) => SetHours,

            // Default: stay in current mode
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_cycles_modes() {
        let mode = Mode::Run;
        let hours = mode.transition(Key::Set, KeyEvent::Press);
        assert_eq!(hours, Mode::SetHours);
        let minutes = hours.transition(Key::Set, KeyEvent::Press);
        assert_eq!(minutes, Mode::SetMinutes);
        assert_eq!(minutes.transition(Key::Set, KeyEvent::Press), Mode::Run);
    }

    #[test]
    fn test_right_swaps_fields() {
        assert_eq!(
            Mode::SetHours.transition(Key::Right, KeyEvent::Press),
            Mode::SetMinutes
        );
        assert_eq!(
            Mode::SetMinutes.transition(Key::Right, KeyEvent::Press),
            Mode::SetHours
        );
        assert_eq!(Mode::Run.transition(Key::Right, KeyEvent::Press), Mode::Run);
    }

    #[test]
    fn test_held_keys_do_not_change_mode() {
        for event in [KeyEvent::Hold, KeyEvent::Repeat] {
            assert_eq!(Mode::Run.transition(Key::Set, event), Mode::Run);
            assert_eq!(Mode::SetHours.transition(Key::Right, event), Mode::SetHours);
        }
    }

    #[test]
    fn test_up_never_changes_mode() {
        for mode in [Mode::Run, Mode::SetHours, Mode::SetMinutes] {
            assert_eq!(mode.transition(Key::Up, KeyEvent::Press), mode);
        }
    }

    #[test]
    fn test_focus() {
        assert_eq!(Mode::Run.focus(), None);
        assert_eq!(Mode::SetHours.focus(), Some([Digit::D0, Digit::D1]));
        assert_eq!(Mode::SetMinutes.focus(), Some([Digit::D2, Digit::D3]));
        assert!(!Mode::Run.is_editing());
        assert!(Mode::SetMinutes.is_editing());
    }
}
