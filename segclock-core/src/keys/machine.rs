//! Per-key debounce state machine
//!
//! | State        | Sample   | Effect                                        |
//! |--------------|----------|-----------------------------------------------|
//! | `UpHandled`  | pressed  | `Down`, count = 1                             |
//! | `Down`       | pressed  | count++, at `press` raise Press -> `DownHold` |
//! | `DownHold`   | pressed  | count++, at `hold` raise Hold -> `DownRepeat` |
//! | `DownRepeat` | pressed  | count++, at `repeat` raise Repeat, count = 0  |
//! | any down     | released | `Up`, limit = `press`                         |
//! | `Up`         | released | count++, at `press` -> `UpHandled`            |
//! | `Up`         | pressed  | `Down`, count = 1                             |
//!
//! Counts are relative to the last transition and compared against small
//! limits, so nothing depends on absolute tick values.

use super::events::KeyEvent;
use crate::config::KeyTiming;

/// Debounce states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Released and the release already processed
    UpHandled,
    /// Pressed, waiting for the press to be confirmed
    Down,
    /// Released, waiting for the release to be confirmed
    Up,
    /// Press confirmed, waiting for the hold delay
    DownHold,
    /// Held, raising an event every repeat interval
    DownRepeat,
}

impl ButtonState {
    /// Check if the key is (tentatively) down in this state
    pub fn is_down(&self) -> bool {
        matches!(
            self,
            ButtonState::Down | ButtonState::DownHold | ButtonState::DownRepeat
        )
    }
}

/// Debounce state for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    state: ButtonState,
    /// Polls spent in the current state
    count: u16,
    /// Count at which the current state acts
    limit: u16,
}

impl Button {
    /// Create a released key
    pub const fn new(timing: &KeyTiming) -> Self {
        Self {
            state: ButtonState::UpHandled,
            count: 0,
            limit: timing.press,
        }
    }

    /// Current state
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Polls spent in the current state
    pub fn count(&self) -> u16 {
        self.count
    }

    /// Threshold for the current state
    pub fn limit(&self) -> u16 {
        self.limit
    }

    /// Advance one poll cycle with a raw sample
    ///
    /// Returns the event to hand to the key handler, if any. Releases are
    /// debounced too but never produce an event.
    pub fn poll(&mut self, pressed: bool, timing: &KeyTiming) -> Option<KeyEvent> {
        use ButtonState::*;

        match (self.state, pressed) {
            (UpHandled, false) => return None,
            (UpHandled | Up, true) => {
                self.enter(Down, timing.press);
                // The sample that caused the transition counts, so a press
                // confirms after exactly `press` pressed samples
                self.count = 1;
            }
            (Down | DownHold | DownRepeat, false) => {
                self.enter(Up, timing.press);
                return None;
            }
            (Down | DownHold | DownRepeat, true) | (Up, false) => {
                self.count = self.count.saturating_add(1);
            }
        }

        if self.count < self.limit {
            return None;
        }

        match self.state {
            Down => {
                self.enter(DownHold, timing.hold);
                Some(KeyEvent::Press)
            }
            DownHold => {
                self.enter(DownRepeat, timing.repeat);
                Some(KeyEvent::Hold)
            }
            DownRepeat => {
                self.count = 0;
                Some(KeyEvent::Repeat)
            }
            Up => {
                self.enter(UpHandled, timing.press);
                None
            }
            UpHandled => None,
        }
    }

    fn enter(&mut self, state: ButtonState, limit: u16) {
        self.state = state;
        self.count = 0;
        self.limit = limit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TIMING: KeyTiming = KeyTiming {
        press: 4,
        hold: 10,
        repeat: 3,
    };

    /// Feed `n` identical samples, returning the events raised
    fn feed(button: &mut Button, pressed: bool, n: u16) -> std::vec::Vec<KeyEvent> {
        (0..n)
            .filter_map(|_| button.poll(pressed, &TIMING))
            .collect()
    }

    #[test]
    fn test_press_fires_once_then_hold_state() {
        let mut button = Button::new(&TIMING);
        let events = feed(&mut button, true, TIMING.press);

        assert_eq!(events, [KeyEvent::Press]);
        assert_eq!(button.state(), ButtonState::DownHold);
        assert_eq!(button.count(), 0);
        assert_eq!(button.limit(), TIMING.hold);
    }

    #[test]
    fn test_hold_and_repeat_sequence() {
        let mut button = Button::new(&TIMING);
        let n = TIMING.press + TIMING.hold + 3 * TIMING.repeat;
        let events = feed(&mut button, true, n);

        assert_eq!(
            events,
            [
                KeyEvent::Press,
                KeyEvent::Hold,
                KeyEvent::Repeat,
                KeyEvent::Repeat,
                KeyEvent::Repeat,
            ]
        );
        assert_eq!(button.state(), ButtonState::DownRepeat);
    }

    #[test]
    fn test_short_glitch_is_ignored() {
        let mut button = Button::new(&TIMING);
        assert!(feed(&mut button, true, 2).is_empty());
        assert!(feed(&mut button, false, 20).is_empty());
        assert_eq!(button.state(), ButtonState::UpHandled);
    }

    #[test]
    fn test_release_is_debounced() {
        let mut button = Button::new(&TIMING);
        feed(&mut button, true, TIMING.press);

        button.poll(false, &TIMING);
        assert_eq!(button.state(), ButtonState::Up);
        assert_eq!(button.count(), 0);
        assert_eq!(button.limit(), TIMING.press);

        feed(&mut button, false, TIMING.press - 1);
        assert_eq!(button.state(), ButtonState::Up);
        button.poll(false, &TIMING);
        assert_eq!(button.state(), ButtonState::UpHandled);
    }

    #[test]
    fn test_bounce_during_release_restarts_press() {
        let mut button = Button::new(&TIMING);
        feed(&mut button, true, TIMING.press);
        feed(&mut button, false, 1);

        // Contact bounces closed before the release is confirmed
        assert_eq!(button.poll(true, &TIMING), None);
        assert_eq!(button.state(), ButtonState::Down);
        assert_eq!(button.count(), 1);
        assert_eq!(button.limit(), TIMING.press);

        let events = feed(&mut button, true, TIMING.press - 1);
        assert_eq!(events, [KeyEvent::Press]);
    }

    #[test]
    fn test_release_during_repeat() {
        let mut button = Button::new(&TIMING);
        feed(&mut button, true, TIMING.press + TIMING.hold + 1);
        assert_eq!(button.state(), ButtonState::DownRepeat);

        button.poll(false, &TIMING);
        assert_eq!(button.state(), ButtonState::Up);
        assert_eq!(button.limit(), TIMING.press);
    }

    #[test]
    fn test_limit_of_one_fires_on_first_sample() {
        let timing = KeyTiming {
            press: 1,
            hold: 1,
            repeat: 1,
        };
        let mut button = Button::new(&timing);
        assert_eq!(button.poll(true, &timing), Some(KeyEvent::Press));
        assert_eq!(button.poll(true, &timing), Some(KeyEvent::Hold));
        assert_eq!(button.poll(true, &timing), Some(KeyEvent::Repeat));
    }

    proptest! {
        #[test]
        fn prop_held_key_event_count(extra in 0u16..200) {
            let mut button = Button::new(&TIMING);
            let n = TIMING.press + TIMING.hold + extra;
            let events = feed(&mut button, true, n);

            let expected = 2 + (extra / TIMING.repeat) as usize;
            prop_assert_eq!(events.len(), expected);
        }

        #[test]
        fn prop_short_presses_never_fire(
            runs in proptest::collection::vec(1u16..4, 1..30),
        ) {
            // Every press run is shorter than the press threshold
            let mut button = Button::new(&TIMING);
            for run in runs {
                prop_assert!(feed(&mut button, true, run).is_empty());
                prop_assert!(feed(&mut button, false, 1).is_empty());
            }
        }

        #[test]
        fn prop_count_resets_on_every_transition(
            press in 1u16..6,
            hold in 1u16..6,
            repeat in 1u16..6,
            samples in proptest::collection::vec(any::<bool>(), 1..400),
        ) {
            let timing = KeyTiming { press, hold, repeat };
            let mut button = Button::new(&timing);
            for pressed in samples {
                let before = button.state();
                button.poll(pressed, &timing);
                let after = button.state();
                if after == before {
                    continue;
                }
                // Entering Down counts the triggering sample
                let expected = if after == ButtonState::Down { 1 } else { 0 };
                prop_assert_eq!(button.count(), expected, "{:?} -> {:?}", before, after);
            }
        }
    }
}
