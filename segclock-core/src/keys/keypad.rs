//! All keys of the clock, polled together

use super::events::{Key, KeyEvent, KEY_COUNT};
use super::machine::Button;
use crate::config::KeyTiming;

/// The clock's keys and their shared timing
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: [Button; KEY_COUNT],
    timing: KeyTiming,
}

impl Keypad {
    /// Create a keypad with every key released
    pub fn new(timing: KeyTiming) -> Self {
        Self {
            buttons: [Button::new(&timing); KEY_COUNT],
            timing,
        }
    }

    /// Debounce state of one key
    pub fn button(&self, key: Key) -> &Button {
        &self.buttons[key.index()]
    }

    /// Advance every key by one poll cycle
    ///
    /// `pressed` is indexed by [`Key::index`]. The handler runs synchronously
    /// for each event, in key order.
    pub fn poll<F>(&mut self, pressed: [bool; KEY_COUNT], mut handler: F)
    where
        F: FnMut(Key, KeyEvent),
    {
        for key in Key::ALL {
            let button = &mut self.buttons[key.index()];
            let was_down = button.state().is_down();
            if let Some(event) = button.poll(pressed[key.index()], &self.timing) {
                debug!("key {:?} {:?}", key, event);
                handler(key, event);
            } else if was_down && !button.state().is_down() {
                trace!("key {:?} released", key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMING: KeyTiming = KeyTiming {
        press: 2,
        hold: 5,
        repeat: 2,
    };

    #[test]
    fn test_keys_are_independent() {
        let mut keypad = Keypad::new(TIMING);
        let mut events = std::vec::Vec::new();

        for _ in 0..2 {
            keypad.poll([false, true, false], |k, e| events.push((k, e)));
        }
        assert_eq!(events, [(Key::Right, KeyEvent::Press)]);

        keypad.poll([true, true, false], |k, e| events.push((k, e)));
        keypad.poll([true, true, false], |k, e| events.push((k, e)));
        assert_eq!(
            events,
            [
                (Key::Right, KeyEvent::Press),
                (Key::Set, KeyEvent::Press),
            ]
        );
    }

    #[test]
    fn test_events_follow_key_order() {
        let mut keypad = Keypad::new(TIMING);
        let mut events = std::vec::Vec::new();

        for _ in 0..2 {
            keypad.poll([true, true, true], |k, _| events.push(k));
        }
        assert_eq!(events, [Key::Set, Key::Right, Key::Up]);
    }
}
