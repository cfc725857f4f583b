//! Multiplexed four-digit seven-segment panel
//!
//! Eight segment lines are shared by all digits; four drive lines select
//! which digit is lit. Both are active high. Three of the segment lines
//! also carry a key each, shorting the line to ground when pressed, so
//! keys are sampled by briefly turning those lines into pulled-up inputs.

use embedded_hal::delay::DelayNs;
use segclock_core::display::{Digit, Segment, DIGIT_COUNT};
use segclock_core::keys::{Key, KEY_COUNT};
use segclock_core::traits::{KeyInput, SegmentBus};
use segclock_hal::{FlexPin, OutputPin};

/// Time for a released key line to settle on its pull-up
pub const SETTLE_US: u32 = 200;

/// Segment line a key shares
pub const fn key_line(key: Key) -> Segment {
    match key {
        Key::Set => Segment::BottomLeft,
        Key::Right => Segment::BottomRight,
        Key::Up => Segment::Middle,
    }
}

/// Seven-segment panel with shared key lines
///
/// Segment pins are indexed by [`Segment::bit`], drive pins by
/// [`Digit::index`].
pub struct SegmentPanel<S, D, T> {
    segments: [S; Segment::COUNT],
    drives: [D; DIGIT_COUNT],
    delay: T,
}

impl<S, D, T> SegmentPanel<S, D, T>
where
    S: FlexPin,
    D: OutputPin,
    T: DelayNs,
{
    /// Take the pins and switch everything off
    pub fn new(segments: [S; Segment::COUNT], drives: [D; DIGIT_COUNT], delay: T) -> Self {
        let mut panel = Self {
            segments,
            drives,
            delay,
        };
        panel.blank();
        panel
    }

    /// Release every drive and segment line
    pub fn blank(&mut self) {
        for drive in self.drives.iter_mut() {
            drive.set_low();
        }
        for segment in self.segments.iter_mut() {
            segment.set_low();
        }
    }
}

impl<S, D, T> SegmentBus for SegmentPanel<S, D, T>
where
    S: FlexPin,
    D: OutputPin,
    T: DelayNs,
{
    fn set_segment(&mut self, segment: Segment, on: bool) {
        self.segments[segment.bit() as usize].set_state(on);
    }

    fn set_drive(&mut self, digit: Digit, on: bool) {
        self.drives[digit.index()].set_state(on);
    }
}

impl<S, D, T> KeyInput for SegmentPanel<S, D, T>
where
    S: FlexPin,
    D: OutputPin,
    T: DelayNs,
{
    fn sample(&mut self) -> [bool; KEY_COUNT] {
        for key in Key::ALL {
            self.segments[key_line(key).bit() as usize].release_pulled_up();
        }

        self.delay.delay_us(SETTLE_US);

        let mut pressed = [false; KEY_COUNT];
        for key in Key::ALL {
            let line = &mut self.segments[key_line(key).bit() as usize];
            pressed[key.index()] = line.is_low();
            line.restore_output();
        }
        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segclock_hal::InputPin;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Pin that can be switched to input; reads low while `grounded`
    #[derive(Default)]
    struct MockFlex {
        level: bool,
        input: bool,
        grounded: bool,
        releases: usize,
    }

    impl OutputPin for MockFlex {
        fn set_high(&mut self) {
            self.level = true;
        }

        fn set_low(&mut self) {
            self.level = false;
        }

        fn is_set_high(&self) -> bool {
            self.level
        }
    }

    impl InputPin for MockFlex {
        fn is_high(&self) -> bool {
            if self.input {
                !self.grounded
            } else {
                self.level
            }
        }
    }

    impl FlexPin for MockFlex {
        fn release_pulled_up(&mut self) {
            self.input = true;
            self.releases += 1;
        }

        fn restore_output(&mut self) {
            self.input = false;
        }
    }

    #[derive(Default)]
    struct MockDrive {
        high: bool,
    }

    impl OutputPin for MockDrive {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    /// Delay that records the total requested time
    #[derive(Clone, Default)]
    struct MockDelay {
        total_ns: Rc<Cell<u64>>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns.set(self.total_ns.get() + ns as u64);
        }
    }

    fn panel() -> SegmentPanel<MockFlex, MockDrive, MockDelay> {
        SegmentPanel::new(
            core::array::from_fn(|_| MockFlex::default()),
            core::array::from_fn(|_| MockDrive::default()),
            MockDelay::default(),
        )
    }

    #[test]
    fn test_segment_and_drive_lines() {
        let mut panel = panel();
        panel.set_segment(Segment::Upper, true);
        panel.set_drive(Digit::D2, true);

        assert!(panel.segments[Segment::Upper.bit() as usize].level);
        assert!(!panel.segments[Segment::Bottom.bit() as usize].level);
        assert!(panel.drives[2].high);
        assert!(!panel.drives[0].high);
    }

    #[test]
    fn test_sample_reads_grounded_lines() {
        let mut panel = panel();
        panel.segments[key_line(Key::Right).bit() as usize].grounded = true;

        assert_eq!(panel.sample(), [false, true, false]);
    }

    #[test]
    fn test_sample_restores_output_level() {
        let mut panel = panel();
        panel.set_segment(Segment::Middle, true);
        panel.segments[Segment::Middle.bit() as usize].grounded = true;

        assert_eq!(panel.sample(), [false, false, true]);
        let line = &panel.segments[Segment::Middle.bit() as usize];
        assert!(!line.input);
        assert!(line.level);
    }

    #[test]
    fn test_sample_touches_only_key_lines_and_settles() {
        let delay = MockDelay::default();
        let total = delay.total_ns.clone();
        let mut panel = SegmentPanel::new(
            core::array::from_fn(|_| MockFlex::default()),
            core::array::from_fn(|_| MockDrive::default()),
            delay,
        );
        panel.sample();

        let released: std::vec::Vec<usize> = panel.segments.iter().map(|s| s.releases).collect();
        assert_eq!(released, [1, 1, 0, 1, 0, 0, 0, 0]);
        assert_eq!(total.get(), SETTLE_US as u64 * 1000);
    }
}
