//! Display state and the multiplexed refresh

use super::glyph::{glyph, Segment};
use crate::traits::SegmentBus;

/// Number of digits
pub const DIGIT_COUNT: usize = 4;

/// Digit that carries the separator dot (between hours and minutes)
pub const DOT_DIGIT: Digit = Digit::D1;

/// Digit positions, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Digit {
    D0,
    D1,
    D2,
    D3,
}

impl Digit {
    /// All digits in refresh order
    pub const ALL: [Digit; DIGIT_COUNT] = [Digit::D0, Digit::D1, Digit::D2, Digit::D3];

    /// Position, 0 = leftmost
    pub const fn index(self) -> usize {
        match self {
            Digit::D0 => 0,
            Digit::D1 => 1,
            Digit::D2 => 2,
            Digit::D3 => 3,
        }
    }

    /// Following digit, wrapping after the last
    pub const fn next(self) -> Self {
        match self {
            Digit::D0 => Digit::D1,
            Digit::D1 => Digit::D2,
            Digit::D2 => Digit::D3,
            Digit::D3 => Digit::D0,
        }
    }
}

/// What the display shows and which digit is driven next
///
/// The main loop writes `buffer`, the blink controller toggles `visible`
/// and `dots`, and [`Display::refresh`] only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Display {
    /// ASCII character per digit; non-digits show blank
    pub buffer: [u8; DIGIT_COUNT],
    /// Per-digit visibility, parallel to `buffer`
    pub visible: [bool; DIGIT_COUNT],
    /// Separator dot on [`DOT_DIGIT`]
    pub dots: bool,
    current: Digit,
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Display {
    /// Create a blank display with every digit visible
    pub const fn new() -> Self {
        Self {
            buffer: [b' '; DIGIT_COUNT],
            visible: [true; DIGIT_COUNT],
            dots: false,
            current: Digit::D0,
        }
    }

    /// Digit the next refresh will drive
    pub fn current_digit(&self) -> Digit {
        self.current
    }

    /// Replace the displayed characters
    pub fn set_text(&mut self, text: &[u8; DIGIT_COUNT]) {
        self.buffer = *text;
    }

    /// Make every digit visible again
    pub fn show_all(&mut self) {
        self.visible = [true; DIGIT_COUNT];
    }

    /// Segment pattern for a digit as it should appear now
    ///
    /// Hidden digits have an empty pattern.
    pub fn pattern(&self, digit: Digit) -> u8 {
        if !self.visible[digit.index()] {
            return 0;
        }
        let mut pattern = glyph(self.buffer[digit.index()]).unwrap_or(0);
        if self.dots && digit == DOT_DIGIT {
            pattern |= Segment::Dot.mask();
        }
        pattern
    }

    /// Drive the current digit and advance to the next one
    ///
    /// All drive lines are released before the segment lines change, so
    /// at most one digit is ever driven. A hidden digit gets no drive pulse
    /// at all for this slot.
    pub fn refresh<B: SegmentBus + ?Sized>(&mut self, bus: &mut B) {
        for digit in Digit::ALL {
            bus.set_drive(digit, false);
        }

        let digit = self.current;
        let pattern = self.pattern(digit);
        for segment in Segment::ALL {
            bus.set_segment(segment, segment.is_set(pattern));
        }
        if self.visible[digit.index()] {
            bus.set_drive(digit, true);
        }

        self.current = digit.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::GLYPHS;
    use proptest::prelude::*;

    /// Mock panel tracking line levels and every drive pulse
    #[derive(Default)]
    struct MockBus {
        segments: u8,
        drives: [bool; DIGIT_COUNT],
        /// (digit, segment pattern) at each drive assertion
        pulses: std::vec::Vec<(Digit, u8)>,
        max_driven: usize,
    }

    impl SegmentBus for MockBus {
        fn set_segment(&mut self, segment: Segment, on: bool) {
            if on {
                self.segments |= segment.mask();
            } else {
                self.segments &= !segment.mask();
            }
        }

        fn set_drive(&mut self, digit: Digit, on: bool) {
            self.drives[digit.index()] = on;
            if on {
                self.pulses.push((digit, self.segments));
            }
            let driven = self.drives.iter().filter(|&&d| d).count();
            self.max_driven = self.max_driven.max(driven);
        }
    }

    #[test]
    fn test_refresh_cycles_digits_in_order() {
        let mut display = Display::new();
        display.set_text(b"0930");
        let mut bus = MockBus::default();

        for _ in 0..4 {
            display.refresh(&mut bus);
        }

        assert_eq!(
            bus.pulses,
            [
                (Digit::D0, GLYPHS[0]),
                (Digit::D1, GLYPHS[9]),
                (Digit::D2, GLYPHS[3]),
                (Digit::D3, GLYPHS[0]),
            ]
        );
        assert_eq!(bus.max_driven, 1);
        assert_eq!(display.current_digit(), Digit::D0);
    }

    #[test]
    fn test_hidden_digit_gets_no_pulse() {
        let mut display = Display::new();
        display.set_text(b"1234");
        display.visible[0] = false;
        display.visible[1] = false;
        let mut bus = MockBus::default();

        for _ in 0..4 {
            display.refresh(&mut bus);
        }

        assert_eq!(
            bus.pulses,
            [(Digit::D2, GLYPHS[3]), (Digit::D3, GLYPHS[4])]
        );
        assert_eq!(bus.drives, [false, false, false, true]);
    }

    #[test]
    fn test_dot_only_on_separator_digit() {
        let mut display = Display::new();
        display.set_text(b"1111");
        display.dots = true;
        let mut bus = MockBus::default();

        for _ in 0..4 {
            display.refresh(&mut bus);
        }

        let with_dot: std::vec::Vec<Digit> = bus
            .pulses
            .iter()
            .filter(|(_, p)| Segment::Dot.is_set(*p))
            .map(|(d, _)| *d)
            .collect();
        assert_eq!(with_dot, [DOT_DIGIT]);
    }

    #[test]
    fn test_non_digit_is_blank_but_driven() {
        let mut display = Display::new();
        display.set_text(b"-9 7");
        let mut bus = MockBus::default();

        for _ in 0..4 {
            display.refresh(&mut bus);
        }

        assert_eq!(bus.pulses[0], (Digit::D0, 0));
        assert_eq!(bus.pulses[2], (Digit::D2, 0));
    }

    #[test]
    fn test_segments_cleared_between_digits() {
        let mut display = Display::new();
        display.set_text(b"8 11");
        let mut bus = MockBus::default();

        display.refresh(&mut bus);
        assert_eq!(bus.segments, GLYPHS[8]);
        display.refresh(&mut bus);
        assert_eq!(bus.segments, 0);
    }

    proptest! {
        #[test]
        fn prop_cursor_returns_after_multiple_of_four(
            start in 0usize..4,
            rounds in 0usize..50,
            text in proptest::array::uniform4(0u8..128),
        ) {
            let mut display = Display::new();
            display.set_text(&text);
            let mut bus = MockBus::default();
            for _ in 0..start {
                display.refresh(&mut bus);
            }
            let origin = display.current_digit();

            for _ in 0..rounds * 4 {
                display.refresh(&mut bus);
            }

            prop_assert_eq!(display.current_digit(), origin);
            prop_assert!(bus.max_driven <= 1);
        }
    }
}
