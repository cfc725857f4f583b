//! Segment encoding
//!
//! Bit positions are the wiring contract with the display: bit `n` of a
//! pattern drives segment line `n`.

/// Segment lines, in bit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    BottomLeft,
    BottomRight,
    Bottom,
    Middle,
    UpperLeft,
    Upper,
    UpperRight,
    /// Decimal point, used as the hours/minutes separator
    Dot,
}

impl Segment {
    /// Number of segment lines
    pub const COUNT: usize = 8;

    /// All segment lines in bit order
    pub const ALL: [Segment; Self::COUNT] = [
        Segment::BottomLeft,
        Segment::BottomRight,
        Segment::Bottom,
        Segment::Middle,
        Segment::UpperLeft,
        Segment::Upper,
        Segment::UpperRight,
        Segment::Dot,
    ];

    /// Bit position of this segment in a pattern
    pub const fn bit(self) -> u8 {
        match self {
            Segment::BottomLeft => 0,
            Segment::BottomRight => 1,
            Segment::Bottom => 2,
            Segment::Middle => 3,
            Segment::UpperLeft => 4,
            Segment::Upper => 5,
            Segment::UpperRight => 6,
            Segment::Dot => 7,
        }
    }

    /// Single-bit mask for this segment
    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }

    /// Check if this segment is lit in `pattern`
    pub const fn is_set(self, pattern: u8) -> bool {
        pattern & self.mask() != 0
    }
}

const BL: u8 = Segment::BottomLeft.mask();
const BR: u8 = Segment::BottomRight.mask();
const B: u8 = Segment::Bottom.mask();
const M: u8 = Segment::Middle.mask();
const UL: u8 = Segment::UpperLeft.mask();
const U: u8 = Segment::Upper.mask();
const UR: u8 = Segment::UpperRight.mask();

/// Segment patterns for the decimal digits
pub const GLYPHS: [u8; 10] = [
    BL | B | BR | UL | UR | U,      // 0
    BR | UR,                        // 1
    BL | B | UR | U | M,            // 2
    B | BR | UR | U | M,            // 3
    BR | UR | M | UL,               // 4
    B | BR | M | UL | U,            // 5
    BL | B | BR | UL | M | U,       // 6
    BR | UR | U,                    // 7
    BL | B | BR | M | UL | U | UR,  // 8
    B | BR | M | UL | U | UR,       // 9
];

/// Segment pattern for an ASCII character
///
/// Only `'0'..='9'` have glyphs; anything else is a blank digit.
pub fn glyph(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(GLYPHS[(ch - b'0') as usize]),
        _ => None,
    }
}
