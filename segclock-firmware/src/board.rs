//! Board wiring
//!
//! | Signal               | GPIO      |
//! |----------------------|-----------|
//! | Segments (bit 0..7)  | 2..9      |
//! | Digit drives D0..D3  | 10..13    |
//! | RTC SDA / SCL (I2C0) | 16 / 17   |
//!
//! The Set, Right and Up keys pull segment bits 0, 1 and 3 to ground.

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::I2C0;
use embassy_rp::Peri;
use embassy_time::Delay;

use segclock_drivers::panel::SegmentPanel;
use segclock_drivers::rtc::Ds1307;
use segclock_hal_rp2040::{RpFlexPin, RpI2c, RpOutputPin};

/// Number of segment lines
pub const SEGMENT_LINES: usize = 8;

/// Number of digit drive lines
pub const DRIVE_LINES: usize = 4;

/// The display panel, also the key input
pub type Panel = SegmentPanel<RpFlexPin<'static>, RpOutputPin<'static>, Delay>;

/// The real-time clock
pub type Rtc = Ds1307<RpI2c<'static, I2C0>>;

/// Build the panel from its pins, all lines off
pub fn panel(
    segments: [Peri<'static, AnyPin>; SEGMENT_LINES],
    drives: [Peri<'static, AnyPin>; DRIVE_LINES],
) -> Panel {
    SegmentPanel::new(
        segments.map(RpFlexPin::new),
        drives.map(RpOutputPin::new),
        Delay,
    )
}
