//! GPIO wrappers

use embassy_rp::gpio::{AnyPin, Flex, Level, Output, Pull};
use embassy_rp::Peri;
use segclock_hal::{FlexPin, InputPin, OutputPin};

/// Push-pull output
pub struct RpOutputPin<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutputPin<'d> {
    /// Configure `pin` as an output, initially low
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for RpOutputPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Output that can be turned around into a pulled-up input
pub struct RpFlexPin<'d> {
    pin: Flex<'d>,
    /// Output level to restore after an input phase
    saved: Level,
}

impl<'d> RpFlexPin<'d> {
    /// Configure `pin` as an output, initially low
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_low();
        pin.set_as_output();
        Self {
            pin,
            saved: Level::Low,
        }
    }
}

impl OutputPin for RpFlexPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl InputPin for RpFlexPin<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl FlexPin for RpFlexPin<'_> {
    fn release_pulled_up(&mut self) {
        self.saved = if self.pin.is_set_high() {
            Level::High
        } else {
            Level::Low
        };
        self.pin.set_pull(Pull::Up);
        self.pin.set_as_input();
    }

    fn restore_output(&mut self) {
        self.pin.set_pull(Pull::None);
        self.pin.set_level(self.saved);
        self.pin.set_as_output();
    }
}
