//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Output line that doubles as a momentary input
///
/// The clock shares some segment lines with its keys. Between refreshes the
/// line is released to an input with the internal pull-up enabled, read, and
/// then handed back to the display with the level it had before.
///
/// Callers are expected to wait for the line to settle between
/// [`FlexPin::release_pulled_up`] and reading it.
pub trait FlexPin: OutputPin + InputPin {
    /// Switch the pin to input with pull-up, remembering the output level
    fn release_pulled_up(&mut self);

    /// Return the pin to output, restoring the remembered level
    fn restore_output(&mut self);
}
