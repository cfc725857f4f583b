//! DS1307 real-time clock (I2C)
//!
//! Timekeeping registers are BCD:
//! - 0x00 seconds, bit 7 is the clock-halt (CH) flag
//! - 0x01 minutes
//! - 0x02 hours, bit 6 selects 12 h mode, in which bit 5 is PM
//!
//! Only the time of day is used; the date registers are left alone.

use segclock_core::time::{bcd_to_dec, ClockTime};
use segclock_core::traits::{RtcClock, RtcError};
use segclock_hal::{I2cBus, I2cBusError};

/// DS1307 register addresses
pub mod reg {
    /// Seconds and clock halt
    pub const SECONDS: u8 = 0x00;
    /// Minutes
    pub const MINUTES: u8 = 0x01;
    /// Hours and 12/24 h mode
    pub const HOURS: u8 = 0x02;
    /// Square-wave output control
    pub const CONTROL: u8 = 0x07;
}

/// Fixed 7-bit bus address of the DS1307
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// Oscillator stopped when set
const CLOCK_HALT: u8 = 0x80;
/// Hour register holds a 12 h value
const HOUR_12: u8 = 0x40;
/// PM flag in 12 h mode
const HOUR_PM: u8 = 0x20;

fn bus_error(_: I2cBusError) -> RtcError {
    RtcError::Bus
}

/// Decode the hour register to 0-23
fn decode_hours(raw: u8) -> Result<u8, RtcError> {
    if raw & HOUR_12 == 0 {
        return Ok(bcd_to_dec(raw & 0x3F)?);
    }

    let hour = bcd_to_dec(raw & 0x1F)?;
    if !(1..=12).contains(&hour) {
        return Err(RtcError::InvalidData);
    }
    let pm = raw & HOUR_PM != 0;
    Ok(hour % 12 + if pm { 12 } else { 0 })
}

/// DS1307 driver
pub struct Ds1307<I> {
    bus: I,
    address: u8,
}

impl<I: I2cBus> Ds1307<I> {
    /// Create a driver for the chip at `address`
    pub fn new(bus: I, address: u8) -> Self {
        Self { bus, address }
    }

    /// Give the bus back
    pub fn release(self) -> I {
        self.bus
    }

    /// Start the oscillator if it is halted
    ///
    /// A fresh chip powers up halted. Returns `true` if the clock had to be
    /// started, in which case the time it reports is stale.
    pub fn start(&mut self) -> Result<bool, RtcError> {
        let mut seconds = [0u8; 1];
        self.bus
            .write_read(self.address, &[reg::SECONDS], &mut seconds)
            .map_err(bus_error)?;

        if seconds[0] & CLOCK_HALT == 0 {
            return Ok(false);
        }

        self.bus
            .write(self.address, &[reg::SECONDS, seconds[0] & !CLOCK_HALT])
            .map_err(bus_error)?;
        Ok(true)
    }

    /// Disable the square-wave output
    pub fn disable_square_wave(&mut self) -> Result<(), RtcError> {
        self.bus
            .write(self.address, &[reg::CONTROL, 0x00])
            .map_err(bus_error)
    }
}

impl<I: I2cBus> RtcClock for Ds1307<I> {
    fn read_time(&mut self) -> Result<ClockTime, RtcError> {
        let mut raw = [0u8; 3];
        self.bus
            .write_read(self.address, &[reg::SECONDS], &mut raw)
            .map_err(bus_error)?;

        let seconds = bcd_to_dec(raw[0] & !CLOCK_HALT)?;
        let minutes = bcd_to_dec(raw[1] & 0x7F)?;
        let hours = decode_hours(raw[2])?;
        Ok(ClockTime::new(hours, minutes, seconds)?)
    }

    fn set_time(&mut self, time: &ClockTime) -> Result<(), RtcError> {
        // 24 h mode, CH clear
        let (hours, minutes, seconds) = time.to_bcd();
        self.bus
            .write(self.address, &[reg::SECONDS, seconds, minutes, hours])
            .map_err(bus_error)
    }
}
