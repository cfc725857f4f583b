//! Wall-clock time and BCD conversion
//!
//! RTC chips report time as packed binary-coded decimal; the display wants
//! four ASCII digits.

use crate::config::HourFormat;

/// Shown when no valid time is known; renders as four blank digits
pub const NO_TIME: [u8; 4] = *b"----";

/// Time conversion errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// A nibble above 9
    InvalidBcd,
    /// Field outside its calendar range
    OutOfRange,
}

/// Decode one packed BCD byte (two decimal digits)
pub fn bcd_to_dec(bcd: u8) -> Result<u8, TimeError> {
    let tens = bcd >> 4;
    let ones = bcd & 0x0F;
    if tens > 9 || ones > 9 {
        return Err(TimeError::InvalidBcd);
    }
    Ok(tens * 10 + ones)
}

/// Encode a value below 100 as packed BCD
pub fn dec_to_bcd(dec: u8) -> u8 {
    let dec = dec % 100;
    ((dec / 10) << 4) | (dec % 10)
}

/// Time of day, 24-hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Create a time, checking each field's range
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, TimeError> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(TimeError::OutOfRange);
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Decode BCD hour (24 h), minute and second fields
    pub fn from_bcd(hours: u8, minutes: u8, seconds: u8) -> Result<Self, TimeError> {
        Self::new(bcd_to_dec(hours)?, bcd_to_dec(minutes)?, bcd_to_dec(seconds)?)
    }

    /// BCD `(hours, minutes, seconds)`
    pub fn to_bcd(&self) -> (u8, u8, u8) {
        (
            dec_to_bcd(self.hours),
            dec_to_bcd(self.minutes),
            dec_to_bcd(self.seconds),
        )
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Same time with the seconds replaced (clamped to 59)
    pub fn with_seconds(self, seconds: u8) -> Self {
        Self {
            seconds: seconds.min(59),
            ..self
        }
    }

    /// Advance the hour, wrapping 23 -> 0
    pub fn increment_hours(&mut self) {
        self.hours = (self.hours + 1) % 24;
    }

    /// Advance the minute, wrapping 59 -> 0 without touching the hour
    pub fn increment_minutes(&mut self) {
        self.minutes = (self.minutes + 1) % 60;
    }

    /// Hour as shown for the given convention
    pub fn display_hours(&self, format: HourFormat) -> u8 {
        match format {
            HourFormat::H24 => self.hours,
            HourFormat::H12 => match self.hours % 12 {
                0 => 12,
                h => h,
            },
        }
    }

    /// Zero-padded `HHMM`
    pub fn format_hhmm(&self, format: HourFormat) -> [u8; 4] {
        let hours = self.display_hours(format);
        [
            b'0' + hours / 10,
            b'0' + hours % 10,
            b'0' + self.minutes / 10,
            b'0' + self.minutes % 10,
        ]
    }
}
