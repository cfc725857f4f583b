//! Real-time clock trait

use crate::time::{ClockTime, TimeError};

/// RTC errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RtcError {
    /// Bus transaction failed (NACK, arbitration, timeout)
    Bus,
    /// The chip answered with bytes that are not a valid time
    InvalidData,
}

impl From<TimeError> for RtcError {
    fn from(_: TimeError) -> Self {
        RtcError::InvalidData
    }
}

/// Battery-backed time source
pub trait RtcClock {
    /// Read the current time
    fn read_time(&mut self) -> Result<ClockTime, RtcError>;

    /// Set the current time
    fn set_time(&mut self, time: &ClockTime) -> Result<(), RtcError>;
}
