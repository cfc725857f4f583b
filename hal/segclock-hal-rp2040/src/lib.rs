//! RP2040-specific HAL for the clock firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `segclock-hal` traits on top of embassy-rp:
//!
//! - Push-pull outputs for the digit drive lines
//! - Flex pins for segment lines that double as key inputs
//! - Blocking I2C master for the RTC

#![no_std]

pub mod gpio;
pub mod i2c;

pub use gpio::{RpFlexPin, RpOutputPin};
pub use i2c::RpI2c;

// Re-export shared traits from segclock-hal for convenience
pub use segclock_hal::{FlexPin, I2cBus, I2cBusError, I2cConfig, InputPin, OutputPin};
