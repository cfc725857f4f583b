//! Segclock Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the clock needs.
//! Chip-specific HALs implement them, the drivers and core logic consume
//! them, so the same application code can be tested on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (segclock-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segclock-drivers (panel, RTC)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segclock-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ segclock-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::FlexPin`] - Output line that can be sampled as a pulled-up input
//! - [`i2c::I2cBus`] - I2C bus operations

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use gpio::{FlexPin, InputPin, OutputPin};
pub use i2c::{I2cBus, I2cBusError, I2cConfig};
