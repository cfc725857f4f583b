//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in segclock-core, built on the segclock-hal pin and bus traits:
//!
//! - Real-time clock (DS1307 over I2C)
//! - Multiplexed seven-segment panel with shared key lines

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod panel;
pub mod rtc;
