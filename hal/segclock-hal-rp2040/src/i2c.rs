//! Blocking I2C master
//!
//! The RTC is read a few times a second from the main loop, so the blocking
//! driver is enough; no interrupt binding is needed.

use embassy_rp::i2c::{AbortReason, Blocking, Config, Error as RpI2cError, I2c, Instance, SclPin, SdaPin};
use embassy_rp::Peri;
use segclock_hal::{I2cBus, I2cBusError, I2cConfig};

fn map_error(e: RpI2cError) -> I2cBusError {
    match e {
        RpI2cError::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
        RpI2cError::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
        RpI2cError::Abort(_) => I2cBusError::Bus,
        _ => I2cBusError::Other,
    }
}

/// I2C master on one of the RP2040 controllers
pub struct RpI2c<'d, T: Instance> {
    i2c: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> RpI2c<'d, T> {
    /// Set up the controller in blocking mode
    pub fn new(
        peri: Peri<'d, T>,
        scl: Peri<'d, impl SclPin<T>>,
        sda: Peri<'d, impl SdaPin<T>>,
        config: I2cConfig,
    ) -> Self {
        let mut rp_config = Config::default();
        rp_config.frequency = config.frequency;
        Self {
            i2c: I2c::new_blocking(peri, scl, sda, rp_config),
        }
    }
}

impl<T: Instance> I2cBus for RpI2c<'_, T> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        self.i2c.blocking_write(address, data).map_err(map_error)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError> {
        self.i2c.blocking_read(address, buf).map_err(map_error)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError> {
        self.i2c
            .blocking_write_read(address, write_data, read_buf)
            .map_err(map_error)
    }
}
