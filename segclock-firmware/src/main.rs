//! Segclock - Seven-Segment Clock Firmware
//!
//! Main firmware binary for an RP2040 driving a four-digit multiplexed
//! seven-segment display, three keys sharing segment lines, and a DS1307
//! real-time clock.
//!
//! Time-keeping is cooperative: SysTick advances a tick counter, and a
//! single task polls the software timers and refreshes the display on
//! every pass.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;
use {defmt_rtt as _, panic_probe as _};

use segclock_core::ClockApp;
use segclock_drivers::rtc::Ds1307;
use segclock_hal_rp2040::{I2cConfig, RpI2c};

mod board;
mod config;
mod tasks;
mod tick;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Segclock firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    // Segment lines in `Segment` bit order, then digit drives D0..D3
    let segments: [Peri<'static, AnyPin>; board::SEGMENT_LINES] = [
        p.PIN_2.into(),
        p.PIN_3.into(),
        p.PIN_4.into(),
        p.PIN_5.into(),
        p.PIN_6.into(),
        p.PIN_7.into(),
        p.PIN_8.into(),
        p.PIN_9.into(),
    ];
    let drives: [Peri<'static, AnyPin>; board::DRIVE_LINES] = [
        p.PIN_10.into(),
        p.PIN_11.into(),
        p.PIN_12.into(),
        p.PIN_13.into(),
    ];
    let panel = board::panel(segments, drives);
    info!("Display panel initialized");

    // RTC on I2C0: SCL=GPIO17, SDA=GPIO16
    let i2c = RpI2c::new(p.I2C0, p.PIN_17, p.PIN_16, I2cConfig::STANDARD);
    let mut rtc = Ds1307::new(i2c, config.rtc.address);
    match rtc.start() {
        Ok(true) => warn!("RTC oscillator was halted, time needs setting"),
        Ok(false) => info!("RTC running"),
        Err(e) => error!("RTC not responding: {:?}", e),
    }
    if let Err(e) = rtc.disable_square_wave() {
        warn!("RTC square-wave output not disabled: {:?}", e);
    }

    match cortex_m::Peripherals::take() {
        Some(mut core) => tick::start(&mut core.SYST, config.timing.tick_ms),
        None => error!("Core peripherals unavailable, clock cannot tick"),
    }

    let mut app = ClockApp::new(config);
    app.start(tick::now());

    spawner.spawn(tasks::clock_task(app, panel, rtc)).unwrap();

    info!("Clock task spawned, firmware running");
}
