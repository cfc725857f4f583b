//! Scheduler tick from SysTick
//!
//! SysTick overflows [`DIVIDER`] times per scheduler tick; the exception
//! handler is the only writer of the tick counter.

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use cortex_m_rt::exception;
use defmt::*;

use segclock_core::tick::TickSource;

/// SysTick overflows per scheduler tick
pub const DIVIDER: u32 = 5;

/// Largest SysTick reload value (24 bits)
const MAX_RELOAD: u32 = 0x00FF_FFFF;

static TICKS: TickSource = TickSource::new(DIVIDER);

/// Start SysTick so the tick counter advances every `tick_ms`
pub fn start(syst: &mut SYST, tick_ms: u32) {
    let cycles_per_ms = embassy_rp::clocks::clk_sys_freq() / 1000;
    let reload = (cycles_per_ms * tick_ms / TICKS.divider())
        .saturating_sub(1)
        .min(MAX_RELOAD);

    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(reload);
    syst.clear_current();
    syst.enable_interrupt();
    syst.enable_counter();

    info!("SysTick started: reload={}, tick={}ms", reload, tick_ms);
}

/// Current scheduler tick
pub fn now() -> u32 {
    TICKS.now()
}

#[exception]
fn SysTick() {
    TICKS.on_overflow();
}
