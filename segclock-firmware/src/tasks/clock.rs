//! Clock main loop
//!
//! Polls the software timers and drives one display digit per pass. The
//! loop never sleeps; it yields so the executor stays responsive.

use defmt::*;
use embassy_futures::yield_now;

use segclock_core::ClockApp;

use crate::board::{Panel, Rtc};
use crate::tick;

/// Clock task - runs the application forever
#[embassy_executor::task]
pub async fn clock_task(mut app: ClockApp, mut panel: Panel, mut rtc: Rtc) {
    info!("Clock task started");

    loop {
        app.poll(tick::now(), &mut panel, &mut rtc);
        app.refresh(&mut panel);
        yield_now().await;
    }
}
