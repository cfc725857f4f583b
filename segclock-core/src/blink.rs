//! Blink controller
//!
//! A self-re-arming timer action. Each firing toggles the visibility of the
//! focused digit pair, or the colon when nothing is focused, and schedules
//! the next firing.

use crate::display::{Digit, Display};
use crate::scheduler::{Action, Scheduler, TimerId};

/// Periodic digit / colon blinker
///
/// With a focus, the two focused digits have their visibility toggled. In
/// Run mode there is no focus, and only the colon dot (the `dots` indicator
/// bit on digit 1) blinks; every digit stays visible.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkController {
    interval_ms: u32,
    focus: Option<[Digit; 2]>,
    blink_colon: bool,
}

impl BlinkController {
    /// Create an unfocused blinker
    pub fn new(interval_ms: u32, blink_colon: bool) -> Self {
        Self {
            interval_ms,
            focus: None,
            blink_colon,
        }
    }

    /// Half-period in milliseconds
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Digits currently blinking
    pub fn focus(&self) -> Option<[Digit; 2]> {
        self.focus
    }

    /// Blink `pair` (or the colon, with `None`) from now on
    ///
    /// Every digit is made visible so the new focus starts lit.
    pub fn set_focus(&mut self, pair: Option<[Digit; 2]>, display: &mut Display) {
        self.focus = pair;
        display.show_all();
    }

    /// Arm the first firing
    pub fn start(&self, scheduler: &mut Scheduler) {
        scheduler.schedule(TimerId::Blink, self.interval_ms, Action::Blink);
    }

    /// Timer action: toggle and re-arm
    pub fn fire(&mut self, display: &mut Display, scheduler: &mut Scheduler) {
        match self.focus {
            Some(pair) => {
                for digit in pair {
                    let visible = &mut display.visible[digit.index()];
                    *visible = !*visible;
                }
            }
            None if self.blink_colon => display.dots = !display.dots,
            None => display.dots = true,
        }
        self.start(scheduler);
    }
}
