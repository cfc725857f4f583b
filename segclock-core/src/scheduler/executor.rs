//! Timer scheduler
//!
//! Owns the timer slots and counts them down by the real time elapsed
//! between polls. Expired timers are disarmed and their actions handed to a
//! [`TimerHandler`] before [`Scheduler::poll`] returns.

use heapless::Vec;

use super::timer::{Action, Timer, TimerId, MAX_TIMERS};
use crate::tick::ticks_since;

/// Receiver for expired timer actions
///
/// The handler gets the scheduler back so an action can arm any slot,
/// including the one that just fired.
pub trait TimerHandler {
    /// Run the work for `action`
    fn on_timer(&mut self, action: Action, scheduler: &mut Scheduler);
}

impl<F> TimerHandler for F
where
    F: FnMut(Action, &mut Scheduler),
{
    fn on_timer(&mut self, action: Action, scheduler: &mut Scheduler) {
        self(action, scheduler)
    }
}

/// One-shot timer scheduler
///
/// Deadlines are relative countdowns, never absolute tick values, so a
/// wrapping tick counter cannot confuse it.
#[derive(Debug, Clone)]
pub struct Scheduler {
    /// Timer slots, indexed by [`TimerId::index`]
    timers: [Timer; MAX_TIMERS],
    /// Real time per tick in milliseconds
    tick_ms: u32,
    /// Tick value at the last poll that did work
    last_tick: u32,
}

impl Scheduler {
    /// Create a scheduler with every slot disarmed
    pub const fn new(tick_ms: u32) -> Self {
        Self {
            timers: [Timer::idle(); MAX_TIMERS],
            tick_ms,
            last_tick: 0,
        }
    }

    /// Set the reference tick used to measure the next poll's elapsed time
    pub fn reset(&mut self, now: u32) {
        self.last_tick = now;
    }

    /// Arm `id` to fire `action` after `timeout_ms`
    ///
    /// Replaces any previous arming of the slot.
    pub fn schedule(&mut self, id: TimerId, timeout_ms: u32, action: Action) {
        let slot = &mut self.timers[id.index()];
        slot.remaining_ms = timeout_ms.min(i32::MAX as u32) as i32;
        slot.action = Some(action);
    }

    /// Check if a slot is armed
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.timers[id.index()].is_armed()
    }

    /// Time left on an armed slot
    pub fn remaining_ms(&self, id: TimerId) -> Option<i32> {
        let slot = &self.timers[id.index()];
        slot.action.map(|_| slot.remaining_ms)
    }

    /// Advance all timers to `now` and fire the expired ones
    ///
    /// Does nothing if no tick has elapsed since the last poll, so calling
    /// it several times within one tick is harmless. Several ticks between
    /// polls are coalesced into one decrement; a timer that expired during
    /// the gap still fires exactly once.
    ///
    /// Returns the number of actions fired.
    pub fn poll<H>(&mut self, now: u32, handler: &mut H) -> usize
    where
        H: TimerHandler + ?Sized,
    {
        let elapsed = ticks_since(now, self.last_tick);
        if elapsed == 0 {
            return 0;
        }
        self.last_tick = now;

        let elapsed_ms = elapsed.saturating_mul(self.tick_ms).min(i32::MAX as u32) as i32;

        // Decrement everything first so a slot re-armed by a handler below is
        // not charged for time that passed before it was armed.
        let mut expired: Vec<(TimerId, Action), MAX_TIMERS> = Vec::new();
        for (id, timer) in TimerId::ALL.into_iter().zip(self.timers.iter_mut()) {
            let Some(action) = timer.action else {
                continue;
            };
            timer.remaining_ms = timer.remaining_ms.saturating_sub(elapsed_ms);
            if timer.remaining_ms <= 0 {
                *timer = Timer::idle();
                // One entry per slot at most
                let _ = expired.push((id, action));
            }
        }

        let mut fired = 0;
        for (id, action) in expired {
            // An earlier handler re-armed this slot; the new arming wins
            if self.is_armed(id) {
                trace!("timer {:?} re-armed before firing", id);
                continue;
            }
            trace!("timer fired: {:?}", action);
            handler.on_timer(action, self);
            fired += 1;
        }
        fired
    }
}
