//! Clock application
//!
//! [`ClockApp`] owns the timer scheduler and everything the timer actions
//! act on. The firmware feeds it the tick count and its hardware
//! collaborators; the main loop is `poll -> refresh -> yield`.

use heapless::Vec;

use crate::blink::BlinkController;
use crate::config::ClockConfig;
use crate::display::Display;
use crate::keys::{Key, KeyEvent, Keypad, KEY_COUNT};
use crate::scheduler::{Action, Scheduler, TimerHandler, TimerId};
use crate::state::Mode;
use crate::time::{ClockTime, NO_TIME};
use crate::traits::{KeyInput, RtcClock, SegmentBus};

/// Everything the timer actions operate on
#[derive(Debug, Clone)]
pub struct ClockState {
    /// Display buffer and multiplexer position
    pub display: Display,
    /// Debounce state of every key
    pub keypad: Keypad,
    /// Current clock-setting mode
    pub mode: Mode,
    /// Last good time read from the RTC
    pub time: Option<ClockTime>,
    /// Time being edited while in a set mode
    pub edit: Option<ClockTime>,
    /// Blink controller
    pub blink: BlinkController,
    config: ClockConfig,
    /// Consecutive failed RTC reads
    rtc_failures: u8,
}

impl ClockState {
    /// Create the initial state: no time known, running mode
    pub fn new(config: ClockConfig) -> Self {
        Self {
            display: Display::new(),
            keypad: Keypad::new(config.keys),
            mode: Mode::Run,
            time: None,
            edit: None,
            blink: BlinkController::new(config.timing.blink_ms, config.display.blink_colon),
            config,
            rtc_failures: 0,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Consecutive failed RTC reads
    pub fn rtc_failures(&self) -> u8 {
        self.rtc_failures
    }

    /// Time currently on display, if any
    pub fn shown_time(&self) -> Option<ClockTime> {
        if self.mode.is_editing() {
            self.edit
        } else {
            self.time
        }
    }

    /// Write the shown time into the display buffer
    fn render(&mut self) {
        let text = self
            .shown_time()
            .map_or(NO_TIME, |t| t.format_hhmm(self.config.display.hour_format));
        self.display.set_text(&text);
    }

    fn poll_keys<R>(&mut self, pressed: [bool; KEY_COUNT], scheduler: &mut Scheduler, rtc: &mut R)
    where
        R: RtcClock + ?Sized,
    {
        let mut events: Vec<(Key, KeyEvent), KEY_COUNT> = Vec::new();
        self.keypad.poll(pressed, |key, event| {
            // At most one event per key per poll
            let _ = events.push((key, event));
        });

        for (key, event) in events {
            self.on_key(key, event, scheduler, rtc);
        }
    }

    fn on_key<R>(&mut self, key: Key, event: KeyEvent, scheduler: &mut Scheduler, rtc: &mut R)
    where
        R: RtcClock + ?Sized,
    {
        let prev = self.mode;
        let next = prev.transition(key, event);

        if next != prev {
            info!("mode {:?} -> {:?}", prev, next);
            self.mode = next;
            if !prev.is_editing() {
                self.edit = Some(self.time.unwrap_or(ClockTime::MIDNIGHT));
            }
            if next.is_editing() {
                self.blink.set_focus(next.focus(), &mut self.display);
            } else {
                self.commit(rtc);
            }
        } else if key == Key::Up {
            if let Some(edit) = self.edit.as_mut() {
                match self.mode {
                    Mode::SetHours => edit.increment_hours(),
                    Mode::SetMinutes => edit.increment_minutes(),
                    Mode::Run => {}
                }
            }
        }

        if self.mode.is_editing() {
            scheduler.schedule(
                TimerId::EditTimeout,
                self.config.timing.edit_timeout_ms,
                Action::ExitEdit,
            );
        }
    }

    fn exit_edit<R: RtcClock + ?Sized>(&mut self, rtc: &mut R) {
        // A timeout left armed by a key exit is harmless
        if !self.mode.is_editing() {
            return;
        }
        info!("edit timeout, mode {:?} -> Run", self.mode);
        self.mode = Mode::Run;
        self.commit(rtc);
    }

    /// Leave editing: write the edited time with seconds cleared
    fn commit<R: RtcClock + ?Sized>(&mut self, rtc: &mut R) {
        self.blink.set_focus(None, &mut self.display);
        let Some(edit) = self.edit.take() else {
            return;
        };

        let time = edit.with_seconds(0);
        match rtc.set_time(&time) {
            Ok(()) => info!("time set to {}:{}", time.hours(), time.minutes()),
            Err(e) => warn!("RTC write failed: {:?}", e),
        }
        self.time = Some(time);
        self.rtc_failures = 0;
    }

    fn read_rtc<R: RtcClock + ?Sized>(&mut self, rtc: &mut R) {
        if self.mode.is_editing() {
            trace!("RTC read skipped while editing");
            return;
        }

        match rtc.read_time() {
            Ok(time) => {
                if self.rtc_failures > 0 {
                    info!("RTC recovered after {} failures", self.rtc_failures);
                }
                self.time = Some(time);
                self.rtc_failures = 0;
            }
            Err(e) => {
                self.rtc_failures = self.rtc_failures.saturating_add(1);
                warn!("RTC read failed ({}): {:?}", self.rtc_failures, e);
                if self.rtc_failures >= self.config.rtc.fail_limit && self.time.is_some() {
                    error!("RTC lost, blanking time");
                    self.time = None;
                }
            }
        }
    }
}

/// Routes fired actions to the state and the hardware collaborators
struct Dispatch<'a, K: ?Sized, R: ?Sized> {
    state: &'a mut ClockState,
    keys: &'a mut K,
    rtc: &'a mut R,
}

impl<K, R> TimerHandler for Dispatch<'_, K, R>
where
    K: KeyInput + ?Sized,
    R: RtcClock + ?Sized,
{
    fn on_timer(&mut self, action: Action, scheduler: &mut Scheduler) {
        let timing = self.state.config.timing;
        match action {
            Action::PollKeys => {
                let pressed = self.keys.sample();
                self.state.poll_keys(pressed, scheduler, self.rtc);
                scheduler.schedule(TimerId::Keys, timing.key_poll_ms, Action::PollKeys);
            }
            Action::Blink => {
                let state = &mut *self.state;
                state.blink.fire(&mut state.display, scheduler);
            }
            Action::ReadRtc => {
                self.state.read_rtc(self.rtc);
                scheduler.schedule(TimerId::Rtc, timing.rtc_refresh_ms, Action::ReadRtc);
            }
            Action::ExitEdit => self.state.exit_edit(self.rtc),
        }
    }
}

/// The clock application
#[derive(Debug, Clone)]
pub struct ClockApp {
    scheduler: Scheduler,
    state: ClockState,
}

impl ClockApp {
    /// Create the application; nothing runs until [`ClockApp::start`]
    pub fn new(config: ClockConfig) -> Self {
        Self {
            scheduler: Scheduler::new(config.timing.tick_ms),
            state: ClockState::new(config),
        }
    }

    /// Application state
    pub fn state(&self) -> &ClockState {
        &self.state
    }

    /// Timer scheduler
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Arm the periodic timers, measuring time from `now`
    ///
    /// The first RTC read happens on the first poll after `now`.
    pub fn start(&mut self, now: u32) {
        let timing = self.state.config.timing;
        self.scheduler.reset(now);
        self.scheduler
            .schedule(TimerId::Keys, timing.key_poll_ms, Action::PollKeys);
        self.state.blink.start(&mut self.scheduler);
        self.scheduler.schedule(TimerId::Rtc, 0, Action::ReadRtc);
        self.state.render();
        info!("clock started at tick {}", now);
    }

    /// Run expired timers and update the display buffer
    ///
    /// Returns the number of timer actions fired.
    pub fn poll<K, R>(&mut self, now: u32, keys: &mut K, rtc: &mut R) -> usize
    where
        K: KeyInput + ?Sized,
        R: RtcClock + ?Sized,
    {
        let mut dispatch = Dispatch {
            state: &mut self.state,
            keys,
            rtc,
        };
        let fired = self.scheduler.poll(now, &mut dispatch);
        self.state.render();
        fired
    }

    /// Drive the next display digit
    pub fn refresh<B: SegmentBus + ?Sized>(&mut self, bus: &mut B) {
        self.state.display.refresh(bus);
    }
}
