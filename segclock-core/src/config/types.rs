//! Configuration type definitions

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed `[section]` header
    InvalidSection,
    /// Key not valid in its section
    UnknownKey,
    /// Value could not be parsed for its key
    InvalidValue,
    /// Value parsed but outside its permitted range
    OutOfRange,
}

/// Key thresholds, in key-poll cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyTiming {
    /// Stable samples needed to confirm a press (and a release)
    pub press: u16,
    /// Further samples before the hold event
    pub hold: u16,
    /// Samples between auto-repeat events
    pub repeat: u16,
}

impl KeyTiming {
    /// 50 ms press, 500 ms hold, 150 ms repeat at a 25 ms poll
    pub const DEFAULT: Self = Self {
        press: 2,
        hold: 20,
        repeat: 6,
    };
}

impl Default for KeyTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scheduler and timer intervals, all in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Real time per tick
    pub tick_ms: u32,
    /// Key sampling cadence
    pub key_poll_ms: u32,
    /// Blink half-period
    pub blink_ms: u32,
    /// RTC read cadence
    pub rtc_refresh_ms: u32,
    /// Inactivity before clock-setting mode is left
    pub edit_timeout_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 25,
            key_poll_ms: 25,
            blink_ms: 500,
            rtc_refresh_ms: 250,
            edit_timeout_ms: 30_000,
        }
    }
}

/// Hour display convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourFormat {
    /// 00-23
    #[default]
    H24,
    /// 01-12
    H12,
}

/// Display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Hour display convention
    pub hour_format: HourFormat,
    /// Blink the colon while showing the time (steady otherwise)
    pub blink_colon: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hour_format: HourFormat::H24,
            blink_colon: true,
        }
    }
}

/// RTC settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RtcConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Consecutive failed reads before the time is dropped
    pub fail_limit: u8,
}

impl Default for RtcConfig {
    fn default() -> Self {
        Self {
            address: 0x68,
            fail_limit: 4,
        }
    }
}

/// Complete clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    pub timing: TimingConfig,
    pub keys: KeyTiming,
    pub display: DisplayConfig,
    pub rtc: RtcConfig,
}

/// Largest tick the firmware's SysTick reload can express
pub const MAX_TICK_MS: u32 = 500;

impl ClockConfig {
    /// Check every value against its permitted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timing;
        if t.tick_ms == 0 || t.tick_ms > MAX_TICK_MS {
            return Err(ConfigError::OutOfRange);
        }
        let intervals = [t.key_poll_ms, t.blink_ms, t.rtc_refresh_ms, t.edit_timeout_ms];
        if intervals.iter().any(|&ms| ms < t.tick_ms || ms > i32::MAX as u32) {
            return Err(ConfigError::OutOfRange);
        }

        let k = &self.keys;
        if k.press == 0 || k.hold == 0 || k.repeat == 0 {
            return Err(ConfigError::OutOfRange);
        }

        if !(0x08..=0x77).contains(&self.rtc.address) || self.rtc.fail_limit == 0 {
            return Err(ConfigError::OutOfRange);
        }

        Ok(())
    }
}
