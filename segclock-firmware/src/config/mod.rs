//! Configuration loading
//!
//! The configuration is compiled in from clock.toml, which build.rs has
//! already validated. A parse failure here still falls back to defaults
//! rather than stopping the clock.

use defmt::*;

use segclock_core::config::{parse_config, ClockConfig};

/// Embedded configuration (compiled into firmware)
/// Edit clock.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../clock.toml");

/// Parse the embedded configuration
pub fn load_config() -> ClockConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: tick={}ms, keys={}/{}/{}, rtc={:#x}",
                config.timing.tick_ms,
                config.keys.press,
                config.keys.hold,
                config.keys.repeat,
                config.rtc.address
            );
            config
        }
        Err(e) => {
            warn!("Invalid embedded config ({:?}), using defaults", e);
            ClockConfig::default()
        }
    }
}
