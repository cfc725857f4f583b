//! Parser for the `clock.toml` subset
//!
//! This is a minimal, allocation-free parser that handles only what the
//! clock configuration needs. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - `[section]` headers: `timing`, `keys`, `display`, `rtc`
//! - `key = value` pairs with integer (decimal or `0x` hex), boolean or
//!   double-quoted string values
//! - Comments (`# ...`), whole-line or trailing
//!
//! Keys that are absent keep their defaults. The result is validated with
//! [`ClockConfig::validate`].

use super::types::{ClockConfig, ConfigError, HourFormat};

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Timing,
    Keys,
    Display,
    Rtc,
}

/// Parse configuration text into a validated [`ClockConfig`]
pub fn parse_config(input: &str) -> Result<ClockConfig, ConfigError> {
    let mut config = ClockConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ConfigError::InvalidValue)?;
        apply(&mut config, section, key.trim(), value.trim())?;
    }

    config.validate()?;
    Ok(config)
}

fn parse_section_header(line: &str) -> Result<Section, ConfigError> {
    let name = line
        .strip_prefix('[')
        .and_then(|l| l.strip_suffix(']'))
        .ok_or(ConfigError::InvalidSection)?;

    match name.trim() {
        "timing" => Ok(Section::Timing),
        "keys" => Ok(Section::Keys),
        "display" => Ok(Section::Display),
        "rtc" => Ok(Section::Rtc),
        _ => Err(ConfigError::InvalidSection),
    }
}

fn apply(
    config: &mut ClockConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    match (section, key) {
        (Section::Timing, "tick_ms") => config.timing.tick_ms = parse_u32(value)?,
        (Section::Timing, "key_poll_ms") => config.timing.key_poll_ms = parse_u32(value)?,
        (Section::Timing, "blink_ms") => config.timing.blink_ms = parse_u32(value)?,
        (Section::Timing, "rtc_refresh_ms") => config.timing.rtc_refresh_ms = parse_u32(value)?,
        (Section::Timing, "edit_timeout_ms") => {
            config.timing.edit_timeout_ms = parse_u32(value)?
        }

        (Section::Keys, "press") => config.keys.press = narrow(parse_u32(value)?)?,
        (Section::Keys, "hold") => config.keys.hold = narrow(parse_u32(value)?)?,
        (Section::Keys, "repeat") => config.keys.repeat = narrow(parse_u32(value)?)?,

        (Section::Display, "hour_format") => {
            config.display.hour_format = match parse_str(value)? {
                "24h" => HourFormat::H24,
                "12h" => HourFormat::H12,
                _ => return Err(ConfigError::InvalidValue),
            }
        }
        (Section::Display, "blink_colon") => config.display.blink_colon = parse_bool(value)?,

        (Section::Rtc, "address") => config.rtc.address = narrow(parse_u32(value)?)?,
        (Section::Rtc, "fail_limit") => config.rtc.fail_limit = narrow(parse_u32(value)?)?,

        _ => return Err(ConfigError::UnknownKey),
    }
    Ok(())
}

/// Drop a trailing comment, ignoring `#` inside a quoted string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_u32(value: &str) -> Result<u32, ConfigError> {
    // TOML allows underscores as digit separators
    let mut digits = [0u8; 16];
    let mut len = 0;
    for b in value.bytes().filter(|&b| b != b'_') {
        *digits.get_mut(len).ok_or(ConfigError::InvalidValue)? = b;
        len += 1;
    }
    let text = core::str::from_utf8(&digits[..len]).map_err(|_| ConfigError::InvalidValue)?;

    let parsed = match text.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse::<u32>(),
    };
    parsed.map_err(|_| ConfigError::InvalidValue)
}

fn narrow<T: TryFrom<u32>>(value: u32) -> Result<T, ConfigError> {
    T::try_from(value).map_err(|_| ConfigError::OutOfRange)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

fn parse_str(value: &str) -> Result<&str, ConfigError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ConfigError::InvalidValue)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Segclock configuration
[timing]
tick_ms = 25
key_poll_ms = 50        # slower key scan
blink_ms = 400
rtc_refresh_ms = 1_000
edit_timeout_ms = 20000

[keys]
press = 3
hold = 12
repeat = 4

[display]
hour_format = "12h"
blink_colon = false

[rtc]
address = 0x68
fail_limit = 2
"#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(SAMPLE).unwrap();

        assert_eq!(config.timing.tick_ms, 25);
        assert_eq!(config.timing.key_poll_ms, 50);
        assert_eq!(config.timing.blink_ms, 400);
        assert_eq!(config.timing.rtc_refresh_ms, 1000);
        assert_eq!(config.timing.edit_timeout_ms, 20_000);
        assert_eq!(
            config.keys,
            crate::config::KeyTiming {
                press: 3,
                hold: 12,
                repeat: 4
            }
        );
        assert_eq!(config.display.hour_format, HourFormat::H12);
        assert!(!config.display.blink_colon);
        assert_eq!(config.rtc.address, 0x68);
        assert_eq!(config.rtc.fail_limit, 2);
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), ClockConfig::default());
        assert_eq!(parse_config("# nothing\n\n").unwrap(), ClockConfig::default());
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            parse_config("[heater]\nmax = 1"),
            Err(ConfigError::InvalidSection)
        );
        assert_eq!(parse_config("[timing"), Err(ConfigError::InvalidSection));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_config("[keys]\nlong_press = 3"),
            Err(ConfigError::UnknownKey)
        );
        // Keys outside any section are not accepted
        assert_eq!(parse_config("tick_ms = 25"), Err(ConfigError::UnknownKey));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_config("[timing]\ntick_ms = fast"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nhour_format = \"13h\""),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nblink_colon = yes"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(parse_config("[keys]\npress"), Err(ConfigError::InvalidValue));
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(
            parse_config("[keys]\npress = 70000"),
            Err(ConfigError::OutOfRange)
        );
        assert_eq!(
            parse_config("[rtc]\naddress = 0x100"),
            Err(ConfigError::OutOfRange)
        );
        assert_eq!(
            parse_config("[keys]\nhold = 0"),
            Err(ConfigError::OutOfRange)
        );
    }

    #[test]
    fn test_hash_inside_string_is_not_a_comment() {
        assert_eq!(strip_comment(r#"a = "x#y" # c"#), r#"a = "x#y" "#);
    }
}
