//! Build script for segclock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clock.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted in each section, with their integer range (if numeric)
const SCHEMA: &[(&str, &[(&str, Option<(i64, i64)>)])] = &[
    (
        "timing",
        &[
            ("tick_ms", Some((1, 500))),
            ("key_poll_ms", Some((1, i32::MAX as i64))),
            ("blink_ms", Some((1, i32::MAX as i64))),
            ("rtc_refresh_ms", Some((1, i32::MAX as i64))),
            ("edit_timeout_ms", Some((1, i32::MAX as i64))),
        ],
    ),
    (
        "keys",
        &[
            ("press", Some((1, u16::MAX as i64))),
            ("hold", Some((1, u16::MAX as i64))),
            ("repeat", Some((1, u16::MAX as i64))),
        ],
    ),
    ("display", &[("hour_format", None), ("blink_colon", None)]),
    (
        "rtc",
        &[("address", Some((0x08, 0x77))), ("fail_limit", Some((1, 255)))],
    ),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Validate clock.toml configuration at compile time
fn validate_config() {
    // Re-run if clock.toml changes
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    if !config_path.exists() {
        fail(
            "clock.toml not found!",
            &["The firmware embeds clock.toml from the crate directory.".to_string()],
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read clock.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in clock.toml",
            &e.to_string().lines().map(String::from).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    validate_schema(&config, &mut errors);
    validate_timing(&config, &mut errors);
    validate_display(&config, &mut errors);

    if !errors.is_empty() {
        fail("Invalid configuration in clock.toml", &errors);
    }
}

/// Unknown sections / keys and integer ranges
fn validate_schema(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        errors.push("top level must be a table".to_string());
        return;
    };

    for (section, value) in root {
        let Some((_, keys)) = SCHEMA.iter().find(|(name, _)| *name == section.as_str()) else {
            errors.push(format!("unknown section [{}]", section));
            continue;
        };
        let Some(table) = value.as_table() else {
            errors.push(format!("[{}] must be a table", section));
            continue;
        };

        for (key, value) in table {
            let Some((_, range)) = keys.iter().find(|(name, _)| *name == key.as_str()) else {
                errors.push(format!("[{}] unknown key '{}'", section, key));
                continue;
            };
            let Some((min, max)) = range else {
                continue;
            };
            match value.as_integer() {
                Some(v) if (*min..=*max).contains(&v) => {}
                Some(_) => errors.push(format!(
                    "[{}] {} must be {}-{}",
                    section, key, min, max
                )),
                None => errors.push(format!("[{}] {} must be an integer", section, key)),
            }
        }
    }
}

fn get_int(config: &toml::Value, section: &str, key: &str, default: i64) -> i64 {
    config
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_integer())
        .unwrap_or(default)
}

/// Every interval must span at least one tick
fn validate_timing(config: &toml::Value, errors: &mut Vec<String>) {
    let tick_ms = get_int(config, "timing", "tick_ms", 25);
    for (key, default) in [
        ("key_poll_ms", 25),
        ("blink_ms", 500),
        ("rtc_refresh_ms", 250),
        ("edit_timeout_ms", 30_000),
    ] {
        if get_int(config, "timing", key, default) < tick_ms {
            errors.push(format!("[timing] {} is shorter than tick_ms", key));
        }
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = config.get("display") else {
        return;
    };

    match display.get("hour_format") {
        None => {}
        Some(toml::Value::String(s)) if s == "24h" || s == "12h" => {}
        Some(_) => errors.push("[display] hour_format must be \"24h\" or \"12h\"".to_string()),
    }

    match display.get("blink_colon") {
        None | Some(toml::Value::Boolean(_)) => {}
        Some(_) => errors.push("[display] blink_colon must be true or false".to_string()),
    }
}
