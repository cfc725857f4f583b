//! Logging macros
//!
//! Thin wrappers around `defmt`. With the `defmt` feature disabled (host
//! tests, size builds) every macro compiles to nothing.

#![allow(unused_macros)]

macro_rules! trace {
    ($($arg:tt)*) => { __log!(trace, $($arg)*) };
}

macro_rules! debug {
    ($($arg:tt)*) => { __log!(debug, $($arg)*) };
}

macro_rules! info {
    ($($arg:tt)*) => { __log!(info, $($arg)*) };
}

macro_rules! warn {
    ($($arg:tt)*) => { __log!(warn, $($arg)*) };
}

macro_rules! error {
    ($($arg:tt)*) => { __log!(error, $($arg)*) };
}

#[cfg(feature = "defmt")]
macro_rules! __log {
    ($level:ident, $($arg:tt)*) => {
        defmt::$level!($($arg)*)
    };
}

// Arguments are type-checked but never evaluated
#[cfg(not(feature = "defmt"))]
macro_rules! __log {
    ($level:ident, $($arg:tt)*) => {{
        if false {
            let _ = core::format_args!($($arg)*);
        }
    }};
}
