//! Four-digit multiplexed seven-segment display
//!
//! All digits share eight segment lines; each digit has its own drive line.
//! Only one digit is driven per refresh, and refreshing fast enough makes
//! all four appear lit.

pub mod glyph;
pub mod mux;

pub use glyph::{glyph, Segment, GLYPHS};
pub use mux::{Digit, Display, DIGIT_COUNT, DOT_DIGIT};
