//! Display panel drivers

pub mod seven_segment;

pub use seven_segment::{key_line, SegmentPanel, SETTLE_US};
