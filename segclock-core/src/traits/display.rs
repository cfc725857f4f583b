//! Display line trait

use crate::display::{Digit, Segment};

/// Output lines of a multiplexed seven-segment panel
pub trait SegmentBus {
    /// Set one shared segment line
    fn set_segment(&mut self, segment: Segment, on: bool);

    /// Set the drive line selecting one digit
    fn set_drive(&mut self, digit: Digit, on: bool);
}
