//! Tick source
//!
//! The only state shared between interrupt and main-loop context. The tick
//! interrupt calls [`TickSource::on_overflow`]; the main loop reads
//! [`TickSource::now`].
//!
//! Both words have exactly one writer (the interrupt), so plain 32-bit
//! atomic loads and stores are enough. No read-modify-write is needed, which
//! keeps this usable on Cortex-M0+ without a critical section.

use portable_atomic::{AtomicU32, Ordering};

/// Tick counter with an optional hardware-overflow subdivider
///
/// A hardware timer that overflows every 5 ms combined with a divider of 5
/// yields one visible tick every 25 ms.
pub struct TickSource {
    /// Hardware overflows per visible tick
    divider: u32,
    /// Overflows since the last visible tick
    sub: AtomicU32,
    /// Visible tick counter, wraps on overflow
    ticks: AtomicU32,
}

impl TickSource {
    /// Create a tick source
    ///
    /// A `divider` of 0 is treated as 1.
    pub const fn new(divider: u32) -> Self {
        Self {
            divider: if divider == 0 { 1 } else { divider },
            sub: AtomicU32::new(0),
            ticks: AtomicU32::new(0),
        }
    }

    /// Record one hardware overflow
    ///
    /// Interrupt context only. Must not be called from two contexts.
    pub fn on_overflow(&self) {
        let sub = self.sub.load(Ordering::Relaxed) + 1;
        if sub >= self.divider {
            self.sub.store(0, Ordering::Relaxed);
            let ticks = self.ticks.load(Ordering::Relaxed);
            self.ticks.store(ticks.wrapping_add(1), Ordering::Release);
        } else {
            self.sub.store(sub, Ordering::Relaxed);
        }
    }

    /// Current tick count
    pub fn now(&self) -> u32 {
        self.ticks.load(Ordering::Acquire)
    }

    /// Hardware overflows per visible tick
    pub fn divider(&self) -> u32 {
        self.divider
    }
}

/// Ticks elapsed from `earlier` to `later`, correct across wraparound
pub fn ticks_since(later: u32, earlier: u32) -> u32 {
    later.wrapping_sub(earlier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divider_subdivides_overflows() {
        let source = TickSource::new(5);

        for _ in 0..4 {
            source.on_overflow();
        }
        assert_eq!(source.now(), 0);

        source.on_overflow();
        assert_eq!(source.now(), 1);

        for _ in 0..10 {
            source.on_overflow();
        }
        assert_eq!(source.now(), 3);
    }

    #[test]
    fn test_zero_divider_is_one() {
        let source = TickSource::new(0);
        assert_eq!(source.divider(), 1);
        source.on_overflow();
        source.on_overflow();
        assert_eq!(source.now(), 2);
    }

    #[test]
    fn test_ticks_since_wraps() {
        assert_eq!(ticks_since(5, 2), 3);
        assert_eq!(ticks_since(1, u32::MAX), 2);
        assert_eq!(ticks_since(7, 7), 0);
    }
}
