//! Millisecond clock abstraction.
//!
//! The engine only ever compares two readings of a free-running counter, so a
//! wrapping `u32` is enough. Differences are taken with wrapping subtraction
//! and stay correct across the roughly 49 day rollover.

/// A reading of a wrapping millisecond counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Milliseconds elapsed since `earlier`, modulo 2^32.
    #[inline]
    pub fn wrapping_since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// This instant moved forward by `millis`, wrapping.
    #[inline]
    pub fn wrapping_add(self, millis: u32) -> Millis {
        Millis(self.0.wrapping_add(millis))
    }
}

impl From<u32> for Millis {
    #[inline]
    fn from(millis: u32) -> Self {
        Millis(millis)
    }
}

/// Trait for abstracting time sources.
pub trait TimeSource {
    /// Returns the current counter reading.
    fn now(&self) -> Millis;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline]
    fn now(&self) -> Millis {
        (**self).now()
    }
}
