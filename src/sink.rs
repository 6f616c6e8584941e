//! Pixel output abstraction.
//!
//! Defines the [`PixelSink`] trait the engine draws through, plus
//! [`BufferSink`], a fixed-capacity in-memory strip for hosts without LED
//! hardware.

use crate::color::{BLACK, Color};
use heapless::Vec;

/// Trait for abstracting addressable LED strip hardware.
///
/// Implement this for your strip driver (WS2812 over SPI, RMT, PIO, etc.).
/// Writes are buffered; nothing reaches the LEDs until [`flush`](Self::flush).
pub trait PixelSink {
    /// Number of pixels on the strip. Must not change while the engine runs.
    fn pixel_count(&self) -> usize;

    /// Buffers `color` for pixel `index`. Out-of-range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: Color);

    /// Returns the buffered color of pixel `index` (`BLACK` when out of range).
    fn pixel(&self, index: usize) -> Color;

    /// Pushes the buffered colors to the hardware.
    ///
    /// Must not block for longer than the wire time of one frame. Handle any
    /// transport errors internally - this method cannot fail.
    fn flush(&mut self);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    #[inline]
    fn pixel_count(&self) -> usize {
        (**self).pixel_count()
    }

    #[inline]
    fn set_pixel(&mut self, index: usize, color: Color) {
        (**self).set_pixel(index, color)
    }

    #[inline]
    fn pixel(&self, index: usize) -> Color {
        (**self).pixel(index)
    }

    #[inline]
    fn flush(&mut self) {
        (**self).flush()
    }
}

/// An in-memory strip of up to `N` pixels.
///
/// Keeps the working buffer and a copy of the last flushed frame, so callers
/// can observe exactly what the hardware would have shown.
#[derive(Debug, Clone)]
pub struct BufferSink<const N: usize> {
    pixels: Vec<Color, N>,
    shown: Vec<Color, N>,
    flushes: u32,
}

impl<const N: usize> BufferSink<N> {
    /// Creates a blank strip of `len` pixels, capped at `N`.
    pub fn new(len: usize) -> Self {
        let len = len.min(N);
        let mut pixels = Vec::new();
        pixels.resize(len, BLACK).ok();
        let shown = pixels.clone();

        Self {
            pixels,
            shown,
            flushes: 0,
        }
    }

    /// Working buffer, including writes not yet flushed.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// The last flushed frame.
    pub fn shown(&self) -> &[Color] {
        &self.shown
    }

    /// Number of flushes since creation.
    pub fn flush_count(&self) -> u32 {
        self.flushes
    }
}

impl<const N: usize> PixelSink for BufferSink<N> {
    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn pixel(&self, index: usize) -> Color {
        self.pixels.get(index).copied().unwrap_or(BLACK)
    }

    fn flush(&mut self) {
        self.shown.clone_from(&self.pixels);
        self.flushes = self.flushes.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RED;

    #[test]
    fn length_is_capped_at_capacity() {
        let sink = BufferSink::<4>::new(10);
        assert_eq!(sink.pixel_count(), 4);
    }

    #[test]
    fn out_of_range_access_is_tolerated() {
        let mut sink = BufferSink::<4>::new(2);
        sink.set_pixel(5, RED);
        assert_eq!(sink.pixel(5), BLACK);
        assert_eq!(sink.pixels(), &[BLACK, BLACK]);
    }

    #[test]
    fn flush_publishes_working_buffer() {
        let mut sink = BufferSink::<4>::new(2);
        sink.set_pixel(1, RED);
        assert_eq!(sink.shown(), &[BLACK, BLACK]);

        sink.flush();
        assert_eq!(sink.shown(), &[BLACK, RED]);
        assert_eq!(sink.flush_count(), 1);
    }
}
