//! Shared test infrastructure for neo-patterns integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use neo_patterns::{BLACK, Color, CompletionHandler, Millis, PatternState, PixelSink, TimeSource};

// ============================================================================
// Mock Pixel Sink
// ============================================================================

/// Mock strip that records every flushed frame
pub struct RecordingSink<const N: usize> {
    pixels: heapless::Vec<Color, N>,
    frames: heapless::Vec<heapless::Vec<Color, N>, 64>,
    flushes: usize,
}

impl<const N: usize> RecordingSink<N> {
    pub fn new(len: usize) -> Self {
        let mut pixels = heapless::Vec::new();
        pixels.resize(len.min(N), BLACK).unwrap();
        Self {
            pixels,
            frames: heapless::Vec::new(),
            flushes: 0,
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// First 64 flushed frames
    pub fn frames(&self) -> &[heapless::Vec<Color, N>] {
        &self.frames
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl<const N: usize> PixelSink for RecordingSink<N> {
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
        let _ = self.frames.push(self.pixels.clone());
        self.flushes += 1;
    }
}

// ============================================================================
// Mock Completion Handler
// ============================================================================

/// Counts completions, optionally reversing the pattern on each one
#[derive(Default)]
pub struct CountingHandler {
    pub completions: u32,
    pub reverse: bool,
}

impl CountingHandler {
    pub fn reversing() -> Self {
        Self {
            completions: 0,
            reverse: true,
        }
    }
}

impl CompletionHandler for CountingHandler {
    fn on_complete(&mut self, state: &mut PatternState) {
        self.completions += 1;
        if self.reverse {
            state.reverse();
        }
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<Millis>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(Millis(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u32) {
        self.current_time
            .set(self.current_time.get().wrapping_add(millis));
    }

    pub fn set_time(&self, time: Millis) {
        self.current_time.set(time);
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Millis {
        self.current_time.get()
    }
}
