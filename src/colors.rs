//! Color space conversion helpers.
//!
//! HSV is often a more natural way to pick a strip color than raw channels.
//! These helpers go through palette's HSV model and pack the result into a
//! [`Color`] ready for the engine.

use crate::color::Color;
use palette::{FromColor, Hsv, Srgb};

/// Creates a packed color from HSV (Hue, Saturation, Value) components.
///
/// Hue is in degrees, saturation and value in 0.0-1.0.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let hsv = Hsv::new(hue, saturation, value);
    let rgb: Srgb<f32> = Srgb::from_color(hsv);
    Color::from(rgb)
}

/// Creates a packed color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Color {
    hsv(hue, 1.0, 1.0)
}
