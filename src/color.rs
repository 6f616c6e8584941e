//! Packed 24-bit RGB colors and the per-pixel math the patterns use.
//!
//! A [`Color`] stores red in bits 16-23, green in bits 8-15 and blue in
//! bits 0-7. Channel extraction is plain shift-and-mask with no gamma
//! correction, so values round-trip exactly through the pixel sink.

use crate::types::PatternError;
use palette::Srgb;

/// A 24-bit RGB color packed into a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(u32);

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const WHITE: Color = Color::rgb(255, 255, 255);

impl Color {
    const MASK: u32 = 0x00FF_FFFF;

    /// Packs three 8-bit channels.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Wraps a raw packed value. Bits above 23 are discarded.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Color(packed & Self::MASK)
    }

    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Halves every channel.
    #[inline]
    pub const fn dim(self) -> Self {
        Color::rgb(self.red() >> 1, self.green() >> 1, self.blue() >> 1)
    }

    /// Maps a wheel position to a fully saturated hue.
    ///
    /// The position is inverted and then walked through three linear
    /// segments of 85 positions each, red to blue, blue to green and green
    /// back to red. Every output has exactly two channels summing to 255
    /// (or one channel at 255 on a segment edge).
    pub const fn wheel(pos: u8) -> Self {
        let pos = 255 - pos;
        if pos < 85 {
            Color::rgb(255 - pos * 3, 0, pos * 3)
        } else if pos < 170 {
            let pos = pos - 85;
            Color::rgb(0, pos * 3, 255 - pos * 3)
        } else {
            let pos = pos - 170;
            Color::rgb(pos * 3, 255 - pos * 3, 0)
        }
    }

    /// Linear interpolation between `from` and `to` at `index / total`.
    ///
    /// Each channel is `(from * (total - index) + to * index) / total`, which
    /// keeps truncation to a single division. `index` above `total` is
    /// treated as `total`.
    ///
    /// # Errors
    /// * `ZeroSteps` - `total` is zero
    pub fn lerp(from: Color, to: Color, index: u32, total: u32) -> Result<Color, PatternError> {
        if total == 0 {
            return Err(PatternError::ZeroSteps);
        }

        let index = index.min(total) as u64;
        let total = total as u64;
        let channel = |a: u8, b: u8| -> u8 {
            ((a as u64 * (total - index) + b as u64 * index) / total) as u8
        };

        Ok(Color::rgb(
            channel(from.red(), to.red()),
            channel(from.green(), to.green()),
            channel(from.blue(), to.blue()),
        ))
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Color::rgb(red, green, blue)
    }
}

impl From<Srgb<u8>> for Color {
    #[inline]
    fn from(color: Srgb<u8>) -> Self {
        Color::rgb(color.red, color.green, color.blue)
    }
}

impl From<Color> for Srgb<u8> {
    #[inline]
    fn from(color: Color) -> Self {
        Srgb::new(color.red(), color.green(), color.blue())
    }
}

impl From<Srgb<f32>> for Color {
    /// Channels are clamped to 0.0-1.0 before scaling.
    fn from(color: Srgb<f32>) -> Self {
        let to_byte = |value: f32| (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        Color::rgb(to_byte(color.red), to_byte(color.green), to_byte(color.blue))
    }
}
