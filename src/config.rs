//! Default strip and timing settings.
//!
//! These mirror the stock controller firmware: a seven pixel ring, wipes at
//! 50 ms per pixel and the three rainbow speeds served by `/X`, `/Y` and `/Z`.

/// Pixels on the stock ring.
pub const DEFAULT_PIXEL_COUNT: usize = 7;

/// Step interval for the fixed-color wipes (`/R`, `/G`, `/B`) and boot wipes.
pub const WIPE_INTERVAL_MS: u32 = 50;

/// Step interval for a wipe with caller-supplied channels (`/set`).
pub const CUSTOM_WIPE_INTERVAL_MS: u32 = 30;

pub const SCANNER_INTERVAL_MS: u32 = 30;

pub const RAINBOW_INTERVAL_MS: u32 = 20;
pub const RAINBOW_FAST_INTERVAL_MS: u32 = 10;
pub const RAINBOW_SLOW_INTERVAL_MS: u32 = 50;

/// Rainbow shown once the controller is up and serving requests.
pub const SERVING_RAINBOW_INTERVAL_MS: u32 = 16;

pub const HELP_TEXT: &str = "/R=Red, /G=Green, /B=Blue, /W=White Scanner, /X=Rainbow, /Y= Rainbow Cycle, /Z=Chaser Rainbow, /set=RGB";
