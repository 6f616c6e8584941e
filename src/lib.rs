#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PatternEngine`**: Drives one LED strip through the built-in patterns, one frame per interval
//! - **`Pattern`**: Which animation is running (`RainbowCycle`, `TheaterChase`, `ColorWipe`, `Scanner`, `Fade`)
//! - **`PatternState`**: Index, cycle length, direction and colors of the active pattern
//! - **`PixelSink`**: Trait to implement for your strip hardware
//! - **`CompletionHandler`**: Called each time a pattern finishes a full traversal
//! - **`TimeSource`**: Trait to implement for your millisecond clock
//! - **`PatternCommand`**: Value form of the engine's configuration calls
//! - **`Route`**: The controller's GET surface, resolved to a `PatternCommand`
//!
//! Colors are packed 24-bit RGB ([`Color`]); conversions to and from
//! `palette::Srgb` are provided.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod fmt;

pub mod color;
pub mod colors;
pub mod command;
pub mod config;
pub mod engine;
pub mod handler;
pub mod sink;
pub mod time;
pub mod types;

pub use color::{BLACK, BLUE, Color, GREEN, RED, WHITE};
pub use command::{BootStage, CommandError, PatternCommand, Reply, Route, handle_request};
pub use engine::{PatternEngine, PatternState, RAINBOW_STEPS};
pub use handler::{CompletionHandler, FnHandler, ReverseOnComplete};
pub use sink::{BufferSink, PixelSink};
pub use time::{Millis, TimeSource};
pub use types::{Direction, Pattern, PatternError, StepOutcome};
