//! Command-based control for the engine.
//!
//! [`PatternCommand`] is a value form of the engine's configuration calls, so
//! pattern changes can be queued, sent over a channel or produced by a
//! request router. [`Route`] and [`handle_request`] implement the controller's
//! small GET surface on top of it.

use crate::color::{BLUE, Color, GREEN, RED, WHITE};
use crate::config;
use crate::engine::PatternEngine;
use crate::fmt::{debug, warning};
use crate::handler::CompletionHandler;
use crate::sink::PixelSink;
use crate::types::{Direction, PatternError};

/// Actions for controlling the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternCommand {
    ColorWipe {
        color: Color,
        interval: u32,
        direction: Direction,
    },
    RainbowCycle {
        interval: u32,
        direction: Direction,
    },
    TheaterChase {
        color1: Color,
        color2: Color,
        interval: u32,
        direction: Direction,
    },
    Scanner {
        color: Color,
        interval: u32,
    },
    Fade {
        color1: Color,
        color2: Color,
        steps: u16,
        interval: u32,
        direction: Direction,
    },
    /// Flip the running pattern's direction.
    Reverse,
    /// Stop and fill the whole strip with one color.
    Fill(Color),
    /// Stop stepping, keep the pixels.
    Stop,
}

impl PatternCommand {
    /// Forward color wipe.
    pub const fn color_wipe(color: Color, interval: u32) -> Self {
        PatternCommand::ColorWipe {
            color,
            interval,
            direction: Direction::Forward,
        }
    }

    /// Forward rainbow cycle.
    pub const fn rainbow_cycle(interval: u32) -> Self {
        PatternCommand::RainbowCycle {
            interval,
            direction: Direction::Forward,
        }
    }

    pub const fn scanner(color: Color, interval: u32) -> Self {
        PatternCommand::Scanner { color, interval }
    }
}

/// Controller start-up phases, each shown as its own pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootStage {
    /// Powered up, nothing initialised yet.
    Starting,
    /// Joining the wireless network.
    Connecting,
    /// Network joined, server not yet listening.
    Connected,
    /// Accepting requests.
    Serving,
}

impl BootStage {
    /// Stages in the order the controller passes through them.
    pub const SEQUENCE: [BootStage; 4] = [
        BootStage::Starting,
        BootStage::Connecting,
        BootStage::Connected,
        BootStage::Serving,
    ];

    /// Pattern that signals this stage on the strip.
    pub const fn command(self) -> PatternCommand {
        match self {
            BootStage::Starting => PatternCommand::color_wipe(RED, config::WIPE_INTERVAL_MS),
            BootStage::Connecting => PatternCommand::color_wipe(GREEN, config::WIPE_INTERVAL_MS),
            BootStage::Connected => PatternCommand::color_wipe(BLUE, config::WIPE_INTERVAL_MS),
            BootStage::Serving => {
                PatternCommand::rainbow_cycle(config::SERVING_RAINBOW_INTERVAL_MS)
            }
        }
    }
}

/// Errors from resolving or applying a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Path is not one of the known routes.
    UnknownRoute,
    /// A required query argument is absent.
    MissingArgument(&'static str),
    /// A query argument is not an integer in 0-255.
    InvalidArgument(&'static str),
    /// The engine refused the resulting command.
    Rejected(PatternError),
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommandError::UnknownRoute => write!(f, "unknown route"),
            CommandError::MissingArgument(name) => write!(f, "missing argument '{}'", name),
            CommandError::InvalidArgument(name) => {
                write!(f, "argument '{}' must be an integer in 0-255", name)
            }
            CommandError::Rejected(err) => write!(f, "pattern rejected: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

impl From<PatternError> for CommandError {
    fn from(err: PatternError) -> Self {
        CommandError::Rejected(err)
    }
}

/// A resolved request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Route {
    /// Usage text.
    Help,
    /// A pattern change, with the label echoed back to the client.
    Command {
        command: PatternCommand,
        label: &'static str,
    },
}

impl Route {
    /// Resolves a request path and its query string (with or without the
    /// leading `?`).
    ///
    /// | Path    | Pattern                                   |
    /// |---------|-------------------------------------------|
    /// | `/`, `/help` | help text                            |
    /// | `/R` `/G` `/B` | red, green, blue wipe               |
    /// | `/W`    | white scanner                             |
    /// | `/X` `/Y` `/Z` | rainbow at normal, fast, slow speed |
    /// | `/set`  | wipe in the color given by `R`, `G`, `B`  |
    pub fn parse(path: &str, query: &str) -> Result<Route, CommandError> {
        let wipe = |color| PatternCommand::color_wipe(color, config::WIPE_INTERVAL_MS);
        let rainbow = PatternCommand::rainbow_cycle;

        let (command, label) = match path {
            "" | "/" | "/help" => return Ok(Route::Help),
            "/R" => (wipe(RED), "Red"),
            "/G" => (wipe(GREEN), "Green"),
            "/B" => (wipe(BLUE), "Blue"),
            "/W" => (
                PatternCommand::scanner(WHITE, config::SCANNER_INTERVAL_MS),
                "White Scanner",
            ),
            "/X" => (rainbow(config::RAINBOW_INTERVAL_MS), "Rainbow"),
            "/Y" => (rainbow(config::RAINBOW_FAST_INTERVAL_MS), "Rainbow Cycle"),
            "/Z" => (rainbow(config::RAINBOW_SLOW_INTERVAL_MS), "Chaser Rainbow"),
            "/set" => {
                let query = query.strip_prefix('?').unwrap_or(query);
                let color = Color::rgb(
                    channel_arg(query, "R")?,
                    channel_arg(query, "G")?,
                    channel_arg(query, "B")?,
                );
                (
                    PatternCommand::color_wipe(color, config::CUSTOM_WIPE_INTERVAL_MS),
                    "RGB Color",
                )
            }
            _ => return Err(CommandError::UnknownRoute),
        };

        Ok(Route::Command { command, label })
    }
}

/// Finds `name` in an `a=1&b=2` query and parses it as one color channel.
fn channel_arg(query: &str, name: &'static str) -> Result<u8, CommandError> {
    let value = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find_map(|(key, value)| (key == name).then_some(value))
        .ok_or(CommandError::MissingArgument(name))?;

    value
        .trim()
        .parse::<u8>()
        .map_err(|_| CommandError::InvalidArgument(name))
}

/// Response to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reply {
    pub status: u16,
    pub body: &'static str,
}

impl Reply {
    const fn new(status: u16, body: &'static str) -> Self {
        Self { status, body }
    }
}

/// Resolves a request and applies it to `engine`.
///
/// Successful pattern changes answer 200 with the pattern label. Missing or
/// malformed channel arguments answer 400, unknown paths 404 with the usage
/// text, and a pattern the strip cannot show 500.
pub fn handle_request<S: PixelSink, H: CompletionHandler>(
    engine: &mut PatternEngine<S, H>,
    path: &str,
    query: &str,
) -> Reply {
    match Route::parse(path, query).and_then(|route| apply(engine, route)) {
        Ok(Route::Help) => Reply::new(200, config::HELP_TEXT),
        Ok(Route::Command { label, .. }) => {
            debug!("request {=str}: {=str}", path, label);
            Reply::new(200, label)
        }
        Err(CommandError::UnknownRoute) => Reply::new(404, config::HELP_TEXT),
        Err(CommandError::MissingArgument(_) | CommandError::InvalidArgument(_)) => {
            warning!("request {=str}: bad args", path);
            Reply::new(400, "BAD ARGS")
        }
        Err(CommandError::Rejected(_)) => Reply::new(500, "PATTERN REJECTED"),
    }
}

fn apply<S: PixelSink, H: CompletionHandler>(
    engine: &mut PatternEngine<S, H>,
    route: Route,
) -> Result<Route, CommandError> {
    if let Route::Command { command, .. } = route {
        engine.handle_command(command)?;
    }
    Ok(route)
}
