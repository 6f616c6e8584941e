//! Non-blocking pattern engine.
//!
//! Provides [`PatternEngine`], which drives a [`PixelSink`] through one of the
//! built-in animations a single frame at a time. The host loop calls
//! [`PatternEngine::tick`] as often as it likes; a frame is drawn at most once
//! per configured interval and never more than one frame per call, so the
//! animation runs in wall-clock time and the loop is never blocked.

use crate::color::{BLACK, Color};
use crate::command::PatternCommand;
use crate::fmt::{debug, trace};
use crate::handler::CompletionHandler;
use crate::sink::PixelSink;
use crate::time::{Millis, TimeSource};
use crate::types::{Direction, Pattern, PatternError, StepOutcome};

/// Rainbow cycle length: one full trip around the color wheel.
pub const RAINBOW_STEPS: u32 = 255;

/// Progress of the active pattern.
///
/// This is the part of the engine a [`CompletionHandler`] is allowed to touch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PatternState {
    pattern: Pattern,
    direction: Direction,
    interval: u32,
    last_update: Millis,
    color1: Color,
    color2: Color,
    total_steps: u32,
    index: u32,
}

impl PatternState {
    /// An idle state with no pattern selected.
    pub const fn new() -> Self {
        Self {
            pattern: Pattern::None,
            direction: Direction::Forward,
            interval: 0,
            last_update: Millis::ZERO,
            color1: BLACK,
            color2: BLACK,
            total_steps: 0,
            index: 0,
        }
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Minimum milliseconds between steps.
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Time of the last step.
    pub fn last_update(&self) -> Millis {
        self.last_update
    }

    pub fn color1(&self) -> Color {
        self.color1
    }

    pub fn color2(&self) -> Color {
        self.color2
    }

    /// Cycle length of the active pattern.
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Current position in `0..total_steps`.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Flips the direction and moves the index to the start of the new
    /// traversal: `0` going forward, `total_steps - 1` going in reverse.
    pub fn reverse(&mut self) {
        self.direction = self.direction.flipped();
        self.index = match self.direction {
            Direction::Forward => 0,
            Direction::Reverse => self.total_steps.saturating_sub(1),
        };
    }

    /// Moves the index. Out-of-range values are clamped on the next step.
    pub fn jump_to(&mut self, index: u32) {
        self.index = index;
    }

    fn reset(
        &mut self,
        pattern: Pattern,
        interval: u32,
        total_steps: u32,
        colors: (Color, Color),
        direction: Direction,
    ) {
        self.pattern = pattern;
        self.interval = interval;
        self.total_steps = total_steps;
        self.color1 = colors.0;
        self.color2 = colors.1;
        self.direction = direction;
        self.index = match direction {
            Direction::Forward => 0,
            Direction::Reverse => total_steps.saturating_sub(1),
        };
    }

    fn clamp_index(&mut self) {
        if self.index >= self.total_steps {
            self.index = self.total_steps.saturating_sub(1);
        }
    }

    /// Moves one step in the current direction. Returns `true` on wrap.
    ///
    /// Reverse wraps when the index would go below zero, so both directions
    /// visit exactly `total_steps` positions per traversal.
    fn increment(&mut self) -> bool {
        match self.direction {
            Direction::Forward => {
                self.index += 1;
                if self.index >= self.total_steps {
                    self.index = 0;
                    return true;
                }
                false
            }
            Direction::Reverse => {
                if self.index == 0 {
                    self.index = self.total_steps.saturating_sub(1);
                    return true;
                }
                self.index -= 1;
                false
            }
        }
    }
}

impl Default for PatternState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives an addressable LED strip through timed animation patterns.
///
/// The engine owns its sink and completion handler. Each `init_*` call fully
/// replaces the active pattern, discarding any progress, and places the index
/// at the start of a traversal in the requested direction (`0` forward,
/// `total_steps - 1` in reverse). It validates first and leaves the previous
/// pattern running on error.
///
/// # Type Parameters
/// * `S` - Pixel sink implementation type
/// * `H` - Completion handler type (`()` for none)
pub struct PatternEngine<S: PixelSink, H: CompletionHandler = ()> {
    sink: S,
    handler: H,
    state: PatternState,
}

impl<S: PixelSink, H: CompletionHandler> PatternEngine<S, H> {
    /// Creates an idle engine. The strip is left as it is.
    pub fn new(sink: S, handler: H) -> Self {
        Self {
            sink,
            handler,
            state: PatternState::new(),
        }
    }

    /// Progressive fill of `color`, one pixel per step.
    pub fn init_color_wipe(
        &mut self,
        color: Color,
        interval: u32,
        direction: Direction,
    ) -> Result<(), PatternError> {
        let steps = self.strip_steps()?;
        self.select(Pattern::ColorWipe, interval, steps, (color, BLACK), direction);
        Ok(())
    }

    /// Hue rotation across the whole strip.
    pub fn init_rainbow_cycle(
        &mut self,
        interval: u32,
        direction: Direction,
    ) -> Result<(), PatternError> {
        self.strip_steps()?;
        self.select(
            Pattern::RainbowCycle,
            interval,
            RAINBOW_STEPS,
            (BLACK, BLACK),
            direction,
        );
        Ok(())
    }

    /// Every third pixel in `color1` over a `color2` background, marching.
    pub fn init_theater_chase(
        &mut self,
        color1: Color,
        color2: Color,
        interval: u32,
        direction: Direction,
    ) -> Result<(), PatternError> {
        let steps = self.strip_steps()?;
        self.select(
            Pattern::TheaterChase,
            interval,
            steps,
            (color1, color2),
            direction,
        );
        Ok(())
    }

    /// A `color` bead bouncing end to end with a dimming trail.
    ///
    /// Always runs forward; the bounce comes from the index math.
    ///
    /// # Errors
    /// * `ScannerTooShort` - fewer than two pixels
    pub fn init_scanner(&mut self, color: Color, interval: u32) -> Result<(), PatternError> {
        let pixels = self.strip_steps()?;
        if pixels < 2 {
            return Err(PatternError::ScannerTooShort);
        }
        let steps = (pixels - 1)
            .checked_mul(2)
            .ok_or(PatternError::StripTooLong)?;

        self.select(
            Pattern::Scanner,
            interval,
            steps,
            (color, BLACK),
            Direction::Forward,
        );
        Ok(())
    }

    /// Whole strip fading from `color1` to `color2` over `steps` steps.
    /// In reverse the index walks from the `color2` end back toward `color1`.
    ///
    /// # Errors
    /// * `ZeroSteps` - `steps` is zero
    pub fn init_fade(
        &mut self,
        color1: Color,
        color2: Color,
        steps: u16,
        interval: u32,
        direction: Direction,
    ) -> Result<(), PatternError> {
        self.strip_steps()?;
        if steps == 0 {
            return Err(PatternError::ZeroSteps);
        }

        self.select(
            Pattern::Fade,
            interval,
            steps as u32,
            (color1, color2),
            direction,
        );
        Ok(())
    }

    /// Steps once if at least one interval has passed since the last step.
    ///
    /// Never catches up: however late the call, at most one frame is drawn.
    pub fn tick(&mut self, now: Millis) -> Result<StepOutcome, PatternError> {
        if now.wrapping_since(self.state.last_update) < self.state.interval {
            return Ok(StepOutcome::Waiting);
        }

        self.state.last_update = now;
        self.advance()
    }

    /// [`tick`](Self::tick) using the current reading of `time`.
    pub fn service<T: TimeSource>(&mut self, time: &T) -> Result<StepOutcome, PatternError> {
        self.tick(time.now())
    }

    /// Milliseconds until the next step is due, `0` if it already is.
    pub fn time_until_next(&self, now: Millis) -> u32 {
        self.state
            .interval
            .saturating_sub(now.wrapping_since(self.state.last_update))
    }

    /// Draws one frame of the active pattern, flushes it and moves the index.
    ///
    /// The completion handler runs before this returns when the index wraps.
    ///
    /// # Returns
    /// * `Ok(StepOutcome::Idle)` - no pattern active, strip untouched
    /// * `Ok(StepOutcome::Stepped)` - frame drawn
    /// * `Ok(StepOutcome::Completed)` - frame drawn and traversal finished
    /// * `Err` - the state has a zero cycle length
    pub fn advance(&mut self) -> Result<StepOutcome, PatternError> {
        if self.state.pattern == Pattern::None {
            return Ok(StepOutcome::Idle);
        }
        if self.state.total_steps == 0 {
            return Err(PatternError::ZeroSteps);
        }
        self.state.clamp_index();

        match self.state.pattern {
            Pattern::None => return Ok(StepOutcome::Idle),
            Pattern::RainbowCycle => self.draw_rainbow_cycle(),
            Pattern::TheaterChase => self.draw_theater_chase(),
            Pattern::ColorWipe => self.draw_color_wipe(),
            Pattern::Scanner => self.draw_scanner(),
            Pattern::Fade => self.draw_fade()?,
        }
        self.sink.flush();

        if self.state.increment() {
            trace!("{} traversal complete", self.state.pattern);
            self.handler.on_complete(&mut self.state);
            return Ok(StepOutcome::Completed);
        }
        Ok(StepOutcome::Stepped)
    }

    /// Flips direction; see [`PatternState::reverse`].
    pub fn reverse(&mut self) {
        self.state.reverse();
    }

    /// Fills the whole strip with `color` and flushes immediately.
    ///
    /// Does not change the active pattern; the next step may draw over it.
    pub fn set_color(&mut self, color: Color) {
        for i in 0..self.sink.pixel_count() {
            self.sink.set_pixel(i, color);
        }
        self.sink.flush();
    }

    /// Stops stepping. Pixels keep their last colors.
    pub fn stop(&mut self) {
        debug!("pattern stopped");
        self.state = PatternState {
            last_update: self.state.last_update,
            ..PatternState::new()
        };
    }

    /// Stops stepping and blanks the strip.
    pub fn clear(&mut self) {
        self.stop();
        self.set_color(BLACK);
    }

    /// Applies a command by dispatching to the matching method.
    pub fn handle_command(&mut self, command: PatternCommand) -> Result<(), PatternError> {
        match command {
            PatternCommand::ColorWipe {
                color,
                interval,
                direction,
            } => self.init_color_wipe(color, interval, direction),
            PatternCommand::RainbowCycle {
                interval,
                direction,
            } => self.init_rainbow_cycle(interval, direction),
            PatternCommand::TheaterChase {
                color1,
                color2,
                interval,
                direction,
            } => self.init_theater_chase(color1, color2, interval, direction),
            PatternCommand::Scanner { color, interval } => self.init_scanner(color, interval),
            PatternCommand::Fade {
                color1,
                color2,
                steps,
                interval,
                direction,
            } => self.init_fade(color1, color2, steps, interval, direction),
            PatternCommand::Reverse => {
                self.reverse();
                Ok(())
            }
            PatternCommand::Fill(color) => {
                self.stop();
                self.set_color(color);
                Ok(())
            }
            PatternCommand::Stop => {
                self.stop();
                Ok(())
            }
        }
    }

    pub fn state(&self) -> &PatternState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Releases the sink and the handler.
    pub fn into_parts(self) -> (S, H) {
        (self.sink, self.handler)
    }

    fn strip_steps(&self) -> Result<u32, PatternError> {
        let count = self.sink.pixel_count();
        if count == 0 {
            return Err(PatternError::EmptyStrip);
        }
        u32::try_from(count).map_err(|_| PatternError::StripTooLong)
    }

    fn select(
        &mut self,
        pattern: Pattern,
        interval: u32,
        total_steps: u32,
        colors: (Color, Color),
        direction: Direction,
    ) {
        debug!(
            "pattern {} every {}ms, {} steps, {}",
            pattern, interval, total_steps, direction
        );
        self.state
            .reset(pattern, interval, total_steps, colors, direction);
    }

    fn draw_rainbow_cycle(&mut self) {
        let count = self.sink.pixel_count();
        let index = self.state.index as usize;
        for i in 0..count {
            let pos = (i * 256 / count + index) & 0xFF;
            self.sink.set_pixel(i, Color::wheel(pos as u8));
        }
    }

    fn draw_theater_chase(&mut self) {
        let index = self.state.index as usize;
        for i in 0..self.sink.pixel_count() {
            let color = if (i + index) % 3 == 0 {
                self.state.color1
            } else {
                self.state.color2
            };
            self.sink.set_pixel(i, color);
        }
    }

    fn draw_color_wipe(&mut self) {
        self.sink
            .set_pixel(self.state.index as usize, self.state.color1);
    }

    fn draw_scanner(&mut self) {
        let index = self.state.index as usize;
        let mirror = (self.state.total_steps - self.state.index) as usize;
        for i in 0..self.sink.pixel_count() {
            if i == index || i == mirror {
                self.sink.set_pixel(i, self.state.color1);
            } else {
                let dimmed = self.sink.pixel(i).dim();
                self.sink.set_pixel(i, dimmed);
            }
        }
    }

    fn draw_fade(&mut self) -> Result<(), PatternError> {
        let color = Color::lerp(
            self.state.color1,
            self.state.color2,
            self.state.index,
            self.state.total_steps,
        )?;
        for i in 0..self.sink.pixel_count() {
            self.sink.set_pixel(i, color);
        }
        Ok(())
    }
}
