//! Completion handlers.
//!
//! A [`CompletionHandler`] is told every time the active pattern wraps around.
//! It receives the engine's [`PatternState`] rather than the engine itself, so
//! it can reverse or reposition the pattern but has no way to draw a frame
//! from inside a step.

use crate::engine::PatternState;

/// Reacts to a pattern finishing one full traversal.
pub trait CompletionHandler {
    /// Called once per wrap, after the frame has been flushed.
    fn on_complete(&mut self, state: &mut PatternState);
}

/// No handler. Completions are ignored.
impl CompletionHandler for () {
    #[inline]
    fn on_complete(&mut self, _state: &mut PatternState) {}
}

impl<H: CompletionHandler> CompletionHandler for Option<H> {
    #[inline]
    fn on_complete(&mut self, state: &mut PatternState) {
        if let Some(handler) = self {
            handler.on_complete(state);
        }
    }
}

impl<H: CompletionHandler + ?Sized> CompletionHandler for &mut H {
    #[inline]
    fn on_complete(&mut self, state: &mut PatternState) {
        (**self).on_complete(state);
    }
}

/// Flips the direction on every completion, giving a perpetual back-and-forth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOnComplete;

impl CompletionHandler for ReverseOnComplete {
    fn on_complete(&mut self, state: &mut PatternState) {
        state.reverse();
    }
}

/// Adapts a closure into a [`CompletionHandler`].
///
/// ```
/// use neo_patterns::{BufferSink, Direction, FnHandler, PatternEngine, PatternState, RED};
///
/// let mut completions = 0u32;
/// {
///     let mut engine = PatternEngine::new(
///         BufferSink::<4>::new(4),
///         FnHandler(|_: &mut PatternState| completions += 1),
///     );
///     engine.init_color_wipe(RED, 50, Direction::Forward).unwrap();
///     for _ in 0..8 {
///         engine.advance().unwrap();
///     }
/// }
/// assert_eq!(completions, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnHandler<F>(pub F);

impl<F: FnMut(&mut PatternState)> CompletionHandler for FnHandler<F> {
    #[inline]
    fn on_complete(&mut self, state: &mut PatternState) {
        (self.0)(state);
    }
}
