//! Core types shared by the engine and the command surface.

/// Which animation the engine dispatches to on each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pattern {
    /// Nothing is running. Steps leave the strip untouched.
    #[default]
    None,

    /// Full hue rotation spread across the strip.
    RainbowCycle,

    /// Every third pixel lit, marching along the strip.
    TheaterChase,

    /// Pixels filled one at a time.
    ColorWipe,

    /// A bead bouncing end to end with a fading trail.
    Scanner,

    /// Whole strip interpolating between two colors.
    Fade,
}

/// Sign of index progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// What a call to `advance` or `tick` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// The interval has not elapsed yet. Nothing was drawn.
    Waiting,

    /// No pattern is active. Nothing was drawn.
    Idle,

    /// One frame was drawn and the index moved.
    Stepped,

    /// One frame was drawn and the index wrapped, firing the completion handler.
    Completed,
}

/// Pattern configuration and stepping errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// The sink reports zero pixels.
    EmptyStrip,

    /// Scanner needs at least two pixels to have anywhere to go.
    ScannerTooShort,

    /// A fade was requested with zero steps.
    ZeroSteps,

    /// The strip is too long for the step counter.
    StripTooLong,
}

impl core::fmt::Display for PatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PatternError::EmptyStrip => write!(f, "pixel sink has no pixels"),
            PatternError::ScannerTooShort => {
                write!(f, "scanner requires at least two pixels")
            }
            PatternError::ZeroSteps => write!(f, "step count must be non-zero"),
            PatternError::StripTooLong => {
                write!(f, "pixel count exceeds the step counter range")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}
