//! Definitions of time in SUS.
//!
//! A chart addresses events by [`MeasurePos`], a fraction inside a measure. The analyzer resolves
//! them into [`Tick`]s, which count from the start of measure 0 regardless of bar lengths.

use std::num::NonZeroU64;

/// A measure, or bar, in the score. Measure shifts (`#MEASUREBS`) are already applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measure(pub i64);

impl Measure {
    /// Returns the measure moved by `delta` measures, or `None` if it overflows.
    #[must_use]
    pub const fn shifted(self, delta: i64) -> Option<Self> {
        match self.0.checked_add(delta) {
            Some(measure) => Some(Self(measure)),
            None => None,
        }
    }
}

impl From<i64> for Measure {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// An absolute position on the score in ticks, counted from the start of measure 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub i64);

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Tick {
    /// Returns the tick `ticks` later, or `None` if it overflows.
    #[must_use]
    pub const fn checked_add(self, ticks: i64) -> Option<Self> {
        match self.0.checked_add(ticks) {
            Some(tick) => Some(Self(tick)),
            None => None,
        }
    }
}

/// A position of the object inside a measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurePos {
    /// The measure where the object is in.
    pub measure: Measure,
    /// The offset numerator in the measure.
    pub numerator: u64,
    /// The offset denominator in the measure.
    pub denominator: NonZeroU64,
}

impl MeasurePos {
    /// Create a new position.
    #[must_use]
    pub const fn new(measure: Measure, numerator: u64, denominator: NonZeroU64) -> Self {
        Self {
            measure,
            numerator,
            denominator,
        }
    }

    /// Create a position at the start of `measure`.
    #[must_use]
    pub const fn start_of(measure: Measure) -> Self {
        Self::new(measure, 0, NonZeroU64::MIN)
    }
}
