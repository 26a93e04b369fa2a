//! This module handles the tokens:
//!
//! - `#mmm02: n`: bar length channel. Measure `mmm` and later measures span `n` beats.
//!
//! [`TickResolver`] converts [`MeasurePos`] into absolute [`Tick`]s.

use crate::sus::{
    command::{
        channel::LineKind,
        mixin::SourceRangeMixinExt,
        time::{Measure, MeasurePos, Tick},
    },
    error::{AnalyzeError, AnalyzeWarning, AnalyzeWarningWithRange, Result},
};

use super::ClassifiedLine;

/// A bar length declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarLength {
    /// The measure, shifts applied.
    pub measure: Measure,
    /// Beats per measure.
    pub beats: f64,
}

/// Collects bar length rows in source order. Invalid rows are skipped with a warning.
pub fn collect_bar_lengths(
    lines: &[ClassifiedLine<'_>],
    warnings: &mut Vec<AnalyzeWarningWithRange>,
) -> Vec<BarLength> {
    let mut bar_lengths: Vec<BarLength> = Vec::new();
    for line in lines {
        let (LineKind::BarLength { .. }, Some(measure)) = (line.kind, line.measure) else {
            continue;
        };
        let data = line.line.content().data;
        let Some(beats) = data
            .parse::<f64>()
            .ok()
            .filter(|beats| beats.is_finite() && *beats > 0.0)
        else {
            tracing::debug!(%measure, data, "skipping invalid bar length");
            warnings.push(AnalyzeWarning::InvalidBarLength(data.into()).into_wrapper(line.line));
            continue;
        };
        if bar_lengths.iter().any(|bar| bar.measure == measure) {
            warnings.push(AnalyzeWarning::DuplicateBarLength(measure).into_wrapper(line.line));
        }
        bar_lengths.push(BarLength { measure, beats });
    }
    bar_lengths
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bar {
    measure: Measure,
    ticks_per_measure: f64,
    /// Ticks at the start of `measure`.
    ticks: f64,
}

/// Converter from [`MeasurePos`] into [`Tick`]s.
///
/// Bars are kept in descending order of measure. Among bar lengths declared for the same measure, the one declared later is found first.
#[derive(Debug, Clone, PartialEq)]
pub struct TickResolver {
    bars: Vec<Bar>,
    ticks_per_beat: u32,
}

impl TickResolver {
    /// Creates a new resolver from bar lengths in declaration order.
    #[must_use]
    pub fn new(bar_lengths: impl IntoIterator<Item = BarLength>, ticks_per_beat: u32) -> Self {
        let ticks_per_beat_f = f64::from(ticks_per_beat);
        let mut sorted: Vec<_> = bar_lengths.into_iter().collect();
        sorted.sort_by_key(|bar| bar.measure);

        let mut bars: Vec<Bar> = Vec::with_capacity(sorted.len());
        let mut ticks = 0.0;
        for (i, bar) in sorted.iter().enumerate() {
            if let Some(prev) = i.checked_sub(1).map(|j| &sorted[j]) {
                ticks += bar.measure.0.abs_diff(prev.measure.0) as f64 * prev.beats * ticks_per_beat_f;
            }
            bars.push(Bar {
                measure: bar.measure,
                ticks_per_measure: bar.beats * ticks_per_beat_f,
                ticks,
            });
        }
        bars.reverse();
        Self {
            bars,
            ticks_per_beat,
        }
    }

    /// Gets the resolution of the chart.
    #[must_use]
    pub const fn ticks_per_beat(&self) -> u32 {
        self.ticks_per_beat
    }

    /// Gets the absolute tick at the position, rounded down and saturated to the range of [`Tick`].
    ///
    /// # Errors
    ///
    /// Fails with [`AnalyzeError::MissingBarLength`] if no bar length is declared at or before the measure.
    pub fn to_tick(&self, pos: MeasurePos) -> Result<Tick> {
        let bar = self
            .bars
            .iter()
            .find(|bar| bar.measure <= pos.measure)
            .ok_or(AnalyzeError::MissingBarLength(pos.measure))?;
        let ticks = bar.ticks
            + pos.measure.0.abs_diff(bar.measure.0) as f64 * bar.ticks_per_measure
            + pos.numerator as f64 * bar.ticks_per_measure / pos.denominator.get() as f64;
        Ok(Tick(ticks.floor() as i64))
    }
}
