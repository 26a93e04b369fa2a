//! Resolving chart lines into the tick-indexed score.
//!
//! The passes run in this order, each depending only on the ones before it:
//!
//! 1. [`measure`] resolves `#MEASUREBS` shifts for every chart line.
//! 2. [`meta`] reads the ticks per beat and the wave offset.
//! 3. [`bar_len`] builds the [`bar_len::TickResolver`] from bar length rows.
//! 4. [`bpm`], [`time_scale`] and [`notes`] decode rows into events.
//! 5. [`slide`] segments stream notes into slides.

pub mod bar_len;
pub mod bpm;
pub mod config;
pub mod measure;
pub mod meta;
pub mod notes;
pub mod slide;
pub mod time_scale;

use super::{
    command::{channel::LineKind, mixin::SourceRangeMixinExt, time::Measure},
    error::{AnalyzeWarning, AnalyzeWarningWithRange},
    lex::ChartLineWithRange,
};

use self::measure::MeasureShifts;

/// A chart line with its header classified and its measure shift resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// The source chart line.
    pub line: &'a ChartLineWithRange<'a>,
    /// What the header means.
    pub kind: LineKind<'a>,
    /// The measure of the row with the `#MEASUREBS` shift applied, if the row is placed on a measure.
    pub measure: Option<Measure>,
}

impl<'a> ClassifiedLine<'a> {
    /// Classifies every chart line once, in source order.
    ///
    /// A row whose shifted measure overflows is skipped with a warning.
    pub fn classify_all(
        lines: &'a [ChartLineWithRange<'a>],
        shifts: &MeasureShifts,
        warnings: &mut Vec<AnalyzeWarningWithRange>,
    ) -> Vec<Self> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                let kind = LineKind::classify(line.content().header);
                let Some(written) = kind.measure() else {
                    return Some(Self {
                        line,
                        kind,
                        measure: None,
                    });
                };
                let shift = shifts.shift_at(index);
                let Some(measure) = written.shifted(shift) else {
                    tracing::debug!(%written, shift, "skipping row shifted out of range");
                    warnings.push(
                        AnalyzeWarning::MeasureOutOfRange {
                            measure: written,
                            shift,
                        }
                        .into_wrapper(line),
                    );
                    return None;
                };
                Some(Self {
                    line,
                    kind,
                    measure: Some(measure),
                })
            })
            .collect()
    }

    /// Returns the data part of the line.
    #[must_use]
    pub fn data(&self) -> &'a str {
        self.line.content().data
    }
}
