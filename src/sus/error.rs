//! Errors and warnings of analysis.

use thiserror::Error;

use super::command::{mixin::SourceRangeMixin, time::Measure};

/// A fatal error. The whole analysis is aborted and no [`super::model::Score`] is produced.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalyzeError {
    /// `#WAVEOFFSET` was not a number.
    #[error("expected numeric WAVEOFFSET but found: {0}")]
    InvalidWaveOffset(String),
    /// `#REQUEST "ticks_per_beat n"` was not declared.
    #[error("missing `#REQUEST \"ticks_per_beat <n>\"`")]
    MissingTicksPerBeat,
    /// `#REQUEST` was declared but it was not `"ticks_per_beat n"`.
    #[error("expected `\"ticks_per_beat <n>\"` request but found: {0}")]
    InvalidTicksPerBeat(String),
    /// A position was placed before every known bar length.
    #[error("no bar length defined at or before measure {0}")]
    MissingBarLength(Measure),
    /// A time scale row was not wrapped in double quotes.
    #[error("time scale row must be wrapped in double quotes: {0}")]
    UnquotedTimeScale(String),
    /// A time scale segment was not `measure'tick:value`.
    #[error("expected `measure'tick:value` time scale but found: {0}")]
    InvalidTimeScale(String),
}

/// Type alias of `core::result::Result<T, AnalyzeError>`.
pub type Result<T> = core::result::Result<T, AnalyzeError>;

/// A fatal error with the range of the source line causing it.
pub type AnalyzeErrorWithRange = SourceRangeMixin<AnalyzeError>;

/// A tolerated problem of the source. The offending part is skipped and analysis continues.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalyzeWarning {
    /// The chart line header is not one of the supported rows.
    #[error("unsupported chart line: #{0}")]
    UnsupportedChartLine(String),
    /// A BPM change referenced a label never declared by `#BPMzz`. The change gets BPM 0.
    #[error("undefined BPM label: {0}")]
    UndefinedBpmLabel(String),
    /// `#BPMzz` value was not a number.
    #[error("expected numeric BPM for label {label} but found: {value}")]
    InvalidBpmDefinition {
        /// The declared label.
        label: String,
        /// The raw value.
        value: String,
    },
    /// A note cell was not two base-36 digits.
    #[error("expected two base-36 digits but found: {0}")]
    InvalidCell(String),
    /// A bar length was not a positive number.
    #[error("expected positive bar length but found: {0}")]
    InvalidBarLength(String),
    /// Bar length was declared more than once for the measure. The later declaration wins.
    #[error("duplicating bar length at measure {0}")]
    DuplicateBarLength(Measure),
    /// The measure shift moved the row outside the representable measures. The row is skipped.
    #[error("measure {measure} shifted by {shift} is out of range")]
    MeasureOutOfRange {
        /// The measure written in the header.
        measure: Measure,
        /// The `#MEASUREBS` shift in effect.
        shift: i64,
    },
    /// `#MEASUREBS` value was not an integer.
    #[error("expected integer MEASUREBS but found: {0}")]
    InvalidMeasureShift(String),
}

/// A tolerated problem with the range of the source line causing it.
pub type AnalyzeWarningWithRange = SourceRangeMixin<AnalyzeWarning>;
