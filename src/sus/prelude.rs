//! Prelude module for the SUS analyzer.
//!
//! `use sus_rs::sus::prelude::*;` imports all public types at once.

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_analyze_warnings};

pub use super::{
    AnalyzeOutput, analyze, analyze_with_config,
    command::{
        channel::{LineKind, base36},
        mixin::{SourceRangeMixin, SourceRangeMixinExt},
        time::{Measure, MeasurePos, Tick},
    },
    error::{AnalyzeError, AnalyzeErrorWithRange, AnalyzeWarning, AnalyzeWarningWithRange},
    lex::{ChartLine, ChartLineWithRange, LexOutput},
    model::{BpmChange, NoteEvent, Score, Slide, TimeScaleChange},
    parse::{
        ClassifiedLine,
        bar_len::{BarLength, TickResolver},
        bpm::BpmLabels,
        config::{AnalyzeConfig, UnterminatedSlide},
        measure::{MeasureShift, MeasureShifts},
        slide::{Streams, TERMINAL_NOTE_TYPE},
    },
};
