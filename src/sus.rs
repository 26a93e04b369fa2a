//! The analyzer of SUS (Sliding Universal Score) chart format.
//!
//! Raw [String] == [lex] ==> [`lex::LexOutput`] == [analyze] ==> [`model::Score`]
//!
//! `lex` module splits the source into chart lines, measure shifts and metadata. `parse` module resolves them
//! into absolute ticks. `model` module provides the resolved [`model::Score`].
//!
//! In detail, our policies are:
//!
//! - Fail the whole analysis on broken timing: the ticks per beat request, the wave offset, time scale rows and
//!   positions before every bar length.
//! - Skip anything else that cannot be decoded, and report it as [`AnalyzeWarning`].
//! - Never produce a partial [`model::Score`].

pub mod command;
pub mod error;
pub mod lex;
pub mod model;
pub mod parse;
pub mod prelude;

use self::{
    command::{channel::LineKind, mixin::SourceRangeMixinExt},
    lex::LexOutput,
    model::Score,
    parse::{
        ClassifiedLine,
        bar_len::{TickResolver, collect_bar_lengths},
        bpm::{BpmLabels, bpm_changes},
        config::AnalyzeConfig,
        meta::{REQUEST_KEY, WAVE_OFFSET_KEY, ticks_per_beat, wave_offset},
        notes::notes,
        slide::Streams,
        time_scale::time_scale_changes,
    },
};

pub use self::error::{
    AnalyzeError, AnalyzeErrorWithRange, AnalyzeWarning, AnalyzeWarningWithRange,
};

/// Output of analyzing a SUS source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct AnalyzeOutput {
    /// The resolved score.
    pub score: Score,
    /// Problems skipped while analyzing.
    pub warnings: Vec<AnalyzeWarningWithRange>,
}

/// Analyzes a SUS source into [`Score`] with the default [`AnalyzeConfig`], discarding warnings.
///
/// ```
/// use sus_rs::sus::analyze;
///
/// let source = "#REQUEST \"ticks_per_beat 480\"\n#00002: 4\n#00112:0014";
/// let score = analyze(source).unwrap();
/// assert_eq!(score.tap_notes[0].tick.0, 1920 + 960);
/// assert_eq!(score.tap_notes[0].lane, 2);
/// ```
///
/// # Errors
///
/// See [`AnalyzeError`] for the fatal cases.
pub fn analyze(source: &str) -> Result<Score, AnalyzeErrorWithRange> {
    analyze_with_config(source, AnalyzeConfig::default()).map(|output| output.score)
}

/// Analyzes a SUS source into [`Score`], collecting warnings.
///
/// # Errors
///
/// See [`AnalyzeError`] for the fatal cases.
pub fn analyze_with_config(
    source: &str,
    config: AnalyzeConfig,
) -> Result<AnalyzeOutput, AnalyzeErrorWithRange> {
    let LexOutput {
        lines,
        measure_shifts,
        meta,
        lex_warnings,
    } = lex::parse(source);
    let mut warnings = lex_warnings;

    let ticks_per_beat = ticks_per_beat(meta.get(REQUEST_KEY))?;
    let offset = -wave_offset(meta.get(WAVE_OFFSET_KEY))?;

    let lines = ClassifiedLine::classify_all(&lines, &measure_shifts, &mut warnings);
    let resolver = TickResolver::new(collect_bar_lengths(&lines, &mut warnings), ticks_per_beat);
    let labels = BpmLabels::collect(&lines, &mut warnings);

    let mut time_scales = Vec::new();
    let mut bpms = Vec::new();
    let mut taps = Vec::new();
    let mut directionals = Vec::new();
    let mut streams = Streams::default();
    for line in &lines {
        let with_range = |err: AnalyzeError| err.into_wrapper(line.line);
        match (line.kind, line.measure) {
            (LineKind::TimeScale, _) => {
                time_scales.extend(time_scale_changes(line.data(), &resolver).map_err(with_range)?);
            }
            (LineKind::BpmChange { .. }, Some(measure)) => bpms.extend(
                bpm_changes(line, measure, &labels, &resolver, &mut warnings)
                    .map_err(with_range)?,
            ),
            (LineKind::Tap { lane, .. }, Some(measure)) => taps.extend(
                notes(line.line, measure, lane, &resolver, &mut warnings).map_err(with_range)?,
            ),
            (LineKind::Directional { lane, .. }, Some(measure)) => directionals.extend(
                notes(line.line, measure, lane, &resolver, &mut warnings).map_err(with_range)?,
            ),
            (LineKind::Stream { lane, channel, .. }, Some(measure)) => streams.extend(
                channel,
                notes(line.line, measure, lane, &resolver, &mut warnings).map_err(with_range)?,
            ),
            (
                LineKind::BpmChange { .. }
                | LineKind::Tap { .. }
                | LineKind::Directional { .. }
                | LineKind::Stream { .. }
                | LineKind::BarLength { .. }
                | LineKind::BpmDef { .. },
                _,
            ) => {}
            (LineKind::Unrecognized, _) => {
                let header = line.line.content().header;
                tracing::trace!(header, "ignoring unsupported chart line");
                warnings.push(
                    AnalyzeWarning::UnsupportedChartLine(header.into()).into_wrapper(line.line),
                );
            }
        }
    }

    let score = Score {
        offset,
        ticks_per_beat,
        time_scale_changes: time_scales,
        bpm_changes: bpms,
        tap_notes: taps,
        directional_notes: directionals,
        slides: streams.into_slides(config.unterminated_slide),
    };
    tracing::debug!(
        bpm_changes = score.bpm_changes.len(),
        tap_notes = score.tap_notes.len(),
        directional_notes = score.directional_notes.len(),
        slides = score.slides.len(),
        warnings = warnings.len(),
        "analyzed SUS chart"
    );
    Ok(AnalyzeOutput { score, warnings })
}
