//! Line splitter of SUS format.
//!
//! Raw [String] == [parse] ==> [`LexOutput`] == [`super::analyze`] ==> [`super::model::Score`]
//!
//! Every trimmed line starting with `#` is one of:
//!
//! - `#{header}:{data}`, a chart line, kept in source order.
//! - `#MEASUREBS {n}`, shifting the measure of the chart lines following it.
//! - `#{key} {value}`, a metadata entry. Later values overwrite earlier ones.
//!
//! Other lines are ignored.

use std::collections::HashMap;

use super::{
    command::mixin::{SourceRangeMixin, SourceRangeMixinExt},
    error::{AnalyzeWarning, AnalyzeWarningWithRange},
    parse::measure::MeasureShifts,
};

/// The metadata key of measure shift directives.
pub const MEASURE_SHIFT_KEY: &str = "MEASUREBS";

/// A `#{header}:{data}` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartLine<'a> {
    /// Text between `#` and `:`, trimmed.
    pub header: &'a str,
    /// Text after `:`, trimmed.
    pub data: &'a str,
}

/// A chart line with the range of its source line.
pub type ChartLineWithRange<'a> = SourceRangeMixin<ChartLine<'a>>;

/// Result of splitting the source into lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexOutput<'a> {
    /// Chart lines in source order.
    pub lines: Vec<ChartLineWithRange<'a>>,
    /// `#MEASUREBS` directives, anchored at the count of chart lines preceding them.
    pub measure_shifts: MeasureShifts,
    /// Metadata entries, the latest value for each key.
    pub meta: HashMap<&'a str, SourceRangeMixin<&'a str>>,
    /// Warnings of skipped directives.
    pub lex_warnings: Vec<AnalyzeWarningWithRange>,
}

/// Splits the SUS source text into chart lines, measure shifts and metadata.
pub fn parse(source: &str) -> LexOutput<'_> {
    let mut output = LexOutput::default();
    let mut line_start = 0;
    for raw in source.split('\n') {
        let range = line_start..line_start + raw.trim_end().len();
        line_start += raw.len() + 1;

        let Some(body) = raw.trim().strip_prefix('#') else {
            continue;
        };
        if let Some((header, data)) = body.split_once(':') {
            output.lines.push(
                ChartLine {
                    header: header.trim(),
                    data: data.trim(),
                }
                .into_wrapper_range(range),
            );
            continue;
        }
        let Some((key, value)) = body.split_once(' ') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key != MEASURE_SHIFT_KEY {
            output.meta.insert(key, value.into_wrapper_range(range));
            continue;
        }
        match value.parse() {
            Ok(delta) => output.measure_shifts.push(output.lines.len(), delta),
            Err(_) => {
                tracing::debug!(value, "skipping non-integer measure shift");
                output
                    .lex_warnings
                    .push(AnalyzeWarning::InvalidMeasureShift(value.into()).into_wrapper_range(range));
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn simple() {
        const SRC: &str = r#"
#TITLE "Sample"
#REQUEST "ticks_per_beat 480"
This line is a comment.
#NOSPACE
#00002: 4
#BPM01: 120
#MEASUREBS 10
#00010:1414
#TITLE "Overwritten"
"#;

        let LexOutput {
            lines,
            measure_shifts,
            meta,
            lex_warnings,
        } = parse(SRC);

        assert_eq!(lex_warnings, vec![]);
        assert_eq!(
            lines
                .iter()
                .map(|line| *line.content())
                .collect::<Vec<_>>(),
            vec![
                ChartLine {
                    header: "00002",
                    data: "4"
                },
                ChartLine {
                    header: "BPM01",
                    data: "120"
                },
                ChartLine {
                    header: "00010",
                    data: "1414"
                },
            ]
        );
        assert_eq!(meta.len(), 2);
        assert_eq!(meta["TITLE"].content(), &"\"Overwritten\"");
        assert_eq!(meta["REQUEST"].content(), &"\"ticks_per_beat 480\"");
        assert_eq!(measure_shifts.shift_at(1), 0);
        assert_eq!(measure_shifts.shift_at(2), 10);
    }

    #[test]
    fn colon_makes_chart_line() {
        let output = parse("#TITLE \"a: b\"\n  #00010 : 10  ");
        assert_eq!(
            output
                .lines
                .iter()
                .map(|line| *line.content())
                .collect::<Vec<_>>(),
            vec![
                ChartLine {
                    header: "TITLE \"a",
                    data: "b\""
                },
                ChartLine {
                    header: "00010",
                    data: "10"
                },
            ]
        );
        assert!(output.meta.is_empty());
    }

    #[test]
    fn crlf_ranges() {
        const SRC: &str = "#WAVEOFFSET 0.5\r\n#00002: 4\r\n";
        let output = parse(SRC);
        assert_eq!(output.meta["WAVEOFFSET"].content(), &"0.5");
        assert_eq!(output.meta["WAVEOFFSET"].range(), 0..15);
        assert_eq!(output.lines[0].range(), 17..26);
        assert_eq!(&SRC[output.lines[0].range()], "#00002: 4");
    }

    #[test]
    fn invalid_measure_shift() {
        let output = parse("#MEASUREBS ten\n#00010:10");
        assert_eq!(
            output.lex_warnings,
            vec![AnalyzeWarning::InvalidMeasureShift("ten".into()).into_wrapper_range(0..14)]
        );
        assert_eq!(output.measure_shifts.shift_at(0), 0);
    }
}
