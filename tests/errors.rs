use pretty_assertions::assert_eq;
use sus_rs::sus::prelude::*;

fn analyze_err(source: &str) -> (AnalyzeError, &str) {
    let err = analyze(source).unwrap_err();
    let range = err.range();
    (err.into_content(), &source[range])
}

#[test]
fn test_missing_request() {
    assert_eq!(
        analyze_err("#00002: 4\n#00010:14\n"),
        (AnalyzeError::MissingTicksPerBeat, "")
    );
}

#[test]
fn test_malformed_request() {
    assert_eq!(
        analyze_err("#REQUEST ticks_per_beat 480\n#00002: 4\n"),
        (
            AnalyzeError::InvalidTicksPerBeat("ticks_per_beat 480".into()),
            "#REQUEST ticks_per_beat 480"
        )
    );
}

#[test]
fn test_later_request_overwrites() {
    assert_eq!(
        analyze_err("#REQUEST \"ticks_per_beat 480\"\n#REQUEST \"side_lane true\"\n").0,
        AnalyzeError::InvalidTicksPerBeat("\"side_lane true\"".into())
    );
}

#[test]
fn test_invalid_wave_offset() {
    assert_eq!(
        analyze_err("#REQUEST \"ticks_per_beat 480\"\n#WAVEOFFSET early\n"),
        (
            AnalyzeError::InvalidWaveOffset("early".into()),
            "#WAVEOFFSET early"
        )
    );
}

#[test]
fn test_missing_bar_length() {
    assert_eq!(
        analyze_err("#REQUEST \"ticks_per_beat 480\"\n#00010:14\n"),
        (AnalyzeError::MissingBarLength(Measure(0)), "#00010:14")
    );
    assert_eq!(
        analyze_err("#REQUEST \"ticks_per_beat 480\"\n#00102: 4\n#00008: 01\n"),
        (AnalyzeError::MissingBarLength(Measure(0)), "#00008: 01")
    );
}

#[test]
fn test_no_rows_needs_no_bar_length() {
    let score = analyze("#REQUEST \"ticks_per_beat 480\"\n#BPM01: 120\n").unwrap();
    assert_eq!(score.bpm_changes, vec![]);
    assert_eq!(score.slides, vec![]);
}

#[test]
fn test_unquoted_time_scale() {
    assert_eq!(
        analyze_err("#REQUEST \"ticks_per_beat 480\"\n#00002: 4\n#TIL00: 0'0:1.0\n"),
        (
            AnalyzeError::UnquotedTimeScale("0'0:1.0".into()),
            "#TIL00: 0'0:1.0"
        )
    );
}

#[test]
fn test_malformed_time_scale() {
    assert_eq!(
        analyze_err("#REQUEST \"ticks_per_beat 480\"\n#00002: 4\n#TIL00: \"0'0:1.0, 1'x:2.0\"\n"),
        (
            AnalyzeError::InvalidTimeScale("1'x:2.0".into()),
            "#TIL00: \"0'0:1.0, 1'x:2.0\""
        )
    );
}

#[test]
fn test_error_display() {
    let err = analyze("#00002: 4").unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing `#REQUEST \"ticks_per_beat <n>\"` at indices [0, 0)"
    );
}
