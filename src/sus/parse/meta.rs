//! This module handles the metadata:
//!
//! - `#REQUEST "ticks_per_beat n"`: resolution of the chart. Required.
//! - `#WAVEOFFSET n`: seconds of the music before measure 0. Defaults to 0.

use crate::sus::{
    command::mixin::{SourceRangeMixin, SourceRangeMixinExt},
    error::{AnalyzeError, AnalyzeErrorWithRange},
};

/// Metadata key of the ticks per beat request.
pub const REQUEST_KEY: &str = "REQUEST";
/// Metadata key of the wave offset.
pub const WAVE_OFFSET_KEY: &str = "WAVEOFFSET";

const TICKS_PER_BEAT_REQUEST: &str = "ticks_per_beat";

/// Reads the ticks per beat from the `#REQUEST` value.
///
/// The value must be exactly `"ticks_per_beat n"` including the double quotes, where `n` is a positive integer.
pub fn ticks_per_beat(
    request: Option<&SourceRangeMixin<&str>>,
) -> Result<u32, AnalyzeErrorWithRange> {
    let request = request.ok_or_else(|| AnalyzeError::MissingTicksPerBeat.into_wrapper_range(0..0))?;
    let raw = *request.content();
    let invalid = || AnalyzeError::InvalidTicksPerBeat(raw.into()).into_wrapper(request);
    let quoted = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(invalid)?;
    let (key, value) = quoted.split_once(' ').ok_or_else(invalid)?;
    if key != TICKS_PER_BEAT_REQUEST || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value
        .parse()
        .ok()
        .filter(|&ticks| ticks > 0)
        .ok_or_else(invalid)
}

/// Reads the `#WAVEOFFSET` value, 0 if not declared.
pub fn wave_offset(offset: Option<&SourceRangeMixin<&str>>) -> Result<f64, AnalyzeErrorWithRange> {
    let Some(offset) = offset else {
        return Ok(0.0);
    };
    offset
        .content()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| AnalyzeError::InvalidWaveOffset((*offset.content()).into()).into_wrapper(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(value: &str) -> SourceRangeMixin<&str> {
        value.into_wrapper_range(0..value.len())
    }

    #[test]
    fn valid_request() {
        assert_eq!(ticks_per_beat(Some(&meta("\"ticks_per_beat 480\""))), Ok(480));
        assert_eq!(ticks_per_beat(Some(&meta("\"ticks_per_beat 1\""))), Ok(1));
    }

    #[test]
    fn missing_request() {
        assert_eq!(
            ticks_per_beat(None).map_err(SourceRangeMixin::into_content),
            Err(AnalyzeError::MissingTicksPerBeat)
        );
    }

    #[test]
    fn malformed_request() {
        for raw in [
            "ticks_per_beat 480",
            "\"ticks_per_beat 480",
            "\"tick_per_beat 480\"",
            "\"ticks_per_beat\"",
            "\"ticks_per_beat 4a0\"",
            "\"ticks_per_beat -480\"",
            "\"ticks_per_beat 0\"",
            "\"ticks_per_beat  480\"",
            "\"side_lane true\"",
        ] {
            assert_eq!(
                ticks_per_beat(Some(&meta(raw))).map_err(SourceRangeMixin::into_content),
                Err(AnalyzeError::InvalidTicksPerBeat(raw.into())),
                "{raw}"
            );
        }
    }

    #[test]
    fn offsets() {
        assert_eq!(wave_offset(None), Ok(0.0));
        assert_eq!(wave_offset(Some(&meta("1.25"))), Ok(1.25));
        assert_eq!(wave_offset(Some(&meta("-0.5"))), Ok(-0.5));
        let err = wave_offset(Some(&meta("abc"))).unwrap_err();
        assert_eq!(err.content(), &AnalyzeError::InvalidWaveOffset("abc".into()));
        assert_eq!(err.range(), 0..3);
    }
}
