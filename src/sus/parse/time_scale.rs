//! This module handles the tokens:
//!
//! - `#TILxx: "m'tick:scale, ..."`: time scale (scroll speed) changes. Each segment changes the scale to
//!   `scale` at `tick` ticks after the start of measure `m`. Measure shifts do not apply. A segment whose
//!   tick does not fit in [`Tick`](crate::sus::command::time::Tick) is malformed.

use crate::sus::{
    command::time::{Measure, MeasurePos},
    error::{AnalyzeError, Result},
    model::TimeScaleChange,
};

use super::bar_len::TickResolver;

/// Decodes a quoted time scale list, sorted by tick.
///
/// # Errors
///
/// Any malformed segment fails the whole row.
pub fn time_scale_changes(data: &str, resolver: &TickResolver) -> Result<Vec<TimeScaleChange>> {
    let list = data
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| AnalyzeError::UnquotedTimeScale(data.into()))?;
    let mut changes = list
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| time_scale_change(segment, resolver))
        .collect::<Result<Vec<_>>>()?;
    changes.sort_by_key(|change| change.tick);
    Ok(changes)
}

fn time_scale_change(segment: &str, resolver: &TickResolver) -> Result<TimeScaleChange> {
    let invalid = || AnalyzeError::InvalidTimeScale(segment.into());
    let (measure, rest) = segment.split_once('\'').ok_or_else(invalid)?;
    let (tick, scale) = rest.split_once(':').ok_or_else(invalid)?;
    let measure: i64 = measure.trim().parse().map_err(|_| invalid())?;
    let tick: i64 = tick.trim().parse().map_err(|_| invalid())?;
    let scale: f64 = scale.trim().parse().map_err(|_| invalid())?;
    Ok(TimeScaleChange {
        tick: resolver
            .to_tick(MeasurePos::start_of(Measure(measure)))?
            .checked_add(tick)
            .ok_or_else(invalid)?,
        scale,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sus::{command::time::Tick, parse::bar_len::BarLength};

    fn resolver() -> TickResolver {
        TickResolver::new(
            [BarLength {
                measure: Measure(0),
                beats: 4.0,
            }],
            480,
        )
    }

    #[test]
    fn sorted_changes() {
        assert_eq!(
            time_scale_changes("\"1'0:2.0, 0'0:1.0,0'240:0.5,\"", &resolver()),
            Ok(vec![
                TimeScaleChange {
                    tick: Tick(0),
                    scale: 1.0
                },
                TimeScaleChange {
                    tick: Tick(240),
                    scale: 0.5
                },
                TimeScaleChange {
                    tick: Tick(1920),
                    scale: 2.0
                },
            ])
        );
    }

    #[test]
    fn empty_list() {
        assert_eq!(time_scale_changes("\"\"", &resolver()), Ok(vec![]));
        assert_eq!(time_scale_changes("\" , \"", &resolver()), Ok(vec![]));
    }

    #[test]
    fn unquoted() {
        assert_eq!(
            time_scale_changes("0'0:1.0", &resolver()),
            Err(AnalyzeError::UnquotedTimeScale("0'0:1.0".into()))
        );
        assert_eq!(
            time_scale_changes("\"", &resolver()),
            Err(AnalyzeError::UnquotedTimeScale("\"".into()))
        );
    }

    #[test]
    fn malformed_segments() {
        for segment in ["0:1.0", "0'0", "x'0:1.0", "0'y:1.0", "0'0:fast", "0'0.5:1.0"] {
            assert_eq!(
                time_scale_changes(&format!("\"0'0:1.0, {segment}\""), &resolver()),
                Err(AnalyzeError::InvalidTimeScale(segment.into())),
                "{segment}"
            );
        }
    }

    #[test]
    fn tick_overflow() {
        let segment = "1'9223372036854775807:1.0";
        assert_eq!(
            time_scale_changes(&format!("\"{segment}\""), &resolver()),
            Err(AnalyzeError::InvalidTimeScale(segment.into()))
        );
        assert_eq!(
            time_scale_changes("\"0'9223372036854775807:1.0\"", &resolver()),
            Ok(vec![TimeScaleChange {
                tick: Tick(i64::MAX),
                scale: 1.0
            }])
        );
    }
}
