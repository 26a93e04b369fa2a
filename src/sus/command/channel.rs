//! Classification of chart line headers.
//!
//! A chart line looks like `#{header}:{data}`. The header shape decides what the data means:
//!
//! | Header   | Meaning                                                |
//! |----------|--------------------------------------------------------|
//! | `TILxx`  | Time scale (scroll speed) change list                  |
//! | `BPMzz`  | Declares the BPM value of label `zz`                   |
//! | `mmm02`  | Bar length of measure `mmm` in beats                   |
//! | `mmm08`  | BPM change row referencing labels                      |
//! | `mmm1x`  | Tap notes on lane `x`                                  |
//! | `mmm3xy` | Slide stream notes on lane `x`, stream channel `y`     |
//! | `mmm5x`  | Directional notes on lane `x`                          |

use super::time::Measure;

/// Header prefix of time scale rows.
pub const TIME_SCALE_PREFIX: &str = "TIL";
/// Header prefix of BPM label declarations.
pub const BPM_DEF_PREFIX: &str = "BPM";
/// Channel suffix of bar length rows.
pub const BAR_LENGTH_CHANNEL: &str = "02";
/// Channel suffix of BPM change rows.
pub const BPM_CHANGE_CHANNEL: &str = "08";
/// Channel code of tap note rows.
pub const TAP_CHANNEL: u8 = b'1';
/// Channel code of slide stream rows.
pub const STREAM_CHANNEL: u8 = b'3';
/// Channel code of directional note rows.
pub const DIRECTIONAL_CHANNEL: u8 = b'5';

/// What a chart line header means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind<'a> {
    /// `#TILxx: "..."`, a quoted list of time scale changes.
    TimeScale,
    /// `#BPMzz: 120`, a BPM value bound to label `zz`.
    BpmDef {
        /// The two-character label.
        label: &'a str,
    },
    /// `#mmm02: 4`, the beats per measure from `mmm` on.
    BarLength {
        /// The measure written in the header, without shifts.
        measure: Measure,
    },
    /// `#mmm08: zz..`, BPM changes referencing labels.
    BpmChange {
        /// The measure written in the header, without shifts.
        measure: Measure,
    },
    /// `#mmm1x: ..`, tap notes.
    Tap {
        /// The measure written in the header, without shifts.
        measure: Measure,
        /// The lane, decoded from base 36.
        lane: u8,
    },
    /// `#mmm3xy: ..`, notes of the slide stream `y`.
    Stream {
        /// The measure written in the header, without shifts.
        measure: Measure,
        /// The lane, decoded from base 36.
        lane: u8,
        /// The stream channel grouping rows into one stream.
        channel: char,
    },
    /// `#mmm5x: ..`, directional notes.
    Directional {
        /// The measure written in the header, without shifts.
        measure: Measure,
        /// The lane, decoded from base 36.
        lane: u8,
    },
    /// Any other header. The line is ignored.
    Unrecognized,
}

impl<'a> LineKind<'a> {
    /// Classifies the header of a chart line.
    #[must_use]
    pub fn classify(header: &'a str) -> Self {
        if !header.is_ascii() {
            return Self::Unrecognized;
        }
        let bytes = header.as_bytes();
        if bytes.len() == 5 && header.starts_with(TIME_SCALE_PREFIX) {
            return Self::TimeScale;
        }
        if bytes.len() == 5 && header.starts_with(BPM_DEF_PREFIX) {
            return Self::BpmDef {
                label: &header[3..],
            };
        }
        let Some(measure) = read_measure(header) else {
            return Self::Unrecognized;
        };
        match bytes.len() {
            5 if header.ends_with(BAR_LENGTH_CHANNEL) => Self::BarLength { measure },
            5 if header.ends_with(BPM_CHANGE_CHANNEL) => Self::BpmChange { measure },
            5 => match (bytes[3], base36(char::from(bytes[4]))) {
                (TAP_CHANNEL, Some(lane)) => Self::Tap { measure, lane },
                (DIRECTIONAL_CHANNEL, Some(lane)) => Self::Directional { measure, lane },
                _ => Self::Unrecognized,
            },
            6 if bytes[3] == STREAM_CHANNEL => base36(char::from(bytes[4])).map_or(
                Self::Unrecognized,
                |lane| Self::Stream {
                    measure,
                    lane,
                    channel: char::from(bytes[5]),
                },
            ),
            _ => Self::Unrecognized,
        }
    }

    /// Returns the measure written in the header, if the row is placed on a measure.
    #[must_use]
    pub const fn measure(&self) -> Option<Measure> {
        match *self {
            Self::BarLength { measure }
            | Self::BpmChange { measure }
            | Self::Tap { measure, .. }
            | Self::Stream { measure, .. }
            | Self::Directional { measure, .. } => Some(measure),
            Self::TimeScale | Self::BpmDef { .. } | Self::Unrecognized => None,
        }
    }
}

/// Reads the 3-digit decimal measure prefix of a header.
fn read_measure(header: &str) -> Option<Measure> {
    let digits = header.get(..3)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(Measure)
}

/// Decodes a base-36 digit `0-9A-Za-z`, case-insensitively.
#[must_use]
pub fn base36(c: char) -> Option<u8> {
    c.to_digit(36).and_then(|d| u8::try_from(d).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_headers() {
        assert_eq!(LineKind::classify("TIL00"), LineKind::TimeScale);
        assert_eq!(LineKind::classify("BPM01"), LineKind::BpmDef { label: "01" });
        assert_eq!(
            LineKind::classify("00002"),
            LineKind::BarLength {
                measure: Measure(0)
            }
        );
        assert_eq!(
            LineKind::classify("01208"),
            LineKind::BpmChange {
                measure: Measure(12)
            }
        );
        assert_eq!(
            LineKind::classify("0011a"),
            LineKind::Tap {
                measure: Measure(1),
                lane: 10
            }
        );
        assert_eq!(
            LineKind::classify("0015F"),
            LineKind::Directional {
                measure: Measure(1),
                lane: 15
            }
        );
        assert_eq!(
            LineKind::classify("00233z"),
            LineKind::Stream {
                measure: Measure(2),
                lane: 3,
                channel: 'z'
            }
        );
    }

    #[test]
    fn unrecognized_headers() {
        assert_eq!(LineKind::classify("TITLE"), LineKind::Unrecognized);
        assert_eq!(LineKind::classify("00124"), LineKind::Unrecognized);
        assert_eq!(LineKind::classify("0011"), LineKind::Unrecognized);
        assert_eq!(LineKind::classify("0a011"), LineKind::Unrecognized);
        assert_eq!(LineKind::classify("0011!"), LineKind::Unrecognized);
        assert_eq!(LineKind::classify("00213a"), LineKind::Unrecognized);
        assert_eq!(LineKind::classify("ＢＰＭ01"), LineKind::Unrecognized);
    }

    #[test]
    fn base36_digits() {
        assert_eq!(base36('0'), Some(0));
        assert_eq!(base36('9'), Some(9));
        assert_eq!(base36('a'), Some(10));
        assert_eq!(base36('Z'), Some(35));
        assert_eq!(base36('-'), None);
    }
}
