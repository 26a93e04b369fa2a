//! The resolved score, the output of [`super::analyze`].
//!
//! Every event is placed by absolute [`Tick`], so consumers need only [`Score::ticks_per_beat`] and the BPM
//! changes to schedule them in seconds.

use super::command::time::Tick;

/// A BPM change event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BpmChange {
    /// Where the BPM changes.
    pub tick: Tick,
    /// The new BPM. 0 if the referenced label was not defined.
    pub bpm: f64,
}

/// A time scale (scroll speed) change event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeScaleChange {
    /// Where the scale changes.
    pub tick: Tick,
    /// The new scroll speed factor.
    pub scale: f64,
}

/// A note decoded from a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteEvent {
    /// Where the note is.
    pub tick: Tick,
    /// The leftmost lane, `0-35`.
    pub lane: u8,
    /// Lanes covered by the note, `1-35` on well-formed charts.
    pub width: u8,
    /// The note type code, `0-35`. Its meaning depends on the row kind.
    pub note_type: u8,
}

/// A slide: notes of one stream from a start up to and including a terminal note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    /// Notes in tick order.
    pub notes: Vec<NoteEvent>,
}

/// The tick-indexed score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct Score {
    /// Seconds to add to the music position, the negated `#WAVEOFFSET`.
    pub offset: f64,
    /// Ticks in a beat, from `#REQUEST "ticks_per_beat n"`.
    pub ticks_per_beat: u32,
    /// Time scale changes. Sorted within each `#TIL` row.
    pub time_scale_changes: Vec<TimeScaleChange>,
    /// BPM changes in row order.
    pub bpm_changes: Vec<BpmChange>,
    /// Tap notes in row order.
    pub tap_notes: Vec<NoteEvent>,
    /// Directional notes in row order.
    pub directional_notes: Vec<NoteEvent>,
    /// Slides of every stream.
    pub slides: Vec<Slide>,
}
