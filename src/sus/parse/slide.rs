//! Aggregation of slide stream rows (`#mmm3xy`) and their segmentation into slides.
//!
//! Rows sharing the stream channel `y` form one stream across measures. Sorted by tick, the stream is cut
//! into slides after every note of [`TERMINAL_NOTE_TYPE`].

use itertools::Itertools;

use crate::sus::model::{NoteEvent, Slide};

use super::config::UnterminatedSlide;

/// The note type closing a slide.
pub const TERMINAL_NOTE_TYPE: u8 = 2;

/// Notes of every stream channel, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Streams {
    streams: Vec<(char, Vec<NoteEvent>)>,
}

impl Streams {
    /// Appends notes to the stream of `channel`.
    pub fn extend(&mut self, channel: char, notes: impl IntoIterator<Item = NoteEvent>) {
        let position = self.streams.iter().position(|(c, _)| *c == channel);
        let stream = match position {
            Some(i) => &mut self.streams[i].1,
            None => {
                self.streams.push((channel, Vec::new()));
                let last = self.streams.len() - 1;
                &mut self.streams[last].1
            }
        };
        stream.extend(notes);
    }

    /// Gets the notes appended to `channel`, in appended order.
    #[must_use]
    pub fn get(&self, channel: char) -> Option<&[NoteEvent]> {
        self.streams
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, notes)| notes.as_slice())
    }

    /// Segments every stream into slides, concatenated in stream order.
    #[must_use]
    pub fn into_slides(self, unterminated: UnterminatedSlide) -> Vec<Slide> {
        self.streams
            .into_iter()
            .flat_map(|(_, notes)| segment(notes, unterminated))
            .collect()
    }
}

/// Cuts a stream into slides. Notes at the same tick keep their appended order.
#[must_use]
pub fn segment(notes: Vec<NoteEvent>, unterminated: UnterminatedSlide) -> Vec<Slide> {
    let mut slides = Vec::new();
    let mut current: Option<Vec<NoteEvent>> = None;
    for note in notes.into_iter().sorted_by_key(|note| note.tick) {
        let slide = current.get_or_insert_with(Vec::new);
        slide.push(note);
        if note.note_type == TERMINAL_NOTE_TYPE {
            slides.extend(current.take().map(|notes| Slide { notes }));
        }
    }
    if let Some(notes) = current {
        match unterminated {
            UnterminatedSlide::Keep => slides.push(Slide { notes }),
            UnterminatedSlide::Drop => {
                tracing::debug!(notes = notes.len(), "dropping unterminated slide");
            }
        }
    }
    slides
}
