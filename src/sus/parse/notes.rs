//! This module handles the tokens:
//!
//! - `#mmm1x: tw..`: tap notes on lane `x`.
//! - `#mmm5x: tw..`: directional notes on lane `x`.
//! - `#mmm3xy: tw..`: notes of slide stream `y` on lane `x`.
//!
//! Data rows are sequences of two-character cells dividing the measure evenly. `00` is an empty cell.
//! In a note cell, `t` is the note type and `w` is the width, both in base 36.

use std::num::NonZeroU64;

use crate::sus::{
    command::{
        channel::base36,
        mixin::SourceRangeMixinExt,
        time::{Measure, MeasurePos, Tick},
    },
    error::{AnalyzeWarning, AnalyzeWarningWithRange, Result},
    lex::ChartLineWithRange,
    model::NoteEvent,
};

use super::bar_len::TickResolver;

/// The cell meaning no object.
pub const EMPTY_CELL: [char; 2] = ['0', '0'];

/// A non-empty cell placed on the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawObject {
    /// Where the cell is.
    pub tick: Tick,
    /// The two characters of the cell.
    pub cell: [char; 2],
}

/// Decodes the data row into non-empty cells.
///
/// The `i`-th of `n` complete cells is placed at `i/n` of the measure. A trailing incomplete cell is ignored.
pub fn raw_objects(measure: Measure, data: &str, resolver: &TickResolver) -> Result<Vec<RawObject>> {
    let chars: Vec<char> = data.chars().collect();
    let cells = chars.chunks_exact(2);
    let Some(denominator) = NonZeroU64::new(cells.len() as u64) else {
        return Ok(Vec::new());
    };
    cells
        .enumerate()
        .filter(|(_, cell)| *cell != EMPTY_CELL)
        .map(|(i, cell)| {
            Ok(RawObject {
                tick: resolver.to_tick(MeasurePos::new(measure, i as u64, denominator))?,
                cell: [cell[0], cell[1]],
            })
        })
        .collect()
}

/// Decodes the data row into notes on `lane`. Cells not made of base-36 digits are skipped with a warning.
pub fn notes(
    line: &ChartLineWithRange<'_>,
    measure: Measure,
    lane: u8,
    resolver: &TickResolver,
    warnings: &mut Vec<AnalyzeWarningWithRange>,
) -> Result<Vec<NoteEvent>> {
    let objects = raw_objects(measure, line.content().data, resolver)?;
    let mut notes = Vec::with_capacity(objects.len());
    for RawObject { tick, cell } in objects {
        let (Some(note_type), Some(width)) = (base36(cell[0]), base36(cell[1])) else {
            let cell: String = cell.iter().collect();
            tracing::debug!(%measure, %cell, "skipping invalid note cell");
            warnings.push(AnalyzeWarning::InvalidCell(cell).into_wrapper(line));
            continue;
        };
        notes.push(NoteEvent {
            tick,
            lane,
            width,
            note_type,
        });
    }
    Ok(notes)
}
