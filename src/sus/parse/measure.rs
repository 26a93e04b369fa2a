//! This module handles the directive:
//!
//! - `#MEASUREBS n`: adds `n` to the measure of every chart line after it.

/// One `#MEASUREBS` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureShift {
    /// Count of chart lines preceding the directive.
    pub line_index: usize,
    /// Measures to add.
    pub delta: i64,
}

/// All `#MEASUREBS` directives of a chart, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasureShifts {
    shifts: Vec<MeasureShift>,
}

impl MeasureShifts {
    /// Records a directive placed after `line_index` chart lines.
    pub fn push(&mut self, line_index: usize, delta: i64) {
        self.shifts.push(MeasureShift { line_index, delta });
    }

    /// Iterates the directives, the most recently declared first.
    pub fn iter(&self) -> impl Iterator<Item = &MeasureShift> {
        self.shifts.iter().rev()
    }

    /// Returns the measure shift of the chart line at `line_index`.
    ///
    /// The most recently declared directive anchored at or before the line wins. It is 0 if there is none.
    #[must_use]
    pub fn shift_at(&self, line_index: usize) -> i64 {
        self.iter()
            .find(|shift| shift.line_index <= line_index)
            .map_or(0, |shift| shift.delta)
    }

    /// Returns whether no directive was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

impl FromIterator<MeasureShift> for MeasureShifts {
    fn from_iter<T: IntoIterator<Item = MeasureShift>>(iter: T) -> Self {
        Self {
            shifts: iter.into_iter().collect(),
        }
    }
}
