//! This module handles the tokens:
//!
//! - `#BPMzz: n`: declares BPM `n` for label `zz`.
//! - `#mmm08: zz..`: BPM change channel, cells reference labels.

use std::collections::HashMap;

use crate::sus::{
    command::{channel::LineKind, mixin::SourceRangeMixinExt, time::Measure},
    error::{AnalyzeWarning, AnalyzeWarningWithRange, Result},
    model::BpmChange,
};

use super::{
    ClassifiedLine,
    bar_len::TickResolver,
    notes::{RawObject, raw_objects},
};

/// BPM values by label. A later declaration overwrites an earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BpmLabels<'a> {
    defs: HashMap<&'a str, f64>,
}

impl<'a> BpmLabels<'a> {
    /// Collects all `#BPMzz` declarations, regardless of where they are placed.
    pub fn collect(
        lines: &[ClassifiedLine<'a>],
        warnings: &mut Vec<AnalyzeWarningWithRange>,
    ) -> Self {
        let mut labels = Self::default();
        for line in lines {
            let LineKind::BpmDef { label } = line.kind else {
                continue;
            };
            match line.data().parse::<f64>() {
                Ok(bpm) => labels.insert(label, bpm),
                Err(_) => {
                    tracing::debug!(label, data = line.data(), "skipping invalid BPM definition");
                    warnings.push(
                        AnalyzeWarning::InvalidBpmDefinition {
                            label: label.into(),
                            value: line.data().into(),
                        }
                        .into_wrapper(line.line),
                    );
                }
            }
        }
        labels
    }

    /// Binds `bpm` to `label`.
    pub fn insert(&mut self, label: &'a str, bpm: f64) {
        self.defs.insert(label, bpm);
    }

    /// Gets the BPM bound to `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.defs.get(label).copied()
    }

    /// Returns the number of declared labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns whether no label is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Decodes a BPM change row in cell order. An undefined label changes BPM to 0 with a warning.
pub fn bpm_changes(
    line: &ClassifiedLine<'_>,
    measure: Measure,
    labels: &BpmLabels<'_>,
    resolver: &TickResolver,
    warnings: &mut Vec<AnalyzeWarningWithRange>,
) -> Result<Vec<BpmChange>> {
    Ok(raw_objects(measure, line.data(), resolver)?
        .into_iter()
        .map(|RawObject { tick, cell }| {
            let label: String = cell.iter().collect();
            let bpm = labels.get(&label).unwrap_or_else(|| {
                tracing::debug!(%tick, %label, "BPM label not defined, using 0");
                warnings.push(AnalyzeWarning::UndefinedBpmLabel(label.clone()).into_wrapper(line.line));
                0.0
            });
            BpmChange { tick, bpm }
        })
        .collect())
}
