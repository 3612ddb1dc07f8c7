//! Progress of a single scripted run.

use serde::Serialize;

use crate::stages::{Stage, COMPLETE_PERCENT, STAGES};

/// Progress of the current (or most recently finished) run.
///
/// A run is advanced by replacement: [`GenerationRun::advanced`] returns the
/// next value and leaves `self` untouched. Progress only ever moves forward
/// through [`STAGES`], one entry at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GenerationRun {
    pub progress_percent: u8,
    pub is_active: bool,
    /// Index into [`STAGES`] of the last stage reached, `None` before the
    /// first advance.
    pub stage_index: Option<usize>,
}

impl GenerationRun {
    /// A freshly started run at 0%.
    pub fn started() -> Self {
        Self {
            progress_percent: 0,
            is_active: true,
            stage_index: None,
        }
    }

    /// The stage this run is currently at, if any.
    pub fn stage(&self) -> Option<&'static Stage> {
        self.stage_index.map(|i| &STAGES[i])
    }

    /// Index of the stage the next advance will enter.
    fn next_index(&self) -> usize {
        self.stage_index.map_or(0, |i| i + 1)
    }

    /// The run after one more stage, or `None` when the run is not active
    /// or the table is exhausted.
    ///
    /// Entering the final stage deactivates the run.
    pub fn advanced(&self) -> Option<Self> {
        if !self.is_active {
            return None;
        }
        let index = self.next_index();
        let stage = STAGES.get(index)?;
        Some(Self {
            progress_percent: stage.percent,
            is_active: stage.percent < COMPLETE_PERCENT,
            stage_index: Some(index),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.progress_percent == COMPLETE_PERCENT && !self.is_active
    }
}
