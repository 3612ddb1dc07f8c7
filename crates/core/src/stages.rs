//! Scripted progress stages and caption bands.
//!
//! A run walks [`STAGES`] in order, one entry per timer tick. The caption
//! shown under the progress bar is derived from the percentage alone via
//! [`caption_for`]; it does not depend on which stage produced it.

use std::time::Duration;

use serde::Serialize;

/// Delay between two consecutive stage advances.
pub const DEFAULT_STAGE_DELAY: Duration = Duration::from_millis(1500);

/// One scripted step of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stage {
    /// Progress percentage reached when this stage is entered.
    pub percent: u8,
    /// Short description of the phase.
    pub message: &'static str,
}

/// The fixed stage table. Percentages are strictly increasing and end at 100.
pub const STAGES: [Stage; 6] = [
    Stage { percent: 15, message: "Analyzing prompt..." },
    Stage { percent: 30, message: "Generating images..." },
    Stage { percent: 50, message: "Creating video frames..." },
    Stage { percent: 70, message: "Adding voice & music..." },
    Stage { percent: 85, message: "Applying transitions..." },
    Stage { percent: 100, message: "Finalizing video..." },
];

/// Number of advances in a full run.
pub const STAGE_COUNT: usize = STAGES.len();

/// Percentage at which a run is complete.
pub const COMPLETE_PERCENT: u8 = 100;

/// Caption bands as `(lower bound inclusive, caption)`, ascending.
const CAPTION_BANDS: [(u8, &str); 6] = [
    (0, "Analyzing your prompt and generating storyboard..."),
    (20, "Creating high-quality images with consistent characters..."),
    (40, "Converting images to smooth video frames..."),
    (60, "Adding AI-generated voice and background music..."),
    (80, "Applying professional transitions and effects..."),
    (95, "Finalizing your 4K masterpiece..."),
];

/// Caption shown for a given progress percentage.
pub fn caption_for(percent: u8) -> &'static str {
    CAPTION_BANDS
        .iter()
        .rev()
        .find(|(lower, _)| percent >= *lower)
        .map(|(_, caption)| *caption)
        .unwrap_or(CAPTION_BANDS[0].1)
}
