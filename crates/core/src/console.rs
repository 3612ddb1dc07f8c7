//! The generation console state machine.
//!
//! ```text
//!            start                 advance x6 (last one completes)
//!   Idle ───────────────► Running ─────────────────────────────────► Complete
//!                           ▲                                           │
//!                           └──────────────── start ────────────────────┘
//! ```
//!
//! The machine is driven by two inputs: [`Console::start`] from the user and
//! [`Console::advance`] from whatever clock the caller uses. Nothing here
//! sleeps; the timing lives in the pipeline crate.

use serde::Serialize;

use crate::error::CoreError;
use crate::request::{GenerationRequest, RequestPatch};
use crate::run::GenerationRun;
use crate::stages::{caption_for, Stage};
use crate::summary::ResultSummary;

/// Label of the start button while no run is active.
pub const BUTTON_LABEL_IDLE: &str = "Generate Video";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleState {
    Idle,
    Running,
    Complete,
}

/// What a single [`Console::advance`] step produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageAdvance {
    pub stage_index: usize,
    pub stage: Stage,
    pub progress_percent: u8,
    pub caption: &'static str,
    /// Present only on the step that completed the run.
    pub summary: Option<ResultSummary>,
}

/// The whole console: current selections, run progress and result overlay.
#[derive(Debug, Clone, Default)]
pub struct Console {
    request: GenerationRequest,
    run: GenerationRun,
    result: Option<ResultSummary>,
    result_visible: bool,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    pub fn run(&self) -> &GenerationRun {
        &self.run
    }

    pub fn result(&self) -> Option<&ResultSummary> {
        self.result.as_ref()
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    pub fn state(&self) -> ConsoleState {
        if self.run.is_active {
            ConsoleState::Running
        } else if self.run.is_complete() {
            ConsoleState::Complete
        } else {
            ConsoleState::Idle
        }
    }

    // -- Parameter selection --

    /// Replace the request wholesale. Allowed in every state.
    pub fn set_request(&mut self, request: GenerationRequest) {
        self.request = request;
    }

    /// Apply a partial update to the request. Allowed in every state.
    pub fn apply_patch(&mut self, patch: RequestPatch) {
        self.request = patch.apply(std::mem::take(&mut self.request));
    }

    /// Whether the start action is enabled: a non-blank prompt and no run
    /// in progress.
    pub fn can_start(&self) -> bool {
        self.request.has_prompt() && self.state() != ConsoleState::Running
    }

    // -- Progress --

    /// Begin a new run at 0%, hiding and discarding any previous result.
    ///
    /// Rejected while a run is active or when the prompt is blank; a
    /// rejected start leaves the console untouched.
    pub fn start(&mut self) -> Result<GenerationRun, CoreError> {
        if self.state() == ConsoleState::Running {
            return Err(CoreError::Conflict(
                "A generation run is already in progress".to_string(),
            ));
        }
        if !self.request.has_prompt() {
            return Err(CoreError::Validation(
                "Prompt must not be empty".to_string(),
            ));
        }

        self.run = GenerationRun::started();
        self.result = None;
        self.result_visible = false;
        Ok(self.run)
    }

    /// Move the active run to its next stage.
    ///
    /// Returns `None` when no run is active. The step that reaches 100%
    /// snapshots the request into a [`ResultSummary`] and shows the overlay.
    pub fn advance(&mut self) -> Option<StageAdvance> {
        let next = self.run.advanced()?;
        let stage_index = next.stage_index?;
        let stage = *next.stage()?;
        self.run = next;

        let summary = if next.is_complete() {
            let summary = ResultSummary::from_request(&self.request);
            self.result = Some(summary.clone());
            self.result_visible = true;
            Some(summary)
        } else {
            None
        };

        Some(StageAdvance {
            stage_index,
            stage,
            progress_percent: next.progress_percent,
            caption: caption_for(next.progress_percent),
            summary,
        })
    }

    /// Caption for the current progress percentage.
    pub fn caption(&self) -> &'static str {
        caption_for(self.run.progress_percent)
    }

    /// Label of the start button for the current state.
    pub fn button_label(&self) -> String {
        if self.run.is_active {
            format!("Generating... {}%", self.run.progress_percent)
        } else {
            BUTTON_LABEL_IDLE.to_string()
        }
    }

    // -- Result overlay --

    /// Make the result overlay visible. Requires a completed run.
    pub fn show_result(&mut self) -> Result<(), CoreError> {
        if self.result.is_none() {
            return Err(CoreError::Conflict(
                "No generation result is available".to_string(),
            ));
        }
        self.result_visible = true;
        Ok(())
    }

    /// Hide the result overlay. Run data and the summary are kept.
    pub fn hide_result(&mut self) {
        self.result_visible = false;
    }

    pub fn snapshot(&self) -> ConsoleSnapshot {
        ConsoleSnapshot {
            state: self.state(),
            request: self.request.clone(),
            progress_percent: self.run.progress_percent,
            stage_index: self.run.stage_index,
            stage_message: self.run.stage().map(|s| s.message),
            caption: self.caption(),
            can_start: self.can_start(),
            button_label: self.button_label(),
            result_visible: self.result_visible,
            result: self.result.clone(),
        }
    }
}

/// Everything a view needs to render the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleSnapshot {
    pub state: ConsoleState,
    pub request: GenerationRequest,
    pub progress_percent: u8,
    pub stage_index: Option<usize>,
    pub stage_message: Option<&'static str>,
    pub caption: &'static str,
    pub can_start: bool,
    pub button_label: String,
    pub result_visible: bool,
    pub result: Option<ResultSummary>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
