//! Domain model for the video generation console.
//!
//! Everything in this crate is synchronous and free of I/O so that the
//! console state machine can be exercised without timers:
//!
//! - [`catalog`] — the fixed option sets (models, voices, styles, modes,
//!   length bounds).
//! - [`request`] — [`GenerationRequest`], the user's current selections.
//! - [`stages`] — the six-stage progress table and caption bands.
//! - [`run`] — [`GenerationRun`], progress of the current or last run.
//! - [`summary`] — [`ResultSummary`] shown when a run completes.
//! - [`console`] — [`Console`], the `Idle → Running → Complete` machine.

pub mod catalog;
pub mod console;
pub mod console_events;
pub mod error;
pub mod request;
pub mod run;
pub mod stages;
pub mod summary;

pub use catalog::{ModelId, VideoLength, VideoMode, VideoStyle, VoiceType};
pub use console::{Console, ConsoleSnapshot, ConsoleState, StageAdvance};
pub use error::CoreError;
pub use request::GenerationRequest;
pub use run::GenerationRun;
pub use summary::ResultSummary;
