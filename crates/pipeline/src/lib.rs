//! Scripted generation pipeline.
//!
//! No model is invoked here. A "generation" is the fixed six-stage progress
//! table played back one stage delay at a time:
//!
//! - [`scheduler`] — the injectable delay source.
//! - [`simulator`] — [`GenerationConsole`], the shared console service that
//!   starts runs and drives them to completion.
//! - [`config`] — [`SimulatorConfig`] loaded from the environment.

pub mod config;
pub mod scheduler;
pub mod simulator;

pub use config::SimulatorConfig;
pub use scheduler::{InstantScheduler, Scheduler, TokioScheduler};
pub use simulator::{GenerationConsole, RunHandle};
