//! Event type names published as the console changes state.
//!
//! Used by the generation console service when publishing on the event bus
//! and by WebSocket clients to tell messages apart.

/// A run has started at 0%.
pub const EVENT_GENERATION_STARTED: &str = "generation.started";

/// A run advanced to its next stage.
pub const EVENT_GENERATION_PROGRESS: &str = "generation.progress";

/// A run reached 100% and a result summary is available.
pub const EVENT_GENERATION_COMPLETED: &str = "generation.completed";

/// The result overlay was made visible.
pub const EVENT_RESULT_SHOWN: &str = "result.shown";

/// The result overlay was hidden.
pub const EVENT_RESULT_HIDDEN: &str = "result.hidden";

/// The generation parameters were edited.
pub const EVENT_REQUEST_UPDATED: &str = "request.updated";
