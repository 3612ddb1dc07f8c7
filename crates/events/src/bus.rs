//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`ConsoleEvent`]s. It is
//! designed to be shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;
use vidgen_core::console::StageAdvance;
use vidgen_core::console_events::{
    EVENT_GENERATION_COMPLETED, EVENT_GENERATION_PROGRESS, EVENT_GENERATION_STARTED,
    EVENT_REQUEST_UPDATED, EVENT_RESULT_HIDDEN, EVENT_RESULT_SHOWN,
};
use vidgen_core::stages::caption_for;
use vidgen_core::GenerationRequest;

// ---------------------------------------------------------------------------
// ConsoleEvent
// ---------------------------------------------------------------------------

/// A state change of the generation console.
///
/// Built with [`ConsoleEvent::new`] plus the builder methods, or with one of
/// the typed constructors for the well-known event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleEvent {
    /// Dot-separated event name, e.g. `"generation.progress"`.
    #[serde(rename = "type")]
    pub event_type: String,

    /// The run this event belongs to, if any.
    pub run_id: Option<Uuid>,

    /// Event-specific data.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl ConsoleEvent {
    /// Create an event with only the required `event_type`.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            run_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    pub fn with_run(mut self, run_id: Uuid) -> Self {
        self.run_id = Some(run_id);
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// A run started at 0% for `request`.
    pub fn started(run_id: Uuid, request: &GenerationRequest) -> Self {
        Self::new(EVENT_GENERATION_STARTED)
            .with_run(run_id)
            .with_payload(serde_json::json!({
                "progress_percent": 0,
                "caption": caption_for(0),
                "request": request,
            }))
    }

    /// A run advanced one stage. The final advance becomes a
    /// `generation.completed` event carrying the summary.
    pub fn advanced(run_id: Uuid, step: &StageAdvance) -> Self {
        let event_type = if step.summary.is_some() {
            EVENT_GENERATION_COMPLETED
        } else {
            EVENT_GENERATION_PROGRESS
        };
        Self::new(event_type)
            .with_run(run_id)
            .with_payload(serde_json::json!({
                "progress_percent": step.progress_percent,
                "stage_index": step.stage_index,
                "stage_message": step.stage.message,
                "caption": step.caption,
                "summary": step.summary,
            }))
    }

    /// The generation parameters changed. `can_start` is the new enablement
    /// of the generate button.
    pub fn request_updated(request: &GenerationRequest, can_start: bool) -> Self {
        Self::new(EVENT_REQUEST_UPDATED).with_payload(serde_json::json!({
            "request": request,
            "can_start": can_start,
        }))
    }

    /// The result overlay was shown or hidden.
    pub fn result_visibility(visible: bool) -> Self {
        let event_type = if visible {
            EVENT_RESULT_SHOWN
        } else {
            EVENT_RESULT_HIDDEN
        };
        Self::new(event_type).with_payload(serde_json::json!({ "result_visible": visible }))
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`ConsoleEvent`].
///
/// # Usage
///
/// ```rust
/// use vidgen_events::bus::{ConsoleEvent, EventBus};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(ConsoleEvent::new("result.hidden"));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<ConsoleEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: ConsoleEvent) {
        tracing::trace!(
            event_type = %event.event_type,
            receivers = self.sender.receiver_count(),
            "Publishing console event",
        );
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
