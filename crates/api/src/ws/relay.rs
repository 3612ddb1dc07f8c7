use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::broadcast;
use vidgen_events::ConsoleEvent;

use crate::ws::WsManager;

/// Forwards every console event from the bus to all WebSocket clients as a
/// JSON text frame.
pub struct EventRelay {
    ws_manager: Arc<WsManager>,
}

impl EventRelay {
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the relay loop until the event bus is dropped.
    pub async fn run(self, mut receiver: broadcast::Receiver<ConsoleEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(text) => self.ws_manager.broadcast(Message::Text(text.into())).await,
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            event_type = %event.event_type,
                            "Failed to serialize console event"
                        );
                    }
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Event relay lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, event relay shutting down");
                    break;
                }
            }
        }
    }
}
