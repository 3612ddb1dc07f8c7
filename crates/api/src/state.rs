use std::sync::Arc;

use vidgen_events::EventBus;
use vidgen_pipeline::GenerationConsole;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// The generation console of this process.
    pub console: Arc<GenerationConsole>,
    /// WebSocket connection manager (browser clients).
    pub ws_manager: Arc<WsManager>,
    /// Event bus the console publishes on.
    pub event_bus: Arc<EventBus>,
}
