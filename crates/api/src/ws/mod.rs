//! WebSocket infrastructure for live console updates.
//!
//! Provides connection management, heartbeat pings, the HTTP upgrade
//! handler and the relay that forwards console events to every client.

mod handler;
mod heartbeat;
pub mod manager;
mod relay;

pub use handler::{ws_handler, MSG_TYPE_CONSOLE_SNAPSHOT};
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
pub use relay::EventRelay;
