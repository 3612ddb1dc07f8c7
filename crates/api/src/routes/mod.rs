pub mod console;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ws                      WebSocket (console events)
/// /catalog                 option catalog
/// /console                 console snapshot
/// /console/request         update parameters (PATCH)
/// /console/generate        start a run (POST)
/// /console/result/show     show result overlay (POST)
/// /console/result/hide     hide result overlay (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .route("/catalog", get(handlers::catalog::get_catalog))
        .nest("/console", console::router())
}
