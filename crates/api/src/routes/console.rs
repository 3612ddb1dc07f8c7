//! Route definitions for the generation console.
//!
//! ```text
//! GET    /                 get_console
//! PATCH  /request          update_request
//! POST   /generate         start_generation
//! POST   /result/show      show_result
//! POST   /result/hide      hide_result
//! ```

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::console;
use crate::state::AppState;

/// Routes mounted at `/console`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(console::get_console))
        .route("/request", patch(console::update_request))
        .route("/generate", post(console::start_generation))
        .route("/result/show", post(console::show_result))
        .route("/result/hide", post(console::hide_result))
}
