//! Handlers for the generation console.
//!
//! Routes:
//! - `GET   /console`              — current console snapshot
//! - `PATCH /console/request`      — update generation parameters
//! - `POST  /console/generate`     — start a scripted run
//! - `POST  /console/result/show`  — show the result overlay
//! - `POST  /console/result/hide`  — hide the result overlay

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vidgen_core::request::RequestPatch;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/console
pub async fn get_console(State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse {
        data: state.console.snapshot().await,
    })
}

/// PATCH /api/v1/console/request
///
/// Absent fields are left unchanged. Unknown option ids and out-of-range
/// lengths are rejected before anything is applied.
pub async fn update_request(
    State(state): State<AppState>,
    input: Result<Json<RequestPatch>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(patch) = input.map_err(|e| AppError::BadRequest(e.body_text()))?;

    Ok(Json(DataResponse {
        data: state.console.update_request(patch).await,
    }))
}

/// POST /api/v1/console/generate
///
/// Starts a run and returns immediately with the 0% snapshot; progress is
/// delivered over the WebSocket and visible through `GET /console`.
pub async fn start_generation(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let handle = state.console.start().await?;
    tracing::debug!(run_id = %handle.run_id, "Generation accepted");

    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse {
            data: handle.snapshot,
        }),
    ))
}

/// POST /api/v1/console/result/show
pub async fn show_result(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let snapshot = state.console.show_result().await?;
    Ok(Json(DataResponse { data: snapshot }))
}

/// POST /api/v1/console/result/hide
pub async fn hide_result(State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse {
        data: state.console.hide_result().await,
    })
}
