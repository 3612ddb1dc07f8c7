//! Integration tests for the catalog and generation console endpoints.
//!
//! Runs are driven by the real tokio scheduler on paused time, so a full
//! six-stage run takes 9 simulated seconds and no real time.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post};
use serde_json::json;
use vidgen_core::console_events::{
    EVENT_GENERATION_COMPLETED, EVENT_GENERATION_STARTED, EVENT_REQUEST_UPDATED,
};

/// Comfortably longer than six 1.5 s stage delays.
const FULL_RUN: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_lists_all_options() {
    let app = common::build_test_app();
    let response = get(&app.router, "/api/v1/catalog").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["models"].as_array().unwrap().len(), 3);
    assert_eq!(data["models"][2]["id"], "kling-2.6-pro");
    assert_eq!(data["models"][2]["name"], "Kling 2.6 Pro");
    assert_eq!(data["models"][2]["description"], "Highest quality");
    assert_eq!(data["voices"].as_array().unwrap().len(), 5);
    assert_eq!(data["styles"].as_array().unwrap().len(), 9);
    assert_eq!(data["styles"][6]["id"], "epic");
    assert_eq!(data["modes"][1]["id"], "image-to-video");
    assert_eq!(data["length"]["min_minutes"], 1);
    assert_eq!(data["length"]["max_minutes"], 10);
    assert_eq!(data["length"]["shortcuts"], json!([1, 3, 5, 10]));
    assert_eq!(data["quality"]["label"], "4K");
    assert_eq!(data["hero"]["headline"], "Create Cinematic Videos with AI");
    assert_eq!(data["features"].as_array().unwrap().len(), 3);
    assert_eq!(data["features"][1]["title"], "Smart Voice Synthesis");
}

#[tokio::test]
async fn patch_request_accepts_style_label() {
    let app = common::build_test_app();
    let response = patch_json(
        &app.router,
        "/api/v1/console/request",
        json!({ "style": "Epic" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["request"]["style"], "epic");
}

#[tokio::test]
async fn patch_request_publishes_request_updated() {
    let app = common::build_test_app();
    let mut events = app.event_bus.subscribe();
    patch_json(&app.router, "/api/v1/console/request", json!({ "prompt": "Forest" })).await;

    let event = events.try_recv().unwrap();
    assert_eq!(event.event_type, EVENT_REQUEST_UPDATED);
    assert_eq!(event.payload["can_start"], true);
}

// ---------------------------------------------------------------------------
// Console state and parameters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fresh_console_is_idle_with_defaults() {
    let app = common::build_test_app();
    let json = body_json(get(&app.router, "/api/v1/console").await).await;
    let data = &json["data"];

    assert_eq!(data["state"], "idle");
    assert_eq!(data["progress_percent"], 0);
    assert_eq!(data["can_start"], false);
    assert_eq!(data["button_label"], "Generate Video");
    assert_eq!(data["result_visible"], false);
    assert_eq!(data["request"]["model"], "veo-3.1");
    assert_eq!(data["request"]["style"], "cinematic");
    assert_eq!(data["request"]["length_minutes"], 3);
}

#[tokio::test]
async fn patch_request_updates_only_given_fields() {
    let app = common::build_test_app();
    let response = patch_json(
        &app.router,
        "/api/v1/console/request",
        json!({ "prompt": "A lighthouse in a storm", "voice_type": "horror" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["request"]["prompt"], "A lighthouse in a storm");
    assert_eq!(data["request"]["voice_type"], "horror");
    assert_eq!(data["request"]["model"], "veo-3.1");
    assert_eq!(data["can_start"], true);
}

#[tokio::test]
async fn patch_request_rejects_unknown_model() {
    let app = common::build_test_app();
    let response = patch_json(
        &app.router,
        "/api/v1/console/request",
        json!({ "model": "sora-2" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let json = body_json(get(&app.router, "/api/v1/console").await).await;
    assert_eq!(json["data"]["request"]["model"], "veo-3.1");
}

#[tokio::test]
async fn patch_request_rejects_length_out_of_range() {
    let app = common::build_test_app();
    let response = patch_json(
        &app.router,
        "/api/v1/console/request",
        json!({ "length_minutes": 11 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_with_empty_prompt_is_rejected() {
    let app = common::build_test_app();
    patch_json(&app.router, "/api/v1/console/request", json!({ "prompt": "   " })).await;

    let response = post(&app.router, "/api/v1/console/generate").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test(start_paused = true)]
async fn generate_runs_to_completion() {
    let app = common::build_test_app();
    patch_json(
        &app.router,
        "/api/v1/console/request",
        json!({
            "prompt": "A robot walks on Mars",
            "model": "kling-2.6-pro",
            "style": "epic",
            "length_minutes": 5,
        }),
    )
    .await;
    let mut events = app.event_bus.subscribe();

    let response = post(&app.router, "/api/v1/console/generate").await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let started = body_json(response).await;
    assert_eq!(started["data"]["state"], "running");
    assert_eq!(started["data"]["progress_percent"], 0);
    assert_eq!(started["data"]["button_label"], "Generating... 0%");

    tokio::time::sleep(FULL_RUN).await;

    let json = body_json(get(&app.router, "/api/v1/console").await).await;
    let data = &json["data"];
    assert_eq!(data["state"], "complete");
    assert_eq!(data["progress_percent"], 100);
    assert_eq!(data["caption"], "Finalizing your 4K masterpiece...");
    assert_eq!(data["result_visible"], true);
    assert_eq!(data["result"]["duration"], "5m");
    assert_eq!(data["result"]["quality"], "4K");
    assert_eq!(data["result"]["model"], "KLING-2.6-PRO");
    assert_eq!(data["result"]["style"], "epic");

    assert_eq!(events.recv().await.unwrap().event_type, EVENT_GENERATION_STARTED);
    let mut last = None;
    while let Ok(event) = events.try_recv() {
        last = Some(event.event_type);
    }
    assert_eq!(last.as_deref(), Some(EVENT_GENERATION_COMPLETED));
}

#[tokio::test(start_paused = true)]
async fn progress_is_visible_mid_run() {
    let app = common::build_test_app();
    patch_json(&app.router, "/api/v1/console/request", json!({ "prompt": "Forest" })).await;
    post(&app.router, "/api/v1/console/generate").await;

    // Three stage delays (4.5 s) have elapsed: 15, 30, 50.
    tokio::time::sleep(Duration::from_millis(4600)).await;

    let json = body_json(get(&app.router, "/api/v1/console").await).await;
    let data = &json["data"];
    assert_eq!(data["state"], "running");
    assert_eq!(data["progress_percent"], 50);
    assert_eq!(data["stage_index"], 2);
    assert_eq!(data["stage_message"], "Creating video frames...");
    assert_eq!(data["caption"], "Converting images to smooth video frames...");
    assert_eq!(data["can_start"], false);
}

#[tokio::test(start_paused = true)]
async fn generate_while_running_returns_conflict() {
    let app = common::build_test_app();
    patch_json(&app.router, "/api/v1/console/request", json!({ "prompt": "Forest" })).await;
    post(&app.router, "/api/v1/console/generate").await;
    tokio::time::sleep(Duration::from_millis(1600)).await;

    let response = post(&app.router, "/api/v1/console/generate").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let snapshot = app.console.snapshot().await;
    assert_eq!(snapshot.progress_percent, 15);
}

// ---------------------------------------------------------------------------
// Result overlay
// ---------------------------------------------------------------------------

#[tokio::test]
async fn show_result_before_any_run_returns_conflict() {
    let app = common::build_test_app();
    let response = post(&app.router, "/api/v1/console/result/show").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test(start_paused = true)]
async fn hiding_result_keeps_run_data() {
    let app = common::build_test_app();
    patch_json(&app.router, "/api/v1/console/request", json!({ "prompt": "Forest" })).await;
    post(&app.router, "/api/v1/console/generate").await;
    tokio::time::sleep(FULL_RUN).await;

    let hidden = body_json(post(&app.router, "/api/v1/console/result/hide").await).await;
    assert_eq!(hidden["data"]["result_visible"], false);
    assert_eq!(hidden["data"]["state"], "complete");
    assert_eq!(hidden["data"]["progress_percent"], 100);
    assert_eq!(hidden["data"]["request"]["prompt"], "Forest");

    let shown = body_json(post(&app.router, "/api/v1/console/result/show").await).await;
    assert_eq!(shown["data"]["result_visible"], true);
    assert_eq!(shown["data"]["result"], hidden["data"]["result"]);
}

#[tokio::test(start_paused = true)]
async fn regenerate_after_completion_resets_progress() {
    let app = common::build_test_app();
    patch_json(&app.router, "/api/v1/console/request", json!({ "prompt": "Forest" })).await;
    post(&app.router, "/api/v1/console/generate").await;
    tokio::time::sleep(FULL_RUN).await;

    let response = post(&app.router, "/api/v1/console/generate").await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["progress_percent"], 0);
    assert_eq!(json["data"]["result_visible"], false);
    assert!(json["data"]["result"].is_null());
}
