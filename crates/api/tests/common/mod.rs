//! Shared helpers for the API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use vidgen_api::config::ServerConfig;
use vidgen_api::router::build_app_router;
use vidgen_api::state::AppState;
use vidgen_api::ws::WsManager;
use vidgen_events::EventBus;
use vidgen_pipeline::{GenerationConsole, SimulatorConfig, TokioScheduler};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        simulator: SimulatorConfig::default(),
    }
}

/// A test application plus handles to its shared services.
pub struct TestApp {
    pub router: Router,
    pub console: Arc<GenerationConsole>,
    pub event_bus: Arc<EventBus>,
}

/// Build the full application router, with the real middleware stack and a
/// tokio-timed console. Tests that let runs progress should use
/// `#[tokio::test(start_paused = true)]`.
pub fn build_test_app() -> TestApp {
    let config = test_config();
    let event_bus = Arc::new(EventBus::default());
    let console = Arc::new(GenerationConsole::new(
        config.simulator.clone(),
        Arc::new(TokioScheduler),
        Arc::clone(&event_bus),
    ));

    let state = AppState {
        config: Arc::new(config.clone()),
        console: Arc::clone(&console),
        ws_manager: Arc::new(WsManager::new()),
        event_bus: Arc::clone(&event_bus),
    };

    TestApp {
        router: build_app_router(state, &config),
        console,
        event_bus,
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn patch_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
