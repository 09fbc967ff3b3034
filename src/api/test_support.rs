//! Router-level test helpers

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use duet_core::{AgentsConfig, Sequencer, SimulatedGemini, SimulatedLatency, StaticConfigProvider};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use super::AppState;

/// State backed by a fixed configuration and zero simulated latency
pub fn state_with(config: AgentsConfig) -> AppState {
    AppState::new(
        Arc::new(StaticConfigProvider::new(config)),
        Sequencer::simulated(SimulatedLatency::none()),
        Arc::new(SimulatedGemini::new()),
    )
}

/// State whose configuration can never be read
pub fn broken_config_state() -> AppState {
    AppState::new(
        Arc::new(StaticConfigProvider::failing("config/config.json: not found")),
        Sequencer::simulated(SimulatedLatency::none()),
        Arc::new(SimulatedGemini::new()),
    )
}

/// Send one request through the full router and decode the JSON response
pub async fn send(state: AppState, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let app = crate::server::init::build_router(state);

    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
