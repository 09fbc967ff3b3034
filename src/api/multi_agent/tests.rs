use axum::http::{Method, StatusCode};
use duet_core::AgentsConfig;
use serde_json::json;

use crate::api::test_support::{broken_config_state, send, state_with};

#[tokio::test]
async fn test_start_collaboration_returns_initial_status() {
    let (status, body) = send(
        state_with(AgentsConfig::all_enabled()),
        Method::POST,
        "/multi-agent/start-collaboration",
        Some(json!({"task_description": "Build a rate limiter", "priority": "high"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "initiated");
    assert_eq!(body["current_phase"], "gemini_analysis");
    assert_eq!(body["progress"]["overall_progress"], "5%");
    assert_eq!(body["estimated_completion"], "5-10 minutes");
    assert_eq!(
        body["participants"],
        json!(["gemini-coding-agent", "jules-agent"])
    );
    assert!(uuid::Uuid::parse_str(body["collaboration_id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_start_collaboration_ids_are_unique() {
    let state = state_with(AgentsConfig::all_enabled());
    let request = json!({"task_description": "Same task"});

    let (_, first) = send(
        state.clone(),
        Method::POST,
        "/multi-agent/start-collaboration",
        Some(request.clone()),
    )
    .await;
    let (_, second) = send(
        state,
        Method::POST,
        "/multi-agent/start-collaboration",
        Some(request),
    )
    .await;

    assert_ne!(first["collaboration_id"], second["collaboration_id"]);
}

#[tokio::test]
async fn test_start_collaboration_rejected_when_jules_disabled() {
    let mut config = AgentsConfig::all_enabled();
    config.jules_agent.enabled = false;

    let (status, body) = send(
        state_with(config),
        Method::POST,
        "/multi-agent/start-collaboration",
        Some(json!({"task_description": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Jules: false"));
    assert!(error.contains("Gemini: true"));
    assert_eq!(body["code"], "AGENT_UNAVAILABLE");
}

#[tokio::test]
async fn test_start_collaboration_rejected_when_cross_agent_disabled() {
    let mut config = AgentsConfig::all_enabled();
    config.cross_agent.enabled = false;

    let (status, body) = send(
        state_with(config),
        Method::POST,
        "/multi-agent/start-collaboration",
        Some(json!({"task_description": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Multi-agent collaboration not enabled");
}

#[tokio::test]
async fn test_analysis_only_has_same_shape() {
    let state = state_with(AgentsConfig::all_enabled());

    let (_, full) = send(
        state.clone(),
        Method::POST,
        "/multi-agent/start-collaboration",
        Some(json!({"task_description": "t"})),
    )
    .await;
    let (status, analysis_only) = send(
        state,
        Method::POST,
        "/multi-agent/start-collaboration",
        Some(json!({"task_description": "t", "workflow_type": "analysis_only"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(full["progress"], analysis_only["progress"]);
    assert_eq!(full["current_phase"], analysis_only["current_phase"]);
}

#[tokio::test]
async fn test_start_collaboration_requires_task_description() {
    let (status, _) = send(
        state_with(AgentsConfig::all_enabled()),
        Method::POST,
        "/multi-agent/start-collaboration",
        Some(json!({"priority": "low"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_start_collaboration_config_failure_is_500() {
    let (status, body) = send(
        broken_config_state(),
        Method::POST,
        "/multi-agent/start-collaboration",
        Some(json!({"task_description": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "CONFIGURATION_UNAVAILABLE");
}

#[tokio::test]
async fn test_status_accepts_any_id() {
    let (status, body) = send(
        state_with(AgentsConfig::default()),
        Method::GET,
        "/multi-agent/status/not-a-real-id",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["collaboration_id"], "not-a-real-id");
    assert_eq!(body["progress"]["overall_progress"], "90%");
}

#[tokio::test]
async fn test_capabilities_are_idempotent() {
    let state = state_with(AgentsConfig::all_enabled());

    let (status, first) = send(state.clone(), Method::GET, "/multi-agent/capabilities", None).await;
    let (_, second) = send(state, Method::GET, "/multi-agent/capabilities", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(first["system_status"], "operational");
    assert_eq!(first["available_agents"]["jules"], true);
}

#[tokio::test]
async fn test_integration_partial_when_gemini_disabled() {
    let mut config = AgentsConfig::all_enabled();
    config.gemini_agent.enabled = false;

    let (status, body) = send(
        state_with(config),
        Method::POST,
        "/multi-agent/test-integration",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_status"], "partial");
    assert_eq!(body["ready_for_collaboration"], false);
    assert_eq!(body["configuration_test"]["gemini_agent_enabled"], false);
}

#[tokio::test]
async fn test_integration_healthy_when_all_enabled() {
    let (_, body) = send(
        state_with(AgentsConfig::all_enabled()),
        Method::POST,
        "/multi-agent/test-integration",
        None,
    )
    .await;

    assert_eq!(body["overall_status"], "healthy");
    assert_eq!(body["ready_for_collaboration"], true);
}
