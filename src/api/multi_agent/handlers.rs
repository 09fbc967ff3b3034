use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use duet_core::reports::{self, CollaborationStatus, IntegrationReport, MultiAgentCapabilities};
use tracing::info;

use super::types::StartCollaborationRequest;
use crate::api::{ApiError, AppState};

/// Start a collaboration between the Gemini and Jules agents.
///
/// Returns as soon as the pipeline is scheduled; phases run in the background.
#[utoipa::path(
    post,
    path = "/multi-agent/start-collaboration",
    tag = "multi-agent",
    request_body = StartCollaborationRequest,
    responses(
        (status = 200, description = "Collaboration initiated"),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Agent configuration unavailable"),
        (status = 503, description = "Collaboration not enabled")
    )
)]
pub async fn start_collaboration(
    State(state): State<AppState>,
    Json(request): Json<StartCollaborationRequest>,
) -> Result<Json<CollaborationStatus>, ApiError> {
    let config = state.agents_config()?;

    // The pipeline is detached; dropping the handle does not cancel it.
    let (record, _pipeline) = state.sequencer.start(&config, request.into())?;
    info!(collaboration_id = %record.id, "Started multi-agent collaboration");

    Ok(Json(reports::initial_status(&record)))
}

/// Get collaboration status
#[utoipa::path(
    get,
    path = "/multi-agent/status/{id}",
    tag = "multi-agent",
    params(
        ("id" = String, Path, description = "Collaboration ID")
    ),
    responses(
        (status = 200, description = "Collaboration status")
    )
)]
pub async fn collaboration_status(Path(id): Path<String>) -> Json<CollaborationStatus> {
    Json(reports::collaboration_status(&id))
}

/// Describe the multi-agent system and its current configuration
#[utoipa::path(
    get,
    path = "/multi-agent/capabilities",
    tag = "multi-agent",
    responses(
        (status = 200, description = "Capability summary"),
        (status = 500, description = "Agent configuration unavailable")
    )
)]
pub async fn multi_agent_capabilities(
    State(state): State<AppState>,
) -> Result<Json<MultiAgentCapabilities>, ApiError> {
    let config = state.agents_config()?;
    Ok(Json(reports::multi_agent_capabilities(&config)))
}

/// Check that both agents are configured for collaboration
#[utoipa::path(
    post,
    path = "/multi-agent/test-integration",
    tag = "multi-agent",
    responses(
        (status = 200, description = "Integration readiness report"),
        (status = 500, description = "Agent configuration unavailable")
    )
)]
pub async fn test_integration(
    State(state): State<AppState>,
) -> Result<Json<IntegrationReport>, ApiError> {
    let config = state.agents_config()?;
    let report = reports::integration_report(&config, Utc::now());
    info!(overall_status = %report.overall_status, "Integration test completed");
    Ok(Json(report))
}
