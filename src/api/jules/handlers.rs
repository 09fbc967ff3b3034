use axum::{
    extract::{Path, Query, State},
    Json,
};
use duet_core::jules::{self, CollaborationPlan, JulesCapabilities, TaskAcceptance, TaskStatus};
use duet_core::AgentKind;
use tracing::info;
use uuid::Uuid;

use super::types::{JulesCollaborateParams, SubmitTaskRequest};
use crate::api::{ApiError, AppState};

/// Submit a task to the Jules agent
#[utoipa::path(
    post,
    path = "/jules/task",
    tag = "jules",
    request_body = SubmitTaskRequest,
    responses(
        (status = 200, description = "Task accepted"),
        (status = 500, description = "Agent configuration unavailable"),
        (status = 503, description = "Jules agent not enabled")
    )
)]
pub async fn submit_task(
    State(state): State<AppState>,
    Json(request): Json<SubmitTaskRequest>,
) -> Result<Json<TaskAcceptance>, ApiError> {
    let config = state.agents_config()?;
    config.require_agent(AgentKind::Jules)?;

    let task = jules::JulesTask::from(request);
    Ok(Json(jules::accept_task(&task, config.cross_agent_enabled())))
}

/// Get task status
#[utoipa::path(
    get,
    path = "/jules/status/{id}",
    tag = "jules",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task status")
    )
)]
pub async fn jules_task_status(Path(id): Path<String>) -> Json<TaskStatus> {
    Json(jules::task_status(&id))
}

/// Jules agent capabilities, reported even when the agent is disabled
#[utoipa::path(
    get,
    path = "/jules/capabilities",
    tag = "jules",
    responses(
        (status = 200, description = "Agent capabilities"),
        (status = 500, description = "Agent configuration unavailable")
    )
)]
pub async fn jules_capabilities(
    State(state): State<AppState>,
) -> Result<Json<JulesCapabilities>, ApiError> {
    let config = state.agents_config()?;
    Ok(Json(jules::jules_capabilities(config.jules())))
}

/// Start a collaboration from the Jules side
#[utoipa::path(
    post,
    path = "/jules/collaborate",
    tag = "jules",
    params(JulesCollaborateParams),
    request_body = JulesCollaborateParams,
    responses(
        (status = 200, description = "Collaboration workflow"),
        (status = 422, description = "task_description missing"),
        (status = 500, description = "Agent configuration unavailable"),
        (status = 503, description = "Cross-agent collaboration not enabled")
    )
)]
pub async fn jules_collaborate(
    State(state): State<AppState>,
    query: Option<Query<JulesCollaborateParams>>,
    body: Option<Json<JulesCollaborateParams>>,
) -> Result<Json<CollaborationPlan>, ApiError> {
    let config = state.agents_config()?;
    config.require_cross_agent()?;

    let params = query
        .map(|Query(q)| q)
        .unwrap_or_default()
        .or(body.map(|Json(b)| b).unwrap_or_default());
    let task_description = params
        .task_description
        .as_deref()
        .ok_or_else(|| ApiError::invalid_request("task_description is required"))?;

    let collaboration_id = Uuid::new_v4().to_string();
    info!(
        collaboration_id = %collaboration_id,
        collaboration_type = %params.collaboration_type(),
        "Jules collaboration initiated"
    );

    Ok(Json(jules::collaboration_plan(
        collaboration_id,
        task_description,
        params.collaboration_type(),
    )))
}
