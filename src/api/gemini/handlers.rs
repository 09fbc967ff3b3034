use axum::{
    extract::{Query, State},
    Json,
};
use duet_core::gemini::{
    self, CodeAnalysisRequest, CollaborationHandoff, GeminiCapabilities, GeminiHealth,
    PullRequestFindings, PullRequestReview,
};
use duet_core::{AgentKind, AgentsConfig, Error};
use tracing::{info, warn};
use uuid::Uuid;

use super::types::{AnalyzeRequest, AnalyzeResponse, GeminiCollaborateParams, ReviewPrRequest};
use crate::api::{ApiError, AppState};

/// Load the configuration and require the Gemini agent
fn gemini_config(state: &AppState) -> Result<AgentsConfig, ApiError> {
    let config = state.agents_config()?;
    config.require_agent(AgentKind::Gemini)?;
    Ok(config)
}

/// Analyse a code snippet
#[utoipa::path(
    post,
    path = "/gemini/analyze",
    tag = "gemini",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis result"),
        (status = 500, description = "Agent configuration unavailable"),
        (status = 503, description = "Gemini agent not enabled")
    )
)]
pub async fn analyze_code(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let config = gemini_config(&state)?;

    let request = CodeAnalysisRequest::from(request);
    let analysis = state.gemini.analyze_code(&request).await?;
    info!(analysis_type = %request.analysis_type, "Gemini analysis completed");

    let collaboration_data = config
        .cross_agent_enabled()
        .then(|| gemini::collaboration_data(&request, &analysis));

    Ok(Json(AnalyzeResponse {
        analysis: analysis.analysis,
        status: "completed".to_string(),
        confidence_score: Some(analysis.confidence_score),
        suggestions: analysis.suggestions,
        collaboration_data,
    }))
}

/// Review a pull request
#[utoipa::path(
    post,
    path = "/gemini/review-pr",
    tag = "gemini",
    request_body = ReviewPrRequest,
    responses(
        (status = 200, description = "Review findings"),
        (status = 500, description = "Agent configuration unavailable"),
        (status = 503, description = "Gemini agent or PR review not enabled")
    )
)]
pub async fn review_pull_request(
    State(state): State<AppState>,
    Json(request): Json<ReviewPrRequest>,
) -> Result<Json<PullRequestFindings>, ApiError> {
    let config = gemini_config(&state)?;
    if !config.gemini().pr_review_enabled {
        warn!("Rejected PR review: disabled in configuration");
        return Err(Error::agent_unavailable(
            AgentKind::Gemini.section(),
            "PR review not enabled for Gemini agent",
        )
        .into());
    }

    let review = PullRequestReview::from(request);
    let findings = state.gemini.review_pull_request(&review).await?;
    info!(pr_url = %findings.pr_url, "Pull request reviewed");
    Ok(Json(findings))
}

/// Gemini agent capabilities
#[utoipa::path(
    get,
    path = "/gemini/capabilities",
    tag = "gemini",
    responses(
        (status = 200, description = "Agent capabilities"),
        (status = 500, description = "Agent configuration unavailable"),
        (status = 503, description = "Gemini agent not enabled")
    )
)]
pub async fn gemini_capabilities(
    State(state): State<AppState>,
) -> Result<Json<GeminiCapabilities>, ApiError> {
    let config = gemini_config(&state)?;
    Ok(Json(gemini::gemini_capabilities(config.gemini())))
}

/// Gemini integration health.
///
/// Always answers 200; a configuration problem is reported as `unhealthy`.
#[utoipa::path(
    get,
    path = "/gemini/health",
    tag = "gemini",
    responses(
        (status = 200, description = "Healthy or unhealthy report")
    )
)]
pub async fn gemini_health(State(state): State<AppState>) -> Json<GeminiHealth> {
    let health = match gemini_config(&state) {
        Ok(config) => {
            let settings = config.gemini();
            GeminiHealth::healthy(settings, settings.api_key_configured())
        }
        Err(e) => GeminiHealth::unhealthy(e.message()),
    };
    Json(health)
}

/// Ask Gemini to analyse a task and hand it over to Jules
#[utoipa::path(
    post,
    path = "/gemini/collaborate",
    tag = "gemini",
    params(GeminiCollaborateParams),
    request_body = GeminiCollaborateParams,
    responses(
        (status = 200, description = "Hand-off payload"),
        (status = 422, description = "task_description missing"),
        (status = 500, description = "Agent configuration unavailable"),
        (status = 503, description = "Cross-agent collaboration not enabled")
    )
)]
pub async fn gemini_collaborate(
    State(state): State<AppState>,
    query: Option<Query<GeminiCollaborateParams>>,
    body: Option<Json<GeminiCollaborateParams>>,
) -> Result<Json<CollaborationHandoff>, ApiError> {
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
        jules_integration = params.jules_integration(),
        "Gemini collaboration requested"
    );

    Ok(Json(gemini::collaboration_handoff(
        collaboration_id,
        task_description,
        params.analysis_focus(),
    )))
}
