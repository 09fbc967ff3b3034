//! API Documentation - Swagger UI
//!
//! Provides OpenAPI documentation at /docs

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::{
    error::ErrorBody,
    gemini::{AnalyzeRequest, GeminiCollaborateParams, ReviewPrRequest},
    jules::{JulesCollaborateParams, SubmitTaskRequest},
    multi_agent::StartCollaborationRequest,
};

/// Duet API OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Duet API",
        version = "0.1.0",
        description = "Simulated multi-agent coding workflow service.

## Overview
Duet pairs two agents on a coding task:
- **Gemini**: analysis, security review and pull request review
- **Jules**: implementation against a GitHub repository
- **Multi-agent**: a four-phase collaboration (analysis, implementation, cross-validation, finalization)

Which agents are available is controlled by the agent configuration file, re-read on every request.
Disabled agents answer with `503`.
",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Multi-agent
        crate::api::multi_agent::handlers::start_collaboration,
        crate::api::multi_agent::handlers::collaboration_status,
        crate::api::multi_agent::handlers::multi_agent_capabilities,
        crate::api::multi_agent::handlers::test_integration,
        // Gemini
        crate::api::gemini::handlers::analyze_code,
        crate::api::gemini::handlers::review_pull_request,
        crate::api::gemini::handlers::gemini_capabilities,
        crate::api::gemini::handlers::gemini_health,
        crate::api::gemini::handlers::gemini_collaborate,
        // Jules
        crate::api::jules::handlers::submit_task,
        crate::api::jules::handlers::jules_task_status,
        crate::api::jules::handlers::jules_capabilities,
        crate::api::jules::handlers::jules_collaborate,
    ),
    components(
        schemas(
            ErrorBody,
            StartCollaborationRequest,
            AnalyzeRequest,
            ReviewPrRequest,
            GeminiCollaborateParams,
            SubmitTaskRequest,
            JulesCollaborateParams,
        )
    ),
    tags(
        (name = "multi-agent", description = "Gemini + Jules collaborations"),
        (name = "gemini", description = "Gemini analysis agent"),
        (name = "jules", description = "Jules implementation agent"),
    )
)]
pub struct ApiDoc;

/// Create documentation routes
pub fn docs_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().merge(SwaggerUi::new("/docs").url("/api/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_agent_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/multi-agent/start-collaboration"));
        assert!(doc.paths.paths.contains_key("/gemini/collaborate"));
        assert!(doc.paths.paths.contains_key("/jules/status/{id}"));
    }
}
