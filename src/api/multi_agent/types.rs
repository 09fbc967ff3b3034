use duet_core::{CollaborationRequest, Priority, WorkflowType};
use serde::Deserialize;
use utoipa::ToSchema;

/// Request to start a collaboration
#[derive(Debug, Deserialize, ToSchema)]
pub struct StartCollaborationRequest {
    /// What should be built
    pub task_description: String,
    /// low | medium | high | critical
    #[serde(default)]
    #[schema(value_type = String, example = "medium")]
    pub priority: Priority,
    /// analysis_only | implementation_only | full_collaboration
    #[serde(default)]
    #[schema(value_type = String, example = "full_collaboration")]
    pub workflow_type: WorkflowType,
    pub github_repo_url: Option<String>,
    #[serde(default)]
    pub specific_requirements: Vec<String>,
}

impl From<StartCollaborationRequest> for CollaborationRequest {
    fn from(request: StartCollaborationRequest) -> Self {
        CollaborationRequest {
            task_description: request.task_description,
            priority: request.priority,
            workflow_type: request.workflow_type,
            github_repo_url: request.github_repo_url,
            specific_requirements: request.specific_requirements,
        }
    }
}
