use duet_core::jules::{JulesTask, DEFAULT_COLLABORATION_TYPE};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Task submission
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitTaskRequest {
    pub prompt: String,
    pub github_repo_url: String,
    #[serde(default = "default_branch")]
    pub github_branch: String,
    pub test_command: Option<String>,
    #[serde(default = "default_true")]
    pub collaboration_mode: bool,
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_true() -> bool {
    true
}

impl From<SubmitTaskRequest> for JulesTask {
    fn from(request: SubmitTaskRequest) -> Self {
        JulesTask {
            prompt: request.prompt,
            github_repo_url: request.github_repo_url,
            github_branch: request.github_branch,
            test_command: request.test_command,
            collaboration_mode: request.collaboration_mode,
        }
    }
}

/// Collaboration parameters, accepted from the query string and/or a JSON body
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JulesCollaborateParams {
    pub task_description: Option<String>,
    /// Defaults to `analysis_and_implementation`
    pub collaboration_type: Option<String>,
}

impl JulesCollaborateParams {
    /// Fill fields missing here from `other`
    pub fn or(self, other: Self) -> Self {
        Self {
            task_description: self.task_description.or(other.task_description),
            collaboration_type: self.collaboration_type.or(other.collaboration_type),
        }
    }

    pub fn collaboration_type(&self) -> &str {
        self.collaboration_type
            .as_deref()
            .unwrap_or(DEFAULT_COLLABORATION_TYPE)
    }
}
