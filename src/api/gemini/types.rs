use duet_core::gemini::{
    default_focus_areas, AnalysisKind, CodeAnalysisRequest, CollaborationData, PullRequestReview,
    DEFAULT_ANALYSIS_FOCUS,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Code analysis request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub code: String,
    pub task: String,
    /// general | security | performance | style; anything else is analysed as general
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
    pub context: Option<String>,
}

fn default_analysis_type() -> String {
    AnalysisKind::General.as_str().to_string()
}

impl From<AnalyzeRequest> for CodeAnalysisRequest {
    fn from(request: AnalyzeRequest) -> Self {
        CodeAnalysisRequest::new(
            request.code,
            request.task,
            request.analysis_type,
            request.context,
        )
    }
}

/// Code analysis response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
    pub status: String,
    pub confidence_score: Option<f64>,
    pub suggestions: Vec<String>,
    pub collaboration_data: Option<CollaborationData>,
}

/// Pull request review request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewPrRequest {
    pub pr_url: String,
    #[serde(default = "default_focus_areas")]
    pub focus_areas: Vec<String>,
    #[serde(default = "default_true")]
    pub detailed_feedback: bool,
}

fn default_true() -> bool {
    true
}

impl From<ReviewPrRequest> for PullRequestReview {
    fn from(request: ReviewPrRequest) -> Self {
        PullRequestReview {
            pr_url: request.pr_url,
            focus_areas: request.focus_areas,
            detailed_feedback: request.detailed_feedback,
        }
    }
}

/// Collaboration parameters, accepted from the query string and/or a JSON body
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GeminiCollaborateParams {
    pub task_description: Option<String>,
    /// Defaults to `requirements_and_security`
    pub analysis_focus: Option<String>,
    /// Defaults to `true`
    pub jules_integration: Option<bool>,
}

impl GeminiCollaborateParams {
    /// Fill fields missing here from `other`
    pub fn or(self, other: Self) -> Self {
        Self {
            task_description: self.task_description.or(other.task_description),
            analysis_focus: self.analysis_focus.or(other.analysis_focus),
            jules_integration: self.jules_integration.or(other.jules_integration),
        }
    }

    pub fn analysis_focus(&self) -> &str {
        self.analysis_focus.as_deref().unwrap_or(DEFAULT_ANALYSIS_FOCUS)
    }

    pub fn jules_integration(&self) -> bool {
        self.jules_integration.unwrap_or(true)
    }
}
