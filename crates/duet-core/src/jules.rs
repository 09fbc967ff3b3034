//! Jules implementation agent integration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::config::{AgentKind, JulesAgentConfig};

/// Length of the prompt preview echoed back on acceptance
const PROMPT_PREVIEW_CHARS: usize = 50;

/// A task submitted to the implementation agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JulesTask {
    /// What to do
    pub prompt: String,
    /// Target repository
    pub github_repo_url: String,
    /// Target branch
    #[serde(default = "default_branch")]
    pub github_branch: String,
    /// Command that validates the change
    #[serde(default)]
    pub test_command: Option<String>,
    /// Whether the task may be shared with other agents
    #[serde(default = "default_true")]
    pub collaboration_mode: bool,
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_true() -> bool {
    true
}

/// Acceptance receipt for a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAcceptance {
    /// Fresh task id
    pub task_id: String,
    /// Always `accepted`
    pub status: String,
    /// Message echoing the start of the prompt
    pub message: String,
    /// Cross-agent mode at acceptance time
    pub collaboration_enabled: bool,
}

fn preview(prompt: &str) -> String {
    prompt.chars().take(PROMPT_PREVIEW_CHARS).collect()
}

/// Accept a task.
///
/// Nothing is queued; the receipt is all there is.
pub fn accept_task(task: &JulesTask, cross_agent_enabled: bool) -> TaskAcceptance {
    let task_id = Uuid::new_v4().to_string();
    tracing::info!(
        task_id = %task_id,
        repo = %task.github_repo_url,
        branch = %task.github_branch,
        "Jules task accepted"
    );

    TaskAcceptance {
        task_id,
        status: "accepted".to_string(),
        message: format!("Jules task accepted: {}...", preview(&task.prompt)),
        collaboration_enabled: cross_agent_enabled,
    }
}

/// Status of a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    /// Task id
    pub task_id: String,
    /// Always `processing`
    pub status: String,
    /// Queue position note
    pub progress: String,
    /// Completion estimate
    pub estimated_completion: String,
}

/// Status of a task by id; the same "processing" payload for every id
pub fn task_status(task_id: &str) -> TaskStatus {
    TaskStatus {
        task_id: task_id.to_string(),
        status: "processing".to_string(),
        progress: "Task in Jules agent queue".to_string(),
        estimated_completion: "2-5 minutes".to_string(),
    }
}

/// Static description of the implementation agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JulesCapabilities {
    /// Agent label
    pub agent_type: String,
    /// Agent switch
    pub enabled: bool,
    /// Planner/developer/reviewer mode
    pub multi_agent_mode: bool,
    /// GitHub integration toggle
    pub github_integration: bool,
    /// Sub-agent roles
    pub capabilities: Vec<String>,
    /// Supported languages
    pub supported_languages: Vec<String>,
    /// Always `Active`
    pub integration_status: String,
}

/// Capabilities of the implementation agent
pub fn jules_capabilities(settings: &JulesAgentConfig) -> JulesCapabilities {
    JulesCapabilities {
        agent_type: "Jules Multi-Agent System".to_string(),
        enabled: settings.enabled,
        multi_agent_mode: settings.multi_agent_mode,
        github_integration: settings.github_integration,
        capabilities: [
            "Task Planning (PlannerAgent)",
            "Code Development (DeveloperAgent)",
            "Code Review (ReviewerAgent)",
            "Branch Naming (BranchNamingAgent)",
            "Pull Request Creation (PRWriterAgent)",
            "Repository Analysis (EmbedderAgent)",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        supported_languages: ["Python", "JavaScript", "TypeScript", "Java", "C++", "Go", "Rust"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        integration_status: "Active".to_string(),
    }
}

/// Default collaboration type
pub const DEFAULT_COLLABORATION_TYPE: &str = "analysis_and_implementation";

/// Implementation agent's view of a collaboration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationPlan {
    /// Collaboration id
    pub collaboration_id: String,
    /// Always `initiated`
    pub status: String,
    /// Requested collaboration type
    pub collaboration_type: String,
    /// Participant identifiers, this agent first
    pub participants: Vec<String>,
    /// Task description
    pub task: String,
    /// Ordered workflow steps
    pub workflow: BTreeMap<String, String>,
}

/// Build the multi-step workflow description for a collaboration
pub fn collaboration_plan(
    collaboration_id: impl Into<String>,
    task_description: &str,
    collaboration_type: &str,
) -> CollaborationPlan {
    let steps = [
        "Gemini analysis and requirements gathering",
        "Jules implementation and code generation",
        "Cross-validation and quality assurance",
        "Automated testing and deployment",
    ];

    CollaborationPlan {
        collaboration_id: collaboration_id.into(),
        status: "initiated".to_string(),
        collaboration_type: collaboration_type.to_string(),
        participants: vec![
            AgentKind::Jules.participant().to_string(),
            AgentKind::Gemini.participant().to_string(),
        ],
        task: task_description.to_string(),
        workflow: steps
            .iter()
            .enumerate()
            .map(|(i, step)| (format!("step_{}", i + 1), step.to_string()))
            .collect(),
    }
}
