//! Collaboration requests, phases and the per-collaboration record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Request priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority (default)
    #[default]
    Medium,
    /// High priority
    High,
    /// Critical priority
    Critical,
}

/// Requested workflow shape.
///
/// Accepted and recorded, but every type runs the same four phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowType {
    /// Analysis only
    AnalysisOnly,
    /// Implementation only
    ImplementationOnly,
    /// Analysis, implementation and validation (default)
    #[default]
    FullCollaboration,
}

impl WorkflowType {
    /// Every accepted workflow type, in declaration order
    pub const ALL: [WorkflowType; 3] = [
        WorkflowType::AnalysisOnly,
        WorkflowType::ImplementationOnly,
        WorkflowType::FullCollaboration,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnalysisOnly => "analysis_only",
            Self::ImplementationOnly => "implementation_only",
            Self::FullCollaboration => "full_collaboration",
        }
    }
}

impl fmt::Display for WorkflowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to start a collaboration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationRequest {
    /// What should be built
    pub task_description: String,
    /// Priority
    #[serde(default)]
    pub priority: Priority,
    /// Workflow shape (recorded only)
    #[serde(default)]
    pub workflow_type: WorkflowType,
    /// Repository the implementation agent works against
    #[serde(default)]
    pub github_repo_url: Option<String>,
    /// Extra requirements forwarded to the analysis phase
    #[serde(default)]
    pub specific_requirements: Vec<String>,
}

impl CollaborationRequest {
    /// Create a request with default priority and workflow
    pub fn new(task_description: impl Into<String>) -> Self {
        Self {
            task_description: task_description.into(),
            priority: Priority::default(),
            workflow_type: WorkflowType::default(),
            github_repo_url: None,
            specific_requirements: Vec::new(),
        }
    }
}

/// The four pipeline phases, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseName {
    /// Requirements and security analysis
    Analysis,
    /// Code implementation
    Implementation,
    /// Cross-validation of both results
    Validation,
    /// Report assembly
    Finalization,
}

impl PhaseName {
    /// Phases in execution order
    pub const ORDER: [PhaseName; 4] = [
        PhaseName::Analysis,
        PhaseName::Implementation,
        PhaseName::Validation,
        PhaseName::Finalization,
    ];

    /// 1-based position in the pipeline
    pub fn number(&self) -> usize {
        match self {
            Self::Analysis => 1,
            Self::Implementation => 2,
            Self::Validation => 3,
            Self::Finalization => 4,
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Analysis => write!(f, "analysis"),
            Self::Implementation => write!(f, "implementation"),
            Self::Validation => write!(f, "validation"),
            Self::Finalization => write!(f, "finalization"),
        }
    }
}

/// Status of a single phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    /// Not started
    #[default]
    Pending,
    /// Running
    InProgress,
    /// Finished successfully
    Completed,
    /// Raised an error
    Failed,
}

/// Status of a whole collaboration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaborationState {
    /// Accepted, pipeline scheduled
    #[default]
    Initiated,
    /// Pipeline running
    Running,
    /// All phases completed
    Completed,
    /// A phase failed
    Failed,
}

impl fmt::Display for CollaborationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initiated => write!(f, "initiated"),
            Self::Running => write!(f, "running"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// One phase entry of a collaboration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseRecord {
    /// Phase
    pub phase: PhaseName,
    /// Current status
    pub status: PhaseStatus,
    /// When the phase started
    pub start_time: Option<DateTime<Utc>>,
    /// When the phase ended (successfully or not)
    pub end_time: Option<DateTime<Utc>>,
}

impl PhaseRecord {
    fn pending(phase: PhaseName) -> Self {
        Self {
            phase,
            status: PhaseStatus::Pending,
            start_time: None,
            end_time: None,
        }
    }
}

/// In-memory record of a collaboration.
///
/// Never persisted: the pipeline updates its own copy, which nothing else can read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationRecord {
    /// Opaque unique identifier
    pub id: String,
    /// Acceptance time
    pub created_at: DateTime<Utc>,
    /// Task description
    pub task: String,
    /// Requested priority
    pub priority: Priority,
    /// Requested workflow type
    pub workflow_type: WorkflowType,
    /// Overall status
    pub status: CollaborationState,
    /// Phases in execution order
    pub phases: Vec<PhaseRecord>,
}

impl CollaborationRecord {
    /// Create an `initiated` record with four pending phases
    pub fn new(id: impl Into<String>, request: &CollaborationRequest) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            task: request.task_description.clone(),
            priority: request.priority,
            workflow_type: request.workflow_type,
            status: CollaborationState::Initiated,
            phases: PhaseName::ORDER.iter().copied().map(PhaseRecord::pending).collect(),
        }
    }

    /// Look up a phase entry
    pub fn phase(&self, phase: PhaseName) -> Option<&PhaseRecord> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    /// First phase that has not completed yet
    pub fn current_phase(&self) -> Option<PhaseName> {
        self.phases
            .iter()
            .find(|p| p.status != PhaseStatus::Completed)
            .map(|p| p.phase)
    }

    fn phase_mut(&mut self, phase: PhaseName) -> Option<&mut PhaseRecord> {
        self.phases.iter_mut().find(|p| p.phase == phase)
    }

    /// Mark a phase as started
    pub fn begin(&mut self, phase: PhaseName) {
        self.status = CollaborationState::Running;
        if let Some(entry) = self.phase_mut(phase) {
            entry.status = PhaseStatus::InProgress;
            entry.start_time = Some(Utc::now());
        }
    }

    /// Mark a phase as completed; the last phase completes the record
    pub fn complete(&mut self, phase: PhaseName) {
        if let Some(entry) = self.phase_mut(phase) {
            entry.status = PhaseStatus::Completed;
            entry.end_time = Some(Utc::now());
        }
        if self
            .phases
            .iter()
            .all(|p| p.status == PhaseStatus::Completed)
        {
            self.status = CollaborationState::Completed;
        }
    }

    /// Mark a phase, and with it the record, as failed
    pub fn fail(&mut self, phase: PhaseName) {
        if let Some(entry) = self.phase_mut(phase) {
            entry.status = PhaseStatus::Failed;
            entry.end_time = Some(Utc::now());
        }
        self.status = CollaborationState::Failed;
    }
}
