//! Phase result types
//!
//! Each phase hands a typed result to the next one; the finalization phase
//! folds all of them into a [`FinalReport`].

use serde::{Deserialize, Serialize};

/// Output of the analysis phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Task breakdown
    pub task_analysis: TaskAnalysis,
    /// Requirement classification
    pub requirements_analysis: RequirementsAnalysis,
    /// Guidance handed to the implementation agent
    pub implementation_guidance: ImplementationGuidance,
    /// Self-reported quality
    pub quality_metrics: AnalysisMetrics,
}

/// Task breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAnalysis {
    /// Complexity estimate
    pub complexity: String,
    /// Effort estimate
    pub estimated_effort: String,
    /// Components the task touches
    pub key_components: Vec<String>,
    /// Security considerations, inherited by the implementation
    pub security_considerations: Vec<String>,
    /// Performance notes
    pub performance_notes: Vec<String>,
}

/// Requirement classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementsAnalysis {
    /// Submitted requirements plus inferred ones
    pub functional_requirements: Vec<String>,
    /// Quality attributes
    pub non_functional_requirements: Vec<String>,
    /// Constraints
    pub constraints: Vec<String>,
}

/// Guidance handed to the implementation agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationGuidance {
    /// Design patterns
    pub recommended_patterns: Vec<String>,
    /// Libraries
    pub suggested_libraries: Vec<String>,
    /// Architecture remarks
    pub architecture_notes: String,
}

/// Analysis quality scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// Completeness in [0, 1]
    pub completeness: f64,
    /// Complexity on a 0-10 scale
    pub complexity_score: f64,
}

/// Output of the implementation phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationResult {
    /// Plan
    pub implementation_plan: ImplementationPlan,
    /// Generated code summary
    pub code_generation: CodeGeneration,
    /// How the analysis was applied
    pub implementation_details: ImplementationDetails,
    /// Test outcome
    pub testing_results: TestingResults,
    /// Repository hand-off
    pub github_integration: GithubIntegration,
}

/// Implementation plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationPlan {
    /// Plan phases
    pub phases: Vec<String>,
    /// Duration estimate
    pub estimated_duration: String,
    /// Working branch
    pub branch_name: String,
}

/// Generated code summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeGeneration {
    /// New files
    pub files_created: Vec<String>,
    /// Touched files
    pub files_modified: Vec<String>,
    /// Size of the change
    pub lines_of_code: u32,
    /// Coverage figure
    pub test_coverage: String,
}

/// How the analysis was applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationDetails {
    /// Whether the analysis guidance was followed
    pub follows_gemini_guidance: bool,
    /// Copy of the analysis' security considerations
    pub security_implemented: Vec<String>,
    /// Optimizations applied
    pub performance_optimizations: Vec<String>,
    /// Error handling summary
    pub error_handling: String,
}

/// Test outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestingResults {
    /// Unit test summary
    pub unit_tests: String,
    /// Integration test summary
    pub integration_tests: String,
    /// Quality grade
    pub code_quality: String,
    /// Security scan summary
    pub security_scan: String,
}

/// Repository hand-off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubIntegration {
    /// Repository URL, or `local_development`
    pub repository: String,
    /// Whether a branch was created
    pub branch_created: bool,
    /// Commit count
    pub commits: u32,
    /// Whether a PR can be opened
    pub pr_ready: bool,
}

/// Output of the cross-validation phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// `passed` or `failed`
    pub validation_status: String,
    /// Agreement between analysis and implementation, in [0, 1]
    pub alignment_score: f64,
    /// Analysis agent's verdict on the implementation
    pub gemini_validation: GeminiValidation,
    /// Implementation agent's verdict on the analysis
    pub jules_validation: JulesValidation,
    /// Joint verdict
    pub consensus: Consensus,
}

/// Analysis agent's verdict on the implementation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiValidation {
    /// Whether the implementation followed the analysis
    pub implementation_follows_analysis: bool,
    /// Whether security requirements were met
    pub security_requirements_met: bool,
    /// Whether performance guidance was applied
    pub performance_guidelines_followed: bool,
    /// Follow-up suggestions
    pub additional_suggestions: Vec<String>,
}

/// Implementation agent's verdict on the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JulesValidation {
    /// Whether the analysis matched the codebase
    pub gemini_analysis_accuracy: bool,
    /// Whether the requirements were complete
    pub requirements_completeness: bool,
    /// Whether the guidance was implementable
    pub implementation_feasibility: bool,
    /// Free-form assessment
    pub quality_assessment: String,
}

/// Joint verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consensus {
    /// Overall readiness flag
    pub ready_for_deployment: bool,
    /// Quality on a 0-10 scale, carried into the final report
    pub overall_quality_score: f64,
    /// Free-form rating
    pub collaboration_effectiveness: String,
}

/// Output of the finalization phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalReport {
    /// Summary
    pub collaboration_summary: CollaborationSummary,
    /// Deliverable descriptions
    pub deliverables: Deliverables,
    /// Insights extracted from the analysis and implementation
    pub knowledge_transfer: KnowledgeTransfer,
}

/// Report summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationSummary {
    /// Collaboration id
    pub id: String,
    /// Final status
    pub status: String,
    /// Wall-clock duration since acceptance
    pub duration: String,
    /// Taken from the validation consensus
    pub quality_score: f64,
    /// What went well
    pub success_factors: Vec<String>,
}

/// Deliverable descriptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliverables {
    /// Phase 1 deliverable
    pub analysis_report: String,
    /// Phase 2 deliverable
    pub implementation: String,
    /// Phase 3 deliverable
    pub validation_report: String,
    /// Packaging deliverable
    pub deployment_package: String,
}

/// Insights extracted from earlier phases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeTransfer {
    /// The analysis' implementation guidance
    pub gemini_insights: ImplementationGuidance,
    /// The implementation details
    pub jules_learnings: ImplementationDetails,
    /// Pattern note
    pub collaboration_patterns: String,
}
