//! Simulated agents
//!
//! Each adapter waits for a fixed latency and returns canned data. They stand
//! in for real analysis/implementation back-ends behind the provider traits.

use async_trait::async_trait;
use std::time::Duration;

use super::providers::{AnalysisProvider, ImplementationProvider, ValidationProvider};
use super::results::{
    AnalysisMetrics, AnalysisResult, CodeGeneration, Consensus, GeminiValidation,
    GithubIntegration, ImplementationDetails, ImplementationGuidance, ImplementationPlan,
    ImplementationResult, JulesValidation, RequirementsAnalysis, TaskAnalysis, TestingResults,
    ValidationResult,
};
use crate::error::Result;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Per-phase simulated latencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    /// Analysis phase delay
    pub analysis: Duration,
    /// Implementation phase delay
    pub implementation: Duration,
    /// Validation phase delay
    pub validation: Duration,
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            analysis: Duration::from_secs(2),
            implementation: Duration::from_secs(3),
            validation: Duration::from_secs(1),
        }
    }
}

impl SimulatedLatency {
    /// No delay at all
    pub fn none() -> Self {
        Self {
            analysis: Duration::ZERO,
            implementation: Duration::ZERO,
            validation: Duration::ZERO,
        }
    }
}

async fn simulate(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

/// Simulated analysis agent
#[derive(Debug, Clone)]
pub struct SimulatedAnalyst {
    latency: Duration,
}

impl SimulatedAnalyst {
    /// Create with the given delay
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl AnalysisProvider for SimulatedAnalyst {
    fn name(&self) -> &str {
        "gemini-coding-agent"
    }

    async fn analyze(&self, _task: &str, requirements: &[String]) -> Result<AnalysisResult> {
        simulate(self.latency).await;

        let mut functional_requirements = requirements.to_vec();
        functional_requirements.extend(strings(&["User authentication", "Data persistence"]));

        Ok(AnalysisResult {
            task_analysis: TaskAnalysis {
                complexity: "medium".to_string(),
                estimated_effort: "2-3 hours".to_string(),
                key_components: strings(&["API endpoint", "data validation", "error handling"]),
                security_considerations: strings(&["Input validation", "Authentication required"]),
                performance_notes: strings(&["Consider caching", "Database optimization needed"]),
            },
            requirements_analysis: RequirementsAnalysis {
                functional_requirements,
                non_functional_requirements: strings(&["Performance", "Security", "Scalability"]),
                constraints: strings(&[
                    "Must fit the existing HTTP API layer",
                    "Backward compatible request schema",
                ]),
            },
            implementation_guidance: ImplementationGuidance {
                recommended_patterns: strings(&["Repository pattern", "Dependency injection"]),
                suggested_libraries: strings(&["serde", "sqlx", "tokio"]),
                architecture_notes: "Microservices compatible design".to_string(),
            },
            quality_metrics: AnalysisMetrics {
                confidence: 0.92,
                completeness: 0.88,
                complexity_score: 6.5,
            },
        })
    }
}

/// Simulated implementation agent
#[derive(Debug, Clone)]
pub struct SimulatedImplementer {
    latency: Duration,
}

impl SimulatedImplementer {
    /// Create with the given delay
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl ImplementationProvider for SimulatedImplementer {
    fn name(&self) -> &str {
        "jules-agent"
    }

    async fn implement(
        &self,
        _task: &str,
        analysis: &AnalysisResult,
        repository: Option<&str>,
    ) -> Result<ImplementationResult> {
        simulate(self.latency).await;

        Ok(ImplementationResult {
            implementation_plan: ImplementationPlan {
                phases: strings(&["Setup", "Core implementation", "Testing", "Documentation"]),
                estimated_duration: "25 minutes".to_string(),
                branch_name: "feature/multi-agent-collaboration-implementation".to_string(),
            },
            code_generation: CodeGeneration {
                files_created: strings(&["src/api/new_endpoint.rs", "tests/new_endpoint.rs"]),
                files_modified: strings(&["src/main.rs", "Cargo.toml"]),
                lines_of_code: 150,
                test_coverage: "85%".to_string(),
            },
            implementation_details: ImplementationDetails {
                follows_gemini_guidance: true,
                security_implemented: analysis.task_analysis.security_considerations.clone(),
                performance_optimizations: strings(&[
                    "Async operations",
                    "Database connection pooling",
                ]),
                error_handling: "Comprehensive exception handling added".to_string(),
            },
            testing_results: TestingResults {
                unit_tests: "Passed (12/12)".to_string(),
                integration_tests: "Passed (5/5)".to_string(),
                code_quality: "A+".to_string(),
                security_scan: "No issues found".to_string(),
            },
            github_integration: GithubIntegration {
                repository: repository.unwrap_or("local_development").to_string(),
                branch_created: true,
                commits: 3,
                pr_ready: true,
            },
        })
    }
}

/// Simulated cross-validation between both agents
#[derive(Debug, Clone)]
pub struct SimulatedReviewer {
    latency: Duration,
}

impl SimulatedReviewer {
    /// Create with the given delay
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl ValidationProvider for SimulatedReviewer {
    fn name(&self) -> &str {
        "cross-validation"
    }

    async fn cross_validate(
        &self,
        _analysis: &AnalysisResult,
        _implementation: &ImplementationResult,
    ) -> Result<ValidationResult> {
        simulate(self.latency).await;

        Ok(ValidationResult {
            validation_status: "passed".to_string(),
            alignment_score: 0.94,
            gemini_validation: GeminiValidation {
                implementation_follows_analysis: true,
                security_requirements_met: true,
                performance_guidelines_followed: true,
                additional_suggestions: strings(&["Consider adding logging", "Add API versioning"]),
            },
            jules_validation: JulesValidation {
                gemini_analysis_accuracy: true,
                requirements_completeness: true,
                implementation_feasibility: true,
                quality_assessment: "High quality implementation".to_string(),
            },
            consensus: Consensus {
                ready_for_deployment: true,
                overall_quality_score: 9.2,
                collaboration_effectiveness: "Excellent".to_string(),
            },
        })
    }
}
