//! Provider seams for the three agent-backed phases

use async_trait::async_trait;

use super::results::{AnalysisResult, ImplementationResult, ValidationResult};
use crate::error::Result;

/// Analysis phase provider
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &str;

    /// Analyse a task and its requirements
    async fn analyze(&self, task: &str, requirements: &[String]) -> Result<AnalysisResult>;
}

/// Implementation phase provider
#[async_trait]
pub trait ImplementationProvider: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &str;

    /// Implement a task following a prior analysis
    async fn implement(
        &self,
        task: &str,
        analysis: &AnalysisResult,
        repository: Option<&str>,
    ) -> Result<ImplementationResult>;
}

/// Cross-validation phase provider
#[async_trait]
pub trait ValidationProvider: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &str;

    /// Check an implementation against its analysis
    async fn cross_validate(
        &self,
        analysis: &AnalysisResult,
        implementation: &ImplementationResult,
    ) -> Result<ValidationResult>;
}
