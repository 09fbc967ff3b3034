//! Multi-agent collaboration workflow
//!
//! A collaboration runs four fixed phases in strict sequence:
//!
//! 1. **Analysis**: the analysis agent studies the task and requirements
//! 2. **Implementation**: the implementation agent builds on that analysis
//! 3. **Validation**: both results are cross-checked
//! 4. **Finalization**: a report is assembled from everything above
//!
//! The agents behind phases 1-3 are reached through [`AnalysisProvider`],
//! [`ImplementationProvider`] and [`ValidationProvider`]; the simulated
//! adapters in [`simulated`] stand in for real ones.

mod finalize;
pub mod providers;
pub mod results;
mod sequencer;
pub mod simulated;
mod types;

#[cfg(test)]
mod tests;

pub use finalize::finalize;
pub use providers::{AnalysisProvider, ImplementationProvider, ValidationProvider};
pub use results::{AnalysisResult, FinalReport, ImplementationResult, ValidationResult};
pub use sequencer::{CollaborationOutcome, PipelineHandle, Sequencer};
pub use simulated::{SimulatedAnalyst, SimulatedImplementer, SimulatedLatency, SimulatedReviewer};
pub use types::{
    CollaborationRecord, CollaborationRequest, CollaborationState, PhaseName, PhaseRecord,
    PhaseStatus, Priority, WorkflowType,
};
