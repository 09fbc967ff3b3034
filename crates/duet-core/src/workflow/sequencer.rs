//! Four-phase collaboration sequencer

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use uuid::Uuid;

use super::finalize::finalize;
use super::providers::{AnalysisProvider, ImplementationProvider, ValidationProvider};
use super::results::{AnalysisResult, FinalReport, ImplementationResult, ValidationResult};
use super::simulated::{SimulatedAnalyst, SimulatedImplementer, SimulatedLatency, SimulatedReviewer};
use super::types::{CollaborationRecord, CollaborationRequest, PhaseName};
use crate::config::AgentsConfig;
use crate::error::Result;

/// Everything a finished pipeline produced
#[derive(Debug, Clone)]
pub struct CollaborationOutcome {
    /// Record with final phase states and timestamps
    pub record: CollaborationRecord,
    /// Phase 1 output
    pub analysis: AnalysisResult,
    /// Phase 2 output
    pub implementation: ImplementationResult,
    /// Phase 3 output
    pub validation: ValidationResult,
    /// Phase 4 output
    pub report: FinalReport,
}

/// Handle to a scheduled pipeline.
///
/// Dropping the handle detaches the pipeline; it keeps running either way.
#[derive(Debug)]
pub struct PipelineHandle {
    collaboration_id: String,
    task: JoinHandle<Option<CollaborationOutcome>>,
}

impl PipelineHandle {
    /// Id of the collaboration this pipeline runs
    pub fn collaboration_id(&self) -> &str {
        &self.collaboration_id
    }

    /// Whether the pipeline has stopped (successfully or not)
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the pipeline. `None` if a phase failed.
    pub async fn join(self) -> Option<CollaborationOutcome> {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(collaboration_id = %self.collaboration_id, "Pipeline task aborted: {}", e);
                None
            }
        }
    }
}

/// Runs collaborations through analysis → implementation → validation → finalization
#[derive(Clone)]
pub struct Sequencer {
    analyst: Arc<dyn AnalysisProvider>,
    implementer: Arc<dyn ImplementationProvider>,
    reviewer: Arc<dyn ValidationProvider>,
}

impl Sequencer {
    /// Create a sequencer from explicit providers
    pub fn new(
        analyst: Arc<dyn AnalysisProvider>,
        implementer: Arc<dyn ImplementationProvider>,
        reviewer: Arc<dyn ValidationProvider>,
    ) -> Self {
        Self {
            analyst,
            implementer,
            reviewer,
        }
    }

    /// Create a sequencer backed by the simulated agents
    pub fn simulated(latency: SimulatedLatency) -> Self {
        Self::new(
            Arc::new(SimulatedAnalyst::new(latency.analysis)),
            Arc::new(SimulatedImplementer::new(latency.implementation)),
            Arc::new(SimulatedReviewer::new(latency.validation)),
        )
    }

    /// Accept a collaboration and schedule its pipeline.
    ///
    /// Requires cross-agent mode and both agents. Returns the initial record
    /// immediately; the pipeline runs on a detached tokio task.
    pub fn start(
        &self,
        config: &AgentsConfig,
        request: CollaborationRequest,
    ) -> Result<(CollaborationRecord, PipelineHandle)> {
        config.require_collaboration()?;

        let collaboration_id = Uuid::new_v4().to_string();
        let record = CollaborationRecord::new(collaboration_id.clone(), &request);

        info!(
            collaboration_id = %collaboration_id,
            priority = ?request.priority,
            workflow_type = %request.workflow_type,
            "Collaboration accepted"
        );

        let sequencer = self.clone();
        let pipeline_record = record.clone();
        let task = tokio::spawn(async move {
            let id = pipeline_record.id.clone();
            match sequencer.run(pipeline_record, request).await {
                Ok(outcome) => {
                    info!(collaboration_id = %id, "Collaboration completed successfully");
                    Some(outcome)
                }
                Err(e) => {
                    error!(collaboration_id = %id, "Collaboration error: {}", e);
                    None
                }
            }
        });

        Ok((
            record,
            PipelineHandle {
                collaboration_id,
                task,
            },
        ))
    }

    /// Run all four phases in order.
    ///
    /// The first failing phase is marked failed on `record` and its error
    /// returned; later phases never run. `workflow_type` does not change the
    /// phases that run.
    pub async fn run(
        &self,
        mut record: CollaborationRecord,
        request: CollaborationRequest,
    ) -> Result<CollaborationOutcome> {
        let id = record.id.clone();
        debug!(collaboration_id = %id, workflow_type = %request.workflow_type, "Pipeline starting");

        log_phase(&id, PhaseName::Analysis, self.analyst.name());
        record.begin(PhaseName::Analysis);
        let analysis = match self
            .analyst
            .analyze(&request.task_description, &request.specific_requirements)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                record.fail(PhaseName::Analysis);
                return Err(e);
            }
        };
        record.complete(PhaseName::Analysis);

        log_phase(&id, PhaseName::Implementation, self.implementer.name());
        record.begin(PhaseName::Implementation);
        let implementation = match self
            .implementer
            .implement(
                &request.task_description,
                &analysis,
                request.github_repo_url.as_deref(),
            )
            .await
        {
            Ok(result) => result,
            Err(e) => {
                record.fail(PhaseName::Implementation);
                return Err(e);
            }
        };
        record.complete(PhaseName::Implementation);

        log_phase(&id, PhaseName::Validation, self.reviewer.name());
        record.begin(PhaseName::Validation);
        let validation = match self
            .reviewer
            .cross_validate(&analysis, &implementation)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                record.fail(PhaseName::Validation);
                return Err(e);
            }
        };
        record.complete(PhaseName::Validation);

        log_phase(&id, PhaseName::Finalization, "sequencer");
        record.begin(PhaseName::Finalization);
        let report = finalize(&id, record.created_at, &analysis, &implementation, &validation);
        record.complete(PhaseName::Finalization);

        Ok(CollaborationOutcome {
            record,
            analysis,
            implementation,
            validation,
            report,
        })
    }
}

fn log_phase(collaboration_id: &str, phase: PhaseName, agent: &str) {
    info!(
        collaboration_id = %collaboration_id,
        phase = %phase,
        agent,
        "Phase {}: starting {}",
        phase.number(),
        phase
    );
}
