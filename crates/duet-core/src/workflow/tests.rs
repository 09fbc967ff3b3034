use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::config::AgentsConfig;
use crate::error::{Error, Result};

fn request(task: &str) -> CollaborationRequest {
    CollaborationRequest {
        task_description: task.to_string(),
        priority: Priority::High,
        workflow_type: WorkflowType::FullCollaboration,
        github_repo_url: Some("https://github.com/example/repo".to_string()),
        specific_requirements: vec!["Rate limiting".to_string()],
    }
}

struct FailingAnalyst;

#[async_trait]
impl AnalysisProvider for FailingAnalyst {
    fn name(&self) -> &str {
        "failing"
    }

    async fn analyze(&self, _task: &str, _requirements: &[String]) -> Result<AnalysisResult> {
        Err(Error::Internal("analysis back-end down".to_string()))
    }
}

#[derive(Default)]
struct CountingImplementer {
    calls: AtomicUsize,
}

#[async_trait]
impl ImplementationProvider for CountingImplementer {
    fn name(&self) -> &str {
        "counting"
    }

    async fn implement(
        &self,
        task: &str,
        analysis: &AnalysisResult,
        repository: Option<&str>,
    ) -> Result<ImplementationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        SimulatedImplementer::new(Duration::ZERO)
            .implement(task, analysis, repository)
            .await
    }
}

#[test]
fn test_new_record_has_four_pending_phases() {
    let record = CollaborationRecord::new("abc", &request("Build API"));
    assert_eq!(record.status, CollaborationState::Initiated);
    let phases: Vec<PhaseName> = record.phases.iter().map(|p| p.phase).collect();
    assert_eq!(phases, PhaseName::ORDER.to_vec());
    assert!(record
        .phases
        .iter()
        .all(|p| p.status == PhaseStatus::Pending && p.start_time.is_none()));
    assert_eq!(record.current_phase(), Some(PhaseName::Analysis));
}

#[test]
fn test_request_defaults_from_json() {
    let req: CollaborationRequest =
        serde_json::from_str(r#"{"task_description": "Add login"}"#).unwrap();
    assert_eq!(req.priority, Priority::Medium);
    assert_eq!(req.workflow_type, WorkflowType::FullCollaboration);
    assert!(req.github_repo_url.is_none());
    assert!(req.specific_requirements.is_empty());
}

#[test]
fn test_request_rejects_unknown_priority() {
    let result: std::result::Result<CollaborationRequest, _> =
        serde_json::from_str(r#"{"task_description": "x", "priority": "urgent"}"#);
    assert!(result.is_err());
}

#[test]
fn test_phase_status_serialization() {
    assert_eq!(
        serde_json::to_string(&PhaseStatus::InProgress).unwrap(),
        "\"in_progress\""
    );
    assert_eq!(
        serde_json::to_string(&WorkflowType::AnalysisOnly).unwrap(),
        "\"analysis_only\""
    );
}

#[tokio::test]
async fn test_run_completes_all_phases_in_order() {
    let sequencer = Sequencer::simulated(SimulatedLatency::none());
    let req = request("Build API");
    let record = CollaborationRecord::new("collab-1", &req);

    let outcome = sequencer.run(record, req).await.unwrap();

    assert_eq!(outcome.record.status, CollaborationState::Completed);
    assert!(outcome.record.current_phase().is_none());
    let mut last_end = None;
    for phase in &outcome.record.phases {
        assert_eq!(phase.status, PhaseStatus::Completed);
        let start = phase.start_time.unwrap();
        let end = phase.end_time.unwrap();
        assert!(start <= end);
        if let Some(previous) = last_end {
            assert!(previous <= start, "{} started before its predecessor ended", phase.phase);
        }
        last_end = Some(end);
    }
}

#[tokio::test]
async fn test_results_flow_between_phases() {
    let sequencer = Sequencer::simulated(SimulatedLatency::none());
    let req = request("Build API");
    let record = CollaborationRecord::new("collab-2", &req);

    let outcome = sequencer.run(record, req).await.unwrap();

    assert_eq!(
        outcome.implementation.implementation_details.security_implemented,
        outcome.analysis.task_analysis.security_considerations
    );
    assert!(outcome
        .analysis
        .requirements_analysis
        .functional_requirements
        .contains(&"Rate limiting".to_string()));
    assert_eq!(
        outcome.implementation.github_integration.repository,
        "https://github.com/example/repo"
    );
    assert_eq!(outcome.report.collaboration_summary.id, "collab-2");
    assert_eq!(outcome.report.collaboration_summary.quality_score, 9.2);
    assert_eq!(
        outcome.report.knowledge_transfer.gemini_insights,
        outcome.analysis.implementation_guidance
    );
    assert_eq!(
        outcome.report.knowledge_transfer.jules_learnings,
        outcome.implementation.implementation_details
    );
}

#[tokio::test]
async fn test_missing_repository_defaults_to_local() {
    let sequencer = Sequencer::simulated(SimulatedLatency::none());
    let req = CollaborationRequest::new("Refactor");
    let record = CollaborationRecord::new("collab-3", &req);

    let outcome = sequencer.run(record, req).await.unwrap();
    assert_eq!(
        outcome.implementation.github_integration.repository,
        "local_development"
    );
}

#[tokio::test]
async fn test_failing_phase_stops_pipeline() {
    let implementer = Arc::new(CountingImplementer::default());
    let sequencer = Sequencer::new(
        Arc::new(FailingAnalyst),
        implementer.clone(),
        Arc::new(SimulatedReviewer::new(Duration::ZERO)),
    );
    let req = request("Build API");
    let record = CollaborationRecord::new("collab-4", &req);

    let err = sequencer.run(record, req).await.unwrap_err();

    assert!(err.to_string().contains("analysis back-end down"));
    assert_eq!(implementer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_start_swallows_pipeline_errors() {
    let implementer = Arc::new(CountingImplementer::default());
    let sequencer = Sequencer::new(
        Arc::new(FailingAnalyst),
        implementer.clone(),
        Arc::new(SimulatedReviewer::new(Duration::ZERO)),
    );

    let (record, handle) = sequencer
        .start(&AgentsConfig::all_enabled(), request("Build API"))
        .unwrap();

    assert_eq!(record.status, CollaborationState::Initiated);
    assert!(handle.join().await.is_none());
    assert_eq!(implementer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_start_rejects_disabled_agent() {
    let sequencer = Sequencer::simulated(SimulatedLatency::none());
    let mut config = AgentsConfig::all_enabled();
    config.jules_agent.enabled = false;

    let err = sequencer.start(&config, request("Build API")).unwrap_err();
    assert!(matches!(err, Error::AgentUnavailable { .. }));
    assert!(err.to_string().contains("Jules: false"));
    assert!(err.to_string().contains("Gemini: true"));
}

#[tokio::test]
async fn test_start_generates_unique_ids() {
    let sequencer = Sequencer::simulated(SimulatedLatency::none());
    let config = AgentsConfig::all_enabled();

    let mut ids = HashSet::new();
    for _ in 0..20 {
        let (record, handle) = sequencer.start(&config, request("Build API")).unwrap();
        assert!(!record.id.is_empty());
        assert_eq!(handle.collaboration_id(), record.id);
        assert!(ids.insert(record.id));
    }
}

#[tokio::test]
async fn test_start_returns_before_pipeline_finishes() {
    let sequencer = Sequencer::simulated(SimulatedLatency {
        analysis: Duration::from_millis(200),
        implementation: Duration::ZERO,
        validation: Duration::ZERO,
    });

    let (record, handle) = sequencer
        .start(&AgentsConfig::all_enabled(), request("Build API"))
        .unwrap();

    assert_eq!(record.status, CollaborationState::Initiated);
    assert!(!handle.is_finished());

    let outcome = handle.join().await.unwrap();
    assert_eq!(outcome.record.id, record.id);
    assert_eq!(outcome.record.status, CollaborationState::Completed);
}

#[tokio::test(start_paused = true)]
async fn test_default_latencies_sum() {
    let sequencer = Sequencer::simulated(SimulatedLatency::default());
    let req = request("Build API");
    let record = CollaborationRecord::new("collab-5", &req);

    let started = tokio::time::Instant::now();
    sequencer.run(record, req).await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(6));
    assert!(elapsed < Duration::from_secs(7));
}

#[tokio::test]
async fn test_workflow_type_does_not_change_phases() {
    let sequencer = Sequencer::simulated(SimulatedLatency::none());
    for workflow_type in WorkflowType::ALL {
        let mut req = request("Build API");
        req.workflow_type = workflow_type;
        let record = CollaborationRecord::new("collab-6", &req);

        let outcome = sequencer.run(record, req).await.unwrap();
        assert_eq!(outcome.record.workflow_type, workflow_type);
        assert!(outcome
            .record
            .phases
            .iter()
            .all(|p| p.status == PhaseStatus::Completed));
    }
}
