//! Duet Core - Simulated Multi-Agent Collaboration
//!
//! This crate holds the domain logic behind the Duet HTTP service:
//! - Config: the agent configuration model and the per-request configuration gate
//! - Workflow: the four-phase collaboration sequencer and its provider seams
//! - Reports: static status and capability payloads
//! - Gemini / Jules: per-agent integration semantics (analysis, PR review, task intake)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod gemini;
pub mod jules;
pub mod reports;
pub mod workflow;

pub use crate::config::{
    AgentKind, AgentsConfig, ConfigProvider, CrossAgentConfig, FileConfigProvider,
    GeminiAgentConfig, JulesAgentConfig, StaticConfigProvider,
};
pub use error::{Error, Result};
pub use gemini::{AnalysisKind, CodeReviewProvider, SimulatedGemini};
pub use workflow::{
    CollaborationOutcome, CollaborationRecord, CollaborationRequest, CollaborationState,
    PhaseName, PhaseRecord, PhaseStatus, PipelineHandle, Priority, Sequencer, SimulatedLatency,
    WorkflowType,
};
