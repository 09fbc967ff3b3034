//! Web API module for Duet
//!
//! Provides REST API endpoints for:
//! - Multi-agent collaborations (start, status, capabilities, integration test)
//! - The Gemini analysis agent
//! - The Jules implementation agent
//! - Health and OpenAPI documentation

pub mod docs;
pub mod error;
pub mod gemini;
pub mod health;
pub mod jules;
pub mod multi_agent;

#[cfg(test)]
pub(crate) mod test_support;

use axum::Router;
use duet_core::{AgentsConfig, CodeReviewProvider, ConfigProvider, Sequencer};
use std::sync::Arc;

pub use docs::docs_routes;
pub use error::ApiError;
pub use gemini::gemini_routes;
pub use health::health_routes;
pub use jules::jules_routes;
pub use multi_agent::multi_agent_routes;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    config: Arc<dyn ConfigProvider>,
    pub sequencer: Sequencer,
    pub gemini: Arc<dyn CodeReviewProvider>,
}

impl AppState {
    pub fn new(
        config: Arc<dyn ConfigProvider>,
        sequencer: Sequencer,
        gemini: Arc<dyn CodeReviewProvider>,
    ) -> Self {
        Self {
            config,
            sequencer,
            gemini,
        }
    }

    /// Current agent configuration, read fresh on every call
    pub fn agents_config(&self) -> Result<AgentsConfig, ApiError> {
        Ok(self.config.load()?)
    }
}

/// Create the API router with all agent endpoints
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(multi_agent_routes())
        .merge(gemini_routes())
        .merge(jules_routes())
}
