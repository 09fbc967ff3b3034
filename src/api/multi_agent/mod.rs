//! Multi-agent collaboration endpoints
//!
//! POST /multi-agent/start-collaboration - Start a four-phase collaboration
//! GET  /multi-agent/status/:id          - Collaboration status
//! GET  /multi-agent/capabilities        - Capability and configuration summary
//! POST /multi-agent/test-integration    - Readiness self-test

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;

pub use handlers::{
    collaboration_status, multi_agent_capabilities, start_collaboration, test_integration,
};
pub use types::StartCollaborationRequest;

use axum::{
    routing::{get, post},
    Router,
};

use super::AppState;

/// Create multi-agent routes
pub fn multi_agent_routes() -> Router<AppState> {
    Router::new()
        .route("/multi-agent/start-collaboration", post(start_collaboration))
        .route("/multi-agent/status/:id", get(collaboration_status))
        .route("/multi-agent/capabilities", get(multi_agent_capabilities))
        .route("/multi-agent/test-integration", post(test_integration))
}
