//! Gemini analysis agent endpoints
//!
//! POST /gemini/analyze      - Analyse a code snippet
//! POST /gemini/review-pr    - Review a pull request
//! GET  /gemini/capabilities - Agent capabilities
//! GET  /gemini/health       - Agent health
//! POST /gemini/collaborate  - Hand a task analysis over to Jules

pub mod handlers;
pub mod types;


pub use handlers::{
    analyze_code, gemini_capabilities, gemini_collaborate, gemini_health, review_pull_request,
};
pub use types::{AnalyzeRequest, GeminiCollaborateParams, ReviewPrRequest};

use axum::{
    routing::{get, post},
    Router,
};

use super::AppState;

/// Create Gemini routes
pub fn gemini_routes() -> Router<AppState> {
    Router::new()
        .route("/gemini/analyze", post(analyze_code))
        .route("/gemini/review-pr", post(review_pull_request))
        .route("/gemini/capabilities", get(gemini_capabilities))
        .route("/gemini/health", get(gemini_health))
        .route("/gemini/collaborate", post(gemini_collaborate))
}
