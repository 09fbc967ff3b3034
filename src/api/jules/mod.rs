//! Jules implementation agent endpoints
//!
//! POST /jules/task         - Submit a task
//! GET  /jules/status/:id   - Task status
//! GET  /jules/capabilities - Agent capabilities
//! POST /jules/collaborate  - Start a Jules-led collaboration

pub mod handlers;
pub mod types;


pub use handlers::{jules_capabilities, jules_collaborate, jules_task_status, submit_task};
pub use types::{JulesCollaborateParams, SubmitTaskRequest};

use axum::{
    routing::{get, post},
    Router,
};

use super::AppState;

/// Create Jules routes
pub fn jules_routes() -> Router<AppState> {
    Router::new()
        .route("/jules/task", post(submit_task))
        .route("/jules/status/:id", get(jules_task_status))
        .route("/jules/capabilities", get(jules_capabilities))
        .route("/jules/collaborate", post(jules_collaborate))
}
