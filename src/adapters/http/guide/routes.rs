//! Route configuration for guide endpoints.
//!
//! Configures Axum router with guide-related routes.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    describe_guide, end_session, get_session, reset_session, start_session, trigger_step,
    GuideAppState,
};

/// Creates the guide router with all endpoints.
///
/// Routes:
/// - `GET /api/guide` - Describe the loaded guide
/// - `POST /api/guide/sessions` - Start a session at the entry step
/// - `GET /api/guide/sessions/:id` - Current step of a session
/// - `DELETE /api/guide/sessions/:id` - End a session
/// - `POST /api/guide/sessions/:id/triggers/:trigger` - Apply `yes`/`no`
/// - `POST /api/guide/sessions/:id/reset` - Back to the entry step
pub fn guide_router() -> Router<GuideAppState> {
    Router::new()
        .route("/api/guide", get(describe_guide))
        .route("/api/guide/sessions", post(start_session))
        .route(
            "/api/guide/sessions/:id",
            get(get_session).delete(end_session),
        )
        .route(
            "/api/guide/sessions/:id/triggers/:trigger",
            post(trigger_step),
        )
        .route("/api/guide/sessions/:id/reset", post(reset_session))
}
