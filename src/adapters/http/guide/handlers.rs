//! HTTP handlers for guide endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::guide::{
    DescribeGuideHandler, DescribeGuideQuery, EndGuideSessionCommand, EndGuideSessionError,
    EndGuideSessionHandler, GetCurrentStepError, GetCurrentStepHandler, GetCurrentStepQuery,
    ResetGuideSessionCommand, ResetGuideSessionError, ResetGuideSessionHandler,
    SessionLimits, StartGuideSessionCommand, StartGuideSessionError, StartGuideSessionHandler,
    TriggerStepCommand, TriggerStepError, TriggerStepHandler,
};
use crate::domain::foundation::GuideSessionId;
use crate::domain::guide::{GuideGraph, Trigger, NO_FURTHER_STEPS};
use crate::ports::GuideSessionStore;

use super::dto::{ErrorResponse, GuideSessionResponse, GuideSummaryResponse, TriggerStepResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct GuideAppState {
    pub graph: Arc<GuideGraph>,
    pub session_store: Arc<dyn GuideSessionStore>,
    pub limits: SessionLimits,
}

impl GuideAppState {
    pub fn new(
        graph: Arc<GuideGraph>,
        session_store: Arc<dyn GuideSessionStore>,
        limits: SessionLimits,
    ) -> Self {
        Self {
            graph,
            session_store,
            limits,
        }
    }

    pub fn start_session_handler(&self) -> StartGuideSessionHandler {
        StartGuideSessionHandler::new(
            self.graph.clone(),
            self.session_store.clone(),
            self.limits,
        )
    }

    pub fn get_current_step_handler(&self) -> GetCurrentStepHandler {
        GetCurrentStepHandler::new(self.session_store.clone())
    }

    pub fn trigger_step_handler(&self) -> TriggerStepHandler {
        TriggerStepHandler::new(self.session_store.clone())
    }

    pub fn reset_session_handler(&self) -> ResetGuideSessionHandler {
        ResetGuideSessionHandler::new(self.session_store.clone())
    }

    pub fn end_session_handler(&self) -> EndGuideSessionHandler {
        EndGuideSessionHandler::new(self.session_store.clone())
    }

    pub fn describe_guide_handler(&self) -> DescribeGuideHandler {
        DescribeGuideHandler::new(self.graph.clone())
    }
}

fn parse_session_id(raw: &str) -> Result<GuideSessionId, GuideApiError> {
    raw.parse()
        .map_err(|_| GuideApiError::BadRequest("Invalid session ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/guide - Describe the loaded guide
pub async fn describe_guide(State(state): State<GuideAppState>) -> impl IntoResponse {
    let summary = state.describe_guide_handler().handle(DescribeGuideQuery);
    Json(GuideSummaryResponse::from(summary))
}

/// GET /api/guide/sessions/:id - Get the step a session is on
pub async fn get_session(
    State(state): State<GuideAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, GuideApiError> {
    let session_id = parse_session_id(&session_id)?;

    let session = state
        .get_current_step_handler()
        .handle(GetCurrentStepQuery { session_id })
        .await?;

    Ok(Json(GuideSessionResponse::from(&session)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/guide/sessions - Start a session at the entry step
pub async fn start_session(
    State(state): State<GuideAppState>,
) -> Result<impl IntoResponse, GuideApiError> {
    let result = state
        .start_session_handler()
        .handle(StartGuideSessionCommand)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(GuideSessionResponse::from(&result.session)),
    ))
}

/// POST /api/guide/sessions/:id/triggers/:trigger - Apply a yes/no trigger
pub async fn trigger_step(
    State(state): State<GuideAppState>,
    Path((session_id, trigger)): Path<(String, String)>,
) -> Result<impl IntoResponse, GuideApiError> {
    let session_id = parse_session_id(&session_id)?;
    let trigger: Trigger = trigger
        .parse()
        .map_err(|e: crate::domain::foundation::ValidationError| {
            GuideApiError::BadRequest(e.to_string())
        })?;

    let result = state
        .trigger_step_handler()
        .handle(TriggerStepCommand {
            session_id,
            trigger,
        })
        .await?;

    Ok(Json(TriggerStepResponse {
        previous_step: result.previous.to_string(),
        session: GuideSessionResponse::from(&result.session),
    }))
}

/// POST /api/guide/sessions/:id/reset - Return a session to the entry step
pub async fn reset_session(
    State(state): State<GuideAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, GuideApiError> {
    let session_id = parse_session_id(&session_id)?;

    let result = state
        .reset_session_handler()
        .handle(ResetGuideSessionCommand { session_id })
        .await?;

    Ok(Json(GuideSessionResponse::from(&result.session)))
}

/// DELETE /api/guide/sessions/:id - End a session
pub async fn end_session(
    State(state): State<GuideAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, GuideApiError> {
    let session_id = parse_session_id(&session_id)?;

    state
        .end_session_handler()
        .handle(EndGuideSessionCommand { session_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum GuideApiError {
    BadRequest(String),
    NotFound(GuideSessionId),
    /// The trigger has no edge from the current step; carries the unchanged session.
    NoTransition(Box<GuideSessionResponse>),
    Unavailable(String),
    Internal(String),
}

impl From<StartGuideSessionError> for GuideApiError {
    fn from(err: StartGuideSessionError) -> Self {
        match err {
            e @ StartGuideSessionError::SessionLimitReached(_) => {
                GuideApiError::Unavailable(e.to_string())
            }
            StartGuideSessionError::Infrastructure(msg) => GuideApiError::Internal(msg),
        }
    }
}

impl From<GetCurrentStepError> for GuideApiError {
    fn from(err: GetCurrentStepError) -> Self {
        match err {
            GetCurrentStepError::NotFound(id) => GuideApiError::NotFound(id),
            GetCurrentStepError::Infrastructure(msg) => GuideApiError::Internal(msg),
        }
    }
}

impl From<TriggerStepError> for GuideApiError {
    fn from(err: TriggerStepError) -> Self {
        match err {
            TriggerStepError::NotFound(id) => GuideApiError::NotFound(id),
            TriggerStepError::NoTransition { session, .. } => {
                GuideApiError::NoTransition(Box::new(GuideSessionResponse::from(session.as_ref())))
            }
            TriggerStepError::Infrastructure(msg) => GuideApiError::Internal(msg),
        }
    }
}

impl From<ResetGuideSessionError> for GuideApiError {
    fn from(err: ResetGuideSessionError) -> Self {
        match err {
            ResetGuideSessionError::NotFound(id) => GuideApiError::NotFound(id),
            ResetGuideSessionError::Infrastructure(msg) => GuideApiError::Internal(msg),
        }
    }
}

impl From<EndGuideSessionError> for GuideApiError {
    fn from(err: EndGuideSessionError) -> Self {
        match err {
            EndGuideSessionError::NotFound(id) => GuideApiError::NotFound(id),
            EndGuideSessionError::Infrastructure(msg) => GuideApiError::Internal(msg),
        }
    }
}

impl IntoResponse for GuideApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            GuideApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            GuideApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found("Guide session", &id.to_string()),
            ),
            GuideApiError::NoTransition(current) => (
                StatusCode::CONFLICT,
                ErrorResponse::no_transition(NO_FURTHER_STEPS, *current),
            ),
            GuideApiError::Unavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::unavailable(msg),
            ),
            GuideApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Guide request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
