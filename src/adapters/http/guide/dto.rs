//! HTTP DTOs (Data Transfer Objects) for guide endpoints.
//!
//! These types define the JSON response structure for the guide API.
//! They serve as the boundary between HTTP and the application layer.

use serde::Serialize;

use crate::application::handlers::guide::GuideSummary;
use crate::domain::guide::{GuideSession, StepView};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A session and the step it is currently showing.
#[derive(Debug, Clone, Serialize)]
pub struct GuideSessionResponse {
    /// Session ID.
    pub session_id: String,
    /// Presentation of the current step.
    pub step: StepView,
    /// Accepted transitions since start or last reset.
    pub transitions: u32,
    /// When the session started (ISO 8601).
    pub started_at: String,
    /// When the session last changed (ISO 8601).
    pub last_activity_at: String,
}

impl From<&GuideSession> for GuideSessionResponse {
    fn from(session: &GuideSession) -> Self {
        Self {
            session_id: session.id().to_string(),
            step: StepView::from(session.current_step()),
            transitions: session.transitions(),
            started_at: session.started_at().to_rfc3339(),
            last_activity_at: session.last_activity_at().to_rfc3339(),
        }
    }
}

/// Response to an accepted trigger.
#[derive(Debug, Clone, Serialize)]
pub struct TriggerStepResponse {
    /// Key of the step the session left.
    pub previous_step: String,
    #[serde(flatten)]
    pub session: GuideSessionResponse,
}

/// Shape of the loaded guide.
#[derive(Debug, Clone, Serialize)]
pub struct GuideSummaryResponse {
    pub entry: String,
    pub step_count: usize,
    pub steps: Vec<String>,
    pub terminal_steps: Vec<String>,
}

impl From<GuideSummary> for GuideSummaryResponse {
    fn from(summary: GuideSummary) -> Self {
        Self {
            entry: summary.entry.to_string(),
            step_count: summary.step_count,
            steps: summary.steps.iter().map(ToString::to_string).collect(),
            terminal_steps: summary
                .terminal_steps
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource, id),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            code: "SERVICE_UNAVAILABLE".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// A refused trigger. `details` carries the session as it still is.
    pub fn no_transition(message: impl Into<String>, current: GuideSessionResponse) -> Self {
        Self {
            code: "NO_TRANSITION".to_string(),
            message: message.into(),
            details: serde_json::to_value(current).ok(),
        }
    }
}
