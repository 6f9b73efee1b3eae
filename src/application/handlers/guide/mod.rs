//! Guide command and query handlers.
//!
//! Handlers for guide session lifecycle and navigation.

// Command handlers
mod end_session;
mod reset_session;
mod start_session;
mod trigger_step;

// Query handlers
mod describe_guide;
mod get_current_step;

pub use describe_guide::{DescribeGuideHandler, DescribeGuideQuery, GuideSummary};
pub use end_session::{EndGuideSessionCommand, EndGuideSessionError, EndGuideSessionHandler};
pub use get_current_step::{
    GetCurrentStepError, GetCurrentStepHandler, GetCurrentStepQuery, GetCurrentStepResult,
};
pub use reset_session::{
    ResetGuideSessionCommand, ResetGuideSessionError, ResetGuideSessionHandler,
    ResetGuideSessionResult,
};
pub use start_session::{
    SessionLimits, StartGuideSessionCommand, StartGuideSessionError, StartGuideSessionHandler,
    StartGuideSessionResult,
};
pub use trigger_step::{TriggerStepCommand, TriggerStepError, TriggerStepHandler, TriggerStepResult};
