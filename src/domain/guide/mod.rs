//! Guide module - the step-by-step decision guide.
//!
//! A guide is a fixed graph of steps with two labeled edges per step
//! ("yes"/"no"). The graph is validated once and never mutated; a
//! [`StepGuide`] holds the only mutable state, the cursor.
//!
//! # Module Organization
//!
//! - `step` - `Step`, `Edge`, and host `Trigger`s
//! - `graph` - validated `GuideGraph`
//! - `step_guide` - cursor and navigation
//! - `session` - host-side session around a `StepGuide`
//! - `view` - presentation surface handed to the host
//! - `definition` - YAML definition format
//! - `first_aid` - bundled CPR guide

mod definition;
mod errors;
mod first_aid;
mod graph;
mod session;
mod step;
mod step_guide;
mod view;

pub use definition::{GuideDefinition, StepDefinition};
pub use errors::{ConfigurationError, GuideError, NO_FURTHER_STEPS};
pub use first_aid::{first_aid_graph, FIRST_AID_GUIDE_YAML};
pub use graph::GuideGraph;
pub use session::GuideSession;
pub use step::{Edge, Step, Trigger};
pub use step_guide::StepGuide;
pub use view::StepView;
