//! StepView - what the host renders for a step.

use serde::Serialize;

use super::{Edge, Step};

/// Presentation surface for one step.
///
/// The host shows `text`, loads `image`/`audio` by resource key, labels its
/// two affordances and enables each one only if the matching edge exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub key: String,
    pub text: String,
    pub image: Option<String>,
    pub audio: Option<String>,
    pub affirmative_label: String,
    pub negative_label: String,
    pub affirmative_enabled: bool,
    pub negative_enabled: bool,
    pub terminal: bool,
}

impl From<&Step> for StepView {
    fn from(step: &Step) -> Self {
        Self {
            key: step.key().to_string(),
            text: step.text().to_string(),
            image: step.image().map(str::to_string),
            audio: step.audio().map(str::to_string),
            affirmative_label: step.label(Edge::Yes).to_string(),
            negative_label: step.label(Edge::No).to_string(),
            affirmative_enabled: step.has_edge(Edge::Yes),
            negative_enabled: step.has_edge(Edge::No),
            terminal: step.is_terminal(),
        }
    }
}
