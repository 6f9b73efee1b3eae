//! Step - a single node of a guide graph.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StepKey, ValidationError};

/// A labeled outgoing edge of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Yes,
    No,
}

impl Edge {
    /// Both edges, affirmative first.
    pub fn all() -> [Edge; 2] {
        [Edge::Yes, Edge::No]
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Yes => write!(f, "yes"),
            Edge::No => write!(f, "no"),
        }
    }
}

/// Host trigger event bound to one navigation edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Affirmative,
    Negative,
}

impl Trigger {
    /// The edge this trigger navigates along.
    pub fn edge(&self) -> Edge {
        match self {
            Trigger::Affirmative => Edge::Yes,
            Trigger::Negative => Edge::No,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Affirmative => write!(f, "affirmative"),
            Trigger::Negative => write!(f, "negative"),
        }
    }
}

impl FromStr for Trigger {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "affirmative" | "yes" => Ok(Trigger::Affirmative),
            "negative" | "no" => Ok(Trigger::Negative),
            other => Err(ValidationError::invalid_format(
                "trigger",
                format!("expected 'affirmative' or 'negative', got '{}'", other),
            )),
        }
    }
}

/// One node of the guide: display content plus up to two outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    key: StepKey,
    text: String,
    image: Option<String>,
    audio: Option<String>,
    yes_label: String,
    no_label: String,
    yes: Option<StepKey>,
    no: Option<StepKey>,
}

impl Step {
    /// Creates a step with text and no edges, images, audio or labels.
    pub fn new(key: StepKey, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
            image: None,
            audio: None,
            yes_label: String::new(),
            no_label: String::new(),
            yes: None,
            no: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_audio(mut self, audio: impl Into<String>) -> Self {
        self.audio = Some(audio.into());
        self
    }

    /// Sets the call-to-action label of an edge without touching its target.
    pub fn with_label(mut self, edge: Edge, label: impl Into<String>) -> Self {
        match edge {
            Edge::Yes => self.yes_label = label.into(),
            Edge::No => self.no_label = label.into(),
        }
        self
    }

    /// Points an edge at a target step.
    pub fn with_edge(mut self, edge: Edge, target: StepKey) -> Self {
        match edge {
            Edge::Yes => self.yes = Some(target),
            Edge::No => self.no = Some(target),
        }
        self
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn key(&self) -> &StepKey {
        &self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn audio(&self) -> Option<&str> {
        self.audio.as_deref()
    }

    /// Returns the call-to-action label for an edge.
    pub fn label(&self, edge: Edge) -> &str {
        match edge {
            Edge::Yes => &self.yes_label,
            Edge::No => &self.no_label,
        }
    }

    /// Returns the target of an edge, if the step defines one.
    pub fn edge(&self, edge: Edge) -> Option<&StepKey> {
        match edge {
            Edge::Yes => self.yes.as_ref(),
            Edge::No => self.no.as_ref(),
        }
    }

    /// Returns true if the step defines the given edge.
    pub fn has_edge(&self, edge: Edge) -> bool {
        self.edge(edge).is_some()
    }

    /// Iterates over the edges this step actually defines.
    pub fn edges(&self) -> impl Iterator<Item = (Edge, &StepKey)> + '_ {
        Edge::all()
            .into_iter()
            .filter_map(move |edge| self.edge(edge).map(|target| (edge, target)))
    }

    /// A step is terminal when it has no edges or every edge loops back to itself.
    pub fn is_terminal(&self) -> bool {
        self.edges().all(|(_, target)| target == &self.key)
    }
}
