//! Guide definition format.
//!
//! Guides are written as YAML: an `entry` key and a `steps` mapping from step
//! key to content and edges. A definition is only data; [`GuideDefinition::into_graph`]
//! turns it into a validated [`GuideGraph`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::StepKey;

use super::{ConfigurationError, Edge, GuideGraph, Step};

/// Serialized form of a whole guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuideDefinition {
    /// Key of the step a fresh guide starts on.
    pub entry: String,
    pub steps: BTreeMap<String, StepDefinition>,
}

/// Serialized form of one step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepDefinition {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default)]
    pub yes_label: String,
    #[serde(default)]
    pub no_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no: Option<String>,
}

impl GuideDefinition {
    /// Parses a YAML guide definition.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigurationError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigurationError::Parse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigurationError> {
        serde_yaml::to_string(self).map_err(|e| ConfigurationError::Parse(e.to_string()))
    }

    /// Validates the definition into a graph.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` for empty keys or anything
    /// [`GuideGraph::new`] rejects.
    pub fn into_graph(self) -> Result<GuideGraph, ConfigurationError> {
        let entry = StepKey::new(self.entry)?;
        let steps = self
            .steps
            .into_iter()
            .map(|(key, def)| def.into_step(StepKey::new(key)?))
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        GuideGraph::new(entry, steps)
    }
}

impl StepDefinition {
    fn into_step(self, key: StepKey) -> Result<Step, ConfigurationError> {
        let mut step = Step::new(key, self.text)
            .with_label(Edge::Yes, self.yes_label)
            .with_label(Edge::No, self.no_label);

        if let Some(image) = self.image {
            step = step.with_image(image);
        }
        if let Some(audio) = self.audio {
            step = step.with_audio(audio);
        }
        if let Some(yes) = self.yes {
            step = step.with_edge(Edge::Yes, StepKey::new(yes)?);
        }
        if let Some(no) = self.no {
            step = step.with_edge(Edge::No, StepKey::new(no)?);
        }

        Ok(step)
    }
}

impl From<&GuideGraph> for GuideDefinition {
    fn from(graph: &GuideGraph) -> Self {
        let steps = graph
            .steps()
            .map(|step| {
                let def = StepDefinition {
                    text: step.text().to_string(),
                    image: step.image().map(str::to_string),
                    audio: step.audio().map(str::to_string),
                    yes_label: step.label(Edge::Yes).to_string(),
                    no_label: step.label(Edge::No).to_string(),
                    yes: step.edge(Edge::Yes).map(ToString::to_string),
                    no: step.edge(Edge::No).map(ToString::to_string),
                };
                (step.key().to_string(), def)
            })
            .collect();

        Self {
            entry: graph.entry_key().to_string(),
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_GUIDE: &str = r#"
entry: Start
steps:
  Start:
    text: "Is the person breathing?"
    image: img_breathing_check
    yes_label: "Yes"
    no_label: "No"
    yes: End
    no: End
  End:
    text: "Help is on the way."
    yes: End
    no: End
"#;

    #[test]
    fn parses_and_validates_small_guide() {
        let graph = GuideDefinition::from_yaml(SMALL_GUIDE)
            .unwrap()
            .into_graph()
            .unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.entry().image(), Some("img_breathing_check"));
        assert_eq!(graph.entry().label(Edge::No), "No");
    }

    #[test]
    fn missing_labels_default_to_empty() {
        let graph = GuideDefinition::from_yaml(SMALL_GUIDE)
            .unwrap()
            .into_graph()
            .unwrap();
        let end = graph.step(&StepKey::new("End").unwrap()).unwrap();
        assert_eq!(end.label(Edge::Yes), "");
        assert_eq!(end.audio(), None);
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let result = GuideDefinition::from_yaml("entry: [unclosed");
        assert!(matches!(result, Err(ConfigurationError::Parse(_))));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let yaml = "entry: Start\nsteps:\n  Start:\n    text: hi\n    maybe: End\n";
        assert!(matches!(
            GuideDefinition::from_yaml(yaml),
            Err(ConfigurationError::Parse(_))
        ));
    }

    #[test]
    fn dangling_edge_fails_validation() {
        let yaml = "entry: Start\nsteps:\n  Start:\n    text: hi\n    yes: Elsewhere\n";
        let result = GuideDefinition::from_yaml(yaml).unwrap().into_graph();
        assert!(matches!(
            result,
            Err(ConfigurationError::DanglingEdge { edge: Edge::Yes, .. })
        ));
    }

    #[test]
    fn empty_edge_target_is_invalid() {
        let yaml = "entry: Start\nsteps:\n  Start:\n    text: hi\n    no: \"\"\n";
        let result = GuideDefinition::from_yaml(yaml).unwrap().into_graph();
        assert!(matches!(result, Err(ConfigurationError::Invalid(_))));
    }

    #[test]
    fn graph_exports_back_to_equivalent_definition() {
        let original = GuideDefinition::from_yaml(SMALL_GUIDE).unwrap();
        let graph = original.clone().into_graph().unwrap();
        assert_eq!(GuideDefinition::from(&graph), original);
    }
}
