//! Bundled first-aid CPR guide.

use super::{ConfigurationError, GuideDefinition, GuideGraph};

/// YAML source of the bundled guide.
pub const FIRST_AID_GUIDE_YAML: &str = include_str!("../../../guides/first_aid.yaml");

/// Parses and validates the bundled guide.
pub fn first_aid_graph() -> Result<GuideGraph, ConfigurationError> {
    GuideDefinition::from_yaml(FIRST_AID_GUIDE_YAML)?.into_graph()
}
