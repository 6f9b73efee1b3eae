//! Guide Source Port - Interface for obtaining a validated guide graph.
//!
//! A source is consulted once at startup. Any error it returns is fatal:
//! the service refuses to start rather than navigate a broken graph.

use async_trait::async_trait;

use crate::domain::guide::{ConfigurationError, GuideGraph};

/// Errors that can occur while loading a guide
#[derive(Debug, thiserror::Error)]
pub enum GuideSourceError {
    #[error("Failed to read guide from {location}: {reason}")]
    Io { location: String, reason: String },

    #[error("Guide at {location} is invalid: {source}")]
    Configuration {
        location: String,
        #[source]
        source: ConfigurationError,
    },
}

/// Port for loading guide graphs
#[async_trait]
pub trait GuideSource: Send + Sync {
    /// Load and validate the guide graph
    ///
    /// # Errors
    /// Returns `GuideSourceError::Io` if the definition cannot be read and
    /// `GuideSourceError::Configuration` if it does not form a valid graph
    async fn load(&self) -> Result<GuideGraph, GuideSourceError>;

    /// Human-readable location of the guide, for logs and errors
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::StepKey;

    #[test]
    fn configuration_error_message_includes_location_and_cause() {
        let err = GuideSourceError::Configuration {
            location: "guides/broken.yaml".to_string(),
            source: ConfigurationError::UnknownEntry(StepKey::new("Start").unwrap()),
        };
        let message = err.to_string();
        assert!(message.contains("guides/broken.yaml"));
        assert!(message.contains("Entry step 'Start' is not defined"));
    }

    #[test]
    fn guide_source_is_object_safe() {
        fn _accepts(_source: &dyn GuideSource) {}
    }
}
