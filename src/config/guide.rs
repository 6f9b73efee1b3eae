//! Guide configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::guide_source::{EmbeddedGuideSource, YamlFileGuideSource};
use crate::application::handlers::guide::SessionLimits;
use crate::ports::GuideSource;

/// Which guide to load and how sessions walking it are bounded
#[derive(Debug, Clone, Deserialize)]
pub struct GuideConfig {
    /// YAML guide definition; the bundled first-aid guide when unset
    #[serde(default)]
    pub definition_path: Option<PathBuf>,

    /// Upper bound on concurrently stored sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Seconds without activity after which a session is evicted
    #[serde(default = "default_session_idle_timeout_secs")]
    pub session_idle_timeout_secs: u64,
}

impl GuideConfig {
    /// The source the guide graph is loaded from at startup
    pub fn guide_source(&self) -> Arc<dyn GuideSource> {
        match &self.definition_path {
            Some(path) => Arc::new(YamlFileGuideSource::new(path.clone())),
            None => Arc::new(EmbeddedGuideSource::new()),
        }
    }

    /// Session cap and idle timeout handed to the start handler
    pub fn session_limits(&self) -> SessionLimits {
        SessionLimits {
            max_sessions: self.max_sessions,
            idle_timeout: Duration::from_secs(self.session_idle_timeout_secs),
        }
    }

    /// Validate guide configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_sessions == 0 {
            return Err(ValidationError::InvalidMaxSessions);
        }
        if self.session_idle_timeout_secs == 0 {
            return Err(ValidationError::InvalidIdleTimeout);
        }
        if matches!(&self.definition_path, Some(p) if p.as_os_str().is_empty()) {
            return Err(ValidationError::EmptyDefinitionPath);
        }
        Ok(())
    }
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            definition_path: None,
            max_sessions: default_max_sessions(),
            session_idle_timeout_secs: default_session_idle_timeout_secs(),
        }
    }
}

fn default_max_sessions() -> usize {
    1000
}

fn default_session_idle_timeout_secs() -> u64 {
    1800
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_config_defaults() {
        let config = GuideConfig::default();
        assert!(config.definition_path.is_none());
        assert_eq!(config.max_sessions, 1000);
        assert_eq!(config.session_idle_timeout_secs, 1800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_source_is_embedded() {
        let config = GuideConfig::default();
        assert_eq!(config.guide_source().describe(), "embedded:first_aid");
    }

    #[test]
    fn test_path_selects_yaml_source() {
        let config = GuideConfig {
            definition_path: Some(PathBuf::from("/etc/pulse/guide.yaml")),
            ..Default::default()
        };
        assert!(config.guide_source().describe().contains("/etc/pulse/guide.yaml"));
    }

    #[test]
    fn test_validation_zero_sessions() {
        let config = GuideConfig {
            max_sessions: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidMaxSessions)
        ));
    }

    #[test]
    fn test_validation_zero_idle_timeout() {
        let config = GuideConfig {
            session_idle_timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidIdleTimeout)
        ));
    }

    #[test]
    fn test_session_limits() {
        let config = GuideConfig {
            max_sessions: 3,
            session_idle_timeout_secs: 90,
            ..Default::default()
        };
        let limits = config.session_limits();
        assert_eq!(limits.max_sessions, 3);
        assert_eq!(limits.idle_timeout, Duration::from_secs(90));
    }

    #[test]
    fn test_validation_empty_path() {
        let config = GuideConfig {
            definition_path: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_guide_config_deserialization() {
        let json = r#"{ "definition_path": "guides/custom.yaml", "max_sessions": 5 }"#;
        let config: GuideConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.definition_path, Some(PathBuf::from("guides/custom.yaml")));
        assert_eq!(config.max_sessions, 5);
    }
}
