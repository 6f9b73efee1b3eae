//! YAML file guide source.
//!
//! Reads a guide definition from disk and validates it into a graph.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::guide::{GuideDefinition, GuideGraph};
use crate::ports::{GuideSource, GuideSourceError};

/// Guide source backed by a YAML file
#[derive(Debug, Clone)]
pub struct YamlFileGuideSource {
    path: PathBuf,
}

impl YamlFileGuideSource {
    /// Create a source for the given definition file
    ///
    /// # Example
    /// ```ignore
    /// let source = YamlFileGuideSource::new("./guides/first_aid.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GuideSource for YamlFileGuideSource {
    async fn load(&self) -> Result<GuideGraph, GuideSourceError> {
        let yaml = fs::read_to_string(&self.path)
            .await
            .map_err(|e| GuideSourceError::Io {
                location: self.describe(),
                reason: e.to_string(),
            })?;

        let graph = GuideDefinition::from_yaml(&yaml)
            .and_then(GuideDefinition::into_graph)
            .map_err(|source| GuideSourceError::Configuration {
                location: self.describe(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), steps = graph.len(), "Loaded guide file");
        Ok(graph)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::guide::{ConfigurationError, FIRST_AID_GUIDE_YAML};
    use tempfile::TempDir;

    #[tokio::test]
    async fn loads_valid_definition() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("guide.yaml");
        std::fs::write(&path, FIRST_AID_GUIDE_YAML).unwrap();

        let graph = YamlFileGuideSource::new(&path).load().await.unwrap();

        assert_eq!(graph.len(), 12);
        assert_eq!(graph.entry_key().as_str(), "Start");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = YamlFileGuideSource::new(temp_dir.path().join("absent.yaml"));

        let result = source.load().await;

        assert!(matches!(result, Err(GuideSourceError::Io { .. })));
    }

    #[tokio::test]
    async fn dangling_edge_is_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        std::fs::write(
            &path,
            "entry: Start\nsteps:\n  Start:\n    text: hi\n    yes: Missing\n",
        )
        .unwrap();

        let result = YamlFileGuideSource::new(&path).load().await;

        match result {
            Err(GuideSourceError::Configuration { location, source }) => {
                assert!(location.ends_with("broken.yaml"));
                assert!(matches!(source, ConfigurationError::DanglingEdge { .. }));
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn describe_returns_path() {
        let source = YamlFileGuideSource::new("guides/first_aid.yaml");
        assert_eq!(source.describe(), "guides/first_aid.yaml");
        assert_eq!(source.path(), Path::new("guides/first_aid.yaml"));
    }
}
