//! Embedded guide source - the first-aid guide compiled into the binary.

use async_trait::async_trait;

use crate::domain::guide::{first_aid_graph, GuideGraph};
use crate::ports::{GuideSource, GuideSourceError};

/// Guide source serving the bundled first-aid guide
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedGuideSource;

impl EmbeddedGuideSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GuideSource for EmbeddedGuideSource {
    async fn load(&self) -> Result<GuideGraph, GuideSourceError> {
        first_aid_graph().map_err(|source| GuideSourceError::Configuration {
            location: self.describe(),
            source,
        })
    }

    fn describe(&self) -> String {
        "embedded:first_aid".to_string()
    }
}
