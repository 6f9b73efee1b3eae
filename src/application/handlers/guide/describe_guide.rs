//! DescribeGuideHandler - Query handler for the shape of the loaded guide.

use std::sync::Arc;

use crate::domain::foundation::StepKey;
use crate::domain::guide::GuideGraph;

/// Query describing the loaded guide.
#[derive(Debug, Clone, Default)]
pub struct DescribeGuideQuery;

/// Summary of the loaded guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideSummary {
    pub entry: StepKey,
    pub step_count: usize,
    /// All step keys, sorted.
    pub steps: Vec<StepKey>,
    /// Keys of steps whose edges only lead back to themselves.
    pub terminal_steps: Vec<StepKey>,
}

/// Handler for describing the guide.
pub struct DescribeGuideHandler {
    graph: Arc<GuideGraph>,
}

impl DescribeGuideHandler {
    pub fn new(graph: Arc<GuideGraph>) -> Self {
        Self { graph }
    }

    pub fn handle(&self, _query: DescribeGuideQuery) -> GuideSummary {
        GuideSummary {
            entry: self.graph.entry_key().clone(),
            step_count: self.graph.len(),
            steps: self.graph.steps().map(|s| s.key().clone()).collect(),
            terminal_steps: self
                .graph
                .terminal_steps()
                .map(|s| s.key().clone())
                .collect(),
        }
    }
}
