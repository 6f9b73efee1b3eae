//! Property tests for guide navigation.
//!
//! Arbitrary trigger sequences over the bundled guide and over generated
//! graphs must never move a cursor outside its graph.

use proptest::prelude::*;
use std::sync::Arc;

use pulse_guide::domain::foundation::StepKey;
use pulse_guide::domain::guide::{
    first_aid_graph, Edge, GuideError, GuideGraph, Step, StepGuide, Trigger,
};

fn trigger_strategy() -> impl Strategy<Value = Trigger> {
    prop_oneof![Just(Trigger::Affirmative), Just(Trigger::Negative)]
}

fn key(i: usize) -> StepKey {
    StepKey::new(format!("S{}", i)).unwrap()
}

/// A valid graph of `n` steps where each edge is present or absent and, when
/// present, points at some step in the graph.
fn graph_strategy() -> impl Strategy<Value = GuideGraph> {
    (1usize..8).prop_flat_map(|n| {
        let edges = (proptest::option::of(0..n), proptest::option::of(0..n));
        proptest::collection::vec(edges, n).prop_map(move |edges| {
            let steps = edges.into_iter().enumerate().map(|(i, (yes, no))| {
                let mut step = Step::new(key(i), format!("Step {}", i));
                if let Some(t) = yes {
                    step = step.with_edge(Edge::Yes, key(t));
                }
                if let Some(t) = no {
                    step = step.with_edge(Edge::No, key(t));
                }
                step
            });
            GuideGraph::new(key(0), steps).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn first_aid_cursor_stays_in_graph(triggers in proptest::collection::vec(trigger_strategy(), 0..64)) {
        let graph = Arc::new(first_aid_graph().unwrap());
        let mut guide = StepGuide::new(graph.clone());

        for trigger in triggers {
            let before = guide.cursor().clone();
            match guide.trigger(trigger) {
                Ok(step) => prop_assert!(graph.contains(step.key())),
                Err(GuideError::NoTransition { .. }) => {
                    prop_assert_eq!(guide.cursor(), &before);
                }
            }
            prop_assert!(graph.contains(guide.cursor()));
        }
    }

    #[test]
    fn advance_follows_edge_or_stays_put(
        graph in graph_strategy(),
        edges in proptest::collection::vec(prop_oneof![Just(Edge::Yes), Just(Edge::No)], 0..32),
    ) {
        let graph = Arc::new(graph);
        let mut guide = StepGuide::new(graph.clone());

        for edge in edges {
            let expected = guide.current_step().edge(edge).cloned();
            let before = guide.cursor().clone();
            let result = guide.advance(edge).map(|s| s.key().clone());

            match expected {
                Some(target) => prop_assert_eq!(result.ok(), Some(target)),
                None => {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(guide.cursor(), &before);
                }
            }
        }
    }

    #[test]
    fn reset_always_restores_entry(
        graph in graph_strategy(),
        triggers in proptest::collection::vec(trigger_strategy(), 0..32),
    ) {
        let graph = Arc::new(graph);
        let mut guide = StepGuide::new(graph.clone());
        for trigger in triggers {
            let _ = guide.trigger(trigger);
        }

        guide.reset();

        prop_assert_eq!(guide.cursor(), graph.entry_key());
        prop_assert_eq!(guide.current_step().key(), graph.entry_key());
    }

    #[test]
    fn terminal_self_loop_is_absorbing(triggers in proptest::collection::vec(trigger_strategy(), 1..16)) {
        let graph = Arc::new(first_aid_graph().unwrap());
        let end = StepKey::new("End").unwrap();
        let mut guide = StepGuide::new(graph);
        guide.advance(Edge::Yes).unwrap();
        guide.advance(Edge::Yes).unwrap();
        prop_assert_eq!(guide.cursor(), &end);

        for trigger in triggers {
            let step = guide.trigger(trigger).map(|s| s.key().clone());
            prop_assert_eq!(step.ok(), Some(end.clone()));
        }
    }
}
