//! Resolver property-based tests
//!
//! Random graphs over `v0..vN`, declared in index order.

use influx_application::{DependencyResolver, TopologicalResolver};
use influx_domain::entities::DependencyGraph;
use influx_domain::value_objects::{ComponentIdentity, TopologicalOutcome};
use proptest::prelude::*;
use std::collections::HashSet;

fn vertex(index: usize) -> ComponentIdentity {
    ComponentIdentity::new(format!("v{index}")).unwrap()
}

/// Graph with `size` declared vertices and the given `(from, to)` edges
fn build(size: usize, edges: &[(usize, usize)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for index in 0..size {
        graph.declare_vertex(&vertex(index));
    }
    for &(from, to) in edges {
        graph.add_edge(&vertex(from), &vertex(to));
    }
    graph
}

/// Edges only from lower to higher index, so the graph is acyclic
fn dag() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..40).prop_flat_map(|size| {
        let edge = (0..size - 1).prop_flat_map(move |from| (Just(from), from + 1..size));
        (Just(size), prop::collection::vec(edge, 0..80))
    })
}

/// Arbitrary edges, self-loops included
fn any_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..25).prop_flat_map(|size| {
        (Just(size), prop::collection::vec((0..size, 0..size), 0..50))
    })
}

proptest! {
    #[test]
    fn prop_acyclic_graph_orders_every_vertex_after_its_dependencies((size, edges) in dag()) {
        let graph = build(size, &edges);

        let TopologicalOutcome::Ordered(order) = TopologicalResolver::new().resolve(&graph) else {
            return Err(TestCaseError::fail("acyclic graph reported a cycle"));
        };

        prop_assert_eq!(order.len(), size);
        let unique: HashSet<_> = order.iter().collect();
        prop_assert_eq!(unique.len(), size);

        let position = |identity: &ComponentIdentity| order.iter().position(|i| i == identity);
        for (dependent, dependency) in graph.edges() {
            prop_assert!(position(dependency) < position(dependent));
        }
    }

    #[test]
    fn prop_outcome_is_an_order_or_a_real_cycle((size, edges) in any_graph()) {
        let graph = build(size, &edges);
        let edge_set: HashSet<_> = graph.edges().collect();

        match TopologicalResolver::new().resolve(&graph) {
            TopologicalOutcome::Ordered(order) => {
                prop_assert_eq!(order.len(), size);
                let position = |identity: &ComponentIdentity| order.iter().position(|i| i == identity);
                for &(dependent, dependency) in &edge_set {
                    prop_assert!(position(dependency) < position(dependent));
                }
            }
            TopologicalOutcome::CycleDetected(cycle) => {
                prop_assert!(cycle.len() >= 2);
                prop_assert_eq!(cycle.first(), cycle.last());
                for pair in cycle.windows(2) {
                    prop_assert!(edge_set.contains(&(&pair[0], &pair[1])));
                }
                let interior: HashSet<_> = cycle[..cycle.len() - 1].iter().collect();
                prop_assert_eq!(interior.len(), cycle.len() - 1);
            }
        }
    }

    #[test]
    fn prop_resolution_is_deterministic((size, edges) in any_graph()) {
        let resolver = TopologicalResolver::new();
        let first = resolver.resolve(&build(size, &edges));
        let second = resolver.resolve(&build(size, &edges));
        prop_assert_eq!(first, second);
    }
}
