//! Topological Resolver
//!
//! Orders the dependency graph so every dependency precedes each of its
//! dependents, or reports the first cycle found.
//!
//! The traversal is a depth-first search driven by an explicit frame stack,
//! so deep dependency chains cannot exhaust the native call stack. Vertices
//! are coloured in a table indexed by vertex id:
//!
//! - white: not visited
//! - gray: on the current DFS path
//! - black: finished, appended to the post-order
//!
//! Reaching a gray vertex closes a cycle. Because the frame stack *is* the
//! current path, the cycle is the stack slice from that vertex to the top,
//! closed by repeating the vertex: `[B, C, D, B]`.
//!
//! Edges point from dependent to dependency, so a vertex finishes only after
//! all of its dependencies. The post-order is therefore already
//! dependencies-first and is returned as is.

use influx_domain::entities::{DependencyGraph, VertexId};
use influx_domain::value_objects::{ComponentIdentity, TopologicalOutcome};
use tracing::{error, trace};

/// Ordering strategy over a dependency graph
pub trait DependencyResolver: Send + Sync {
    /// Order the whole graph or return the first cycle found
    fn resolve(&self, graph: &DependencyGraph) -> TopologicalOutcome;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    White,
    Gray,
    Black,
}

/// One vertex on the DFS path and the next edge to follow from it
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    next_edge: usize,
}

/// Iterative depth-first topological sort
///
/// Roots are tried in vertex insertion order and neighbours in edge
/// insertion order, so identical graphs always resolve identically.
#[derive(Debug, Default, Clone, Copy)]
pub struct TopologicalResolver;

impl TopologicalResolver {
    pub fn new() -> Self {
        Self
    }

    /// Cycle closed by an edge into `ancestor`, which is on `path`
    fn reconstruct_cycle(
        graph: &DependencyGraph,
        path: &[Frame],
        ancestor: VertexId,
    ) -> Vec<ComponentIdentity> {
        let start = path.iter().position(|frame| frame.vertex == ancestor);
        debug_assert!(start.is_some(), "gray vertex {ancestor} is not on the DFS path");
        let Some(start) = start else {
            error!(
                ancestor = %graph[ancestor],
                "Gray vertex missing from the DFS path; reporting the whole path"
            );
            return path
                .iter()
                .map(|frame| graph[frame.vertex].clone())
                .chain(std::iter::once(graph[ancestor].clone()))
                .collect();
        };
        path[start..]
            .iter()
            .map(|frame| graph[frame.vertex].clone())
            .chain(std::iter::once(graph[ancestor].clone()))
            .collect()
    }
}

impl DependencyResolver for TopologicalResolver {
    fn resolve(&self, graph: &DependencyGraph) -> TopologicalOutcome {
        let mut marks = vec![Mark::White; graph.len()];
        let mut post_order: Vec<VertexId> = Vec::with_capacity(graph.len());
        let mut path: Vec<Frame> = Vec::new();

        for root in 0..graph.len() {
            if marks[root] != Mark::White {
                continue;
            }
            marks[root] = Mark::Gray;
            path.push(Frame {
                vertex: root,
                next_edge: 0,
            });

            while let Some(frame) = path.last_mut() {
                let vertex = frame.vertex;
                let next = graph.neighbors(vertex).get(frame.next_edge).copied();
                frame.next_edge += 1;

                let Some(next) = next else {
                    marks[vertex] = Mark::Black;
                    post_order.push(vertex);
                    path.pop();
                    continue;
                };

                match marks[next] {
                    Mark::White => {
                        marks[next] = Mark::Gray;
                        path.push(Frame {
                            vertex: next,
                            next_edge: 0,
                        });
                    }
                    Mark::Gray => {
                        let cycle = Self::reconstruct_cycle(graph, &path, next);
                        trace!(length = cycle.len(), "Cycle detected");
                        return TopologicalOutcome::CycleDetected(cycle);
                    }
                    Mark::Black => {}
                }
            }
        }

        trace!(vertices = post_order.len(), "Graph ordered");
        TopologicalOutcome::Ordered(
            post_order
                .into_iter()
                .map(|vertex| graph[vertex].clone())
                .collect(),
        )
    }
}
