//! Dependency Graph Builder
//!
//! Folds validated declarations into the build's [`DependencyGraph`]. The
//! graph only grows during a build: vertices and edges are never removed
//! until [`GraphBuilder::reset`].

use super::identity_cache::IdentityCache;
use influx_domain::entities::DependencyGraph;
use influx_domain::value_objects::ComponentDeclaration;
use std::sync::Arc;
use tracing::trace;

/// Incremental builder over one dependency graph
#[derive(Debug)]
pub struct GraphBuilder {
    graph: DependencyGraph,
    cache: Arc<IdentityCache>,
}

impl GraphBuilder {
    /// Builder sharing the given seen-set
    pub fn new(cache: Arc<IdentityCache>) -> Self {
        Self {
            graph: DependencyGraph::new(),
            cache,
        }
    }

    /// Insert a declaration unless its identity was already inserted
    ///
    /// Marks the identity seen, declares its vertex (upgrading a placeholder
    /// left by an earlier dependent) and appends one edge per dependency in
    /// declared order. Returns whether anything was inserted.
    pub fn add_declaration(&mut self, declaration: &ComponentDeclaration) -> bool {
        if !self.cache.mark_seen(&declaration.identity) {
            trace!(identity = %declaration.identity, "Already in graph, skipping");
            return false;
        }

        let was_placeholder = self.graph.contains(&declaration.identity);
        self.graph.declare_vertex(&declaration.identity);
        for dependency in &declaration.dependencies {
            self.graph.add_edge(&declaration.identity, dependency);
        }

        trace!(
            identity = %declaration.identity,
            dependencies = declaration.dependencies.len(),
            was_placeholder,
            "Declaration inserted"
        );
        true
    }

    /// The graph built so far
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// The seen-set this builder marks
    pub fn identity_cache(&self) -> &IdentityCache {
        &self.cache
    }

    /// Drop the graph and forget every seen identity
    pub fn reset(&mut self) {
        self.graph.clear();
        self.cache.reset();
    }
}
