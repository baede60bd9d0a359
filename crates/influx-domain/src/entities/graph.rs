//! Dependency graph entity
//!
//! Vertices live in an arena indexed by [`VertexId`] in first-insertion order,
//! and edges are stored as vertex indices. An edge can only be created through
//! [`DependencyGraph::add_edge`], which inserts its target first, so every
//! edge target is always a vertex of the graph.

use crate::value_objects::ComponentIdentity;
use std::collections::HashMap;
use std::ops::Index;

/// Index of a vertex in the graph arena
pub type VertexId = usize;

#[derive(Debug, Clone)]
struct Vertex {
    identity: ComponentIdentity,
    edges: Vec<VertexId>,
    declared: bool,
}

/// Directed `depends-on` graph keyed by component identity
///
/// An edge `A -> B` means A depends on B, so B must be ordered first.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    vertices: Vec<Vertex>,
    index: HashMap<ComponentIdentity, VertexId>,
    edge_count: usize,
}

impl DependencyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices, placeholders included
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of distinct edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the identity is a vertex of the graph
    pub fn contains(&self, identity: &ComponentIdentity) -> bool {
        self.index.contains_key(identity)
    }

    /// Vertex index of an identity
    pub fn vertex_id(&self, identity: &ComponentIdentity) -> Option<VertexId> {
        self.index.get(identity).copied()
    }

    /// Identity stored at a vertex index
    pub fn identity(&self, id: VertexId) -> Option<&ComponentIdentity> {
        self.vertices.get(id).map(|v| &v.identity)
    }

    /// Outgoing edges of a vertex, in insertion order
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.vertices.get(id).map_or(&[], |v| v.edges.as_slice())
    }

    /// Whether the identity was declared, as opposed to only referenced
    pub fn is_declared(&self, identity: &ComponentIdentity) -> bool {
        self.vertex_id(identity)
            .is_some_and(|id| self.vertices[id].declared)
    }

    /// Identities in first-insertion order
    pub fn identities(&self) -> impl Iterator<Item = &ComponentIdentity> {
        self.vertices.iter().map(|v| &v.identity)
    }

    /// Referenced identities whose own declaration has not been inserted yet
    pub fn placeholders(&self) -> impl Iterator<Item = &ComponentIdentity> {
        self.vertices
            .iter()
            .filter(|v| !v.declared)
            .map(|v| &v.identity)
    }

    /// Dependencies of an identity, in insertion order
    pub fn dependencies_of(&self, identity: &ComponentIdentity) -> Option<Vec<&ComponentIdentity>> {
        let id = self.vertex_id(identity)?;
        Some(
            self.vertices[id]
                .edges
                .iter()
                .map(|&to| &self.vertices[to].identity)
                .collect(),
        )
    }

    /// All edges as `(dependent, dependency)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (&ComponentIdentity, &ComponentIdentity)> {
        self.vertices.iter().flat_map(move |v| {
            v.edges
                .iter()
                .map(move |&to| (&v.identity, &self.vertices[to].identity))
        })
    }

    /// Return the vertex for an identity, inserting a placeholder if absent
    pub fn ensure_vertex(&mut self, identity: &ComponentIdentity) -> VertexId {
        if let Some(id) = self.vertex_id(identity) {
            return id;
        }
        let id = self.vertices.len();
        self.vertices.push(Vertex {
            identity: identity.clone(),
            edges: Vec::new(),
            declared: false,
        });
        self.index.insert(identity.clone(), id);
        id
    }

    /// Insert (or upgrade a placeholder to) a declared vertex
    pub fn declare_vertex(&mut self, identity: &ComponentIdentity) -> VertexId {
        let id = self.ensure_vertex(identity);
        self.vertices[id].declared = true;
        id
    }

    /// Add `from -> to`, inserting placeholders for missing endpoints
    ///
    /// Returns false if the edge already existed.
    pub fn add_edge(&mut self, from: &ComponentIdentity, to: &ComponentIdentity) -> bool {
        let from_id = self.ensure_vertex(from);
        let to_id = self.ensure_vertex(to);
        let edges = &mut self.vertices[from_id].edges;
        if edges.contains(&to_id) {
            return false;
        }
        edges.push(to_id);
        self.edge_count += 1;
        true
    }

    /// Drop every vertex and edge
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
        self.edge_count = 0;
    }
}

impl Index<VertexId> for DependencyGraph {
    type Output = ComponentIdentity;

    /// Identity at a vertex index; panics if the index is out of range
    fn index(&self, id: VertexId) -> &Self::Output {
        &self.vertices[id].identity
    }
}
