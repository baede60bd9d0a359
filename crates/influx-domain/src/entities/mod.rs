//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`DependencyGraph`] | Insertion-ordered `depends-on` graph of components |

/// Dependency graph entity
pub mod graph;

pub use graph::{DependencyGraph, VertexId};
