//! Domain Services
//!
//! Stateful building blocks the pipeline composes: the per-build seen-set,
//! the incremental graph builder and the topological resolver.

/// Incremental dependency graph construction
pub mod graph_builder;
/// Per-build record of inserted identities
pub mod identity_cache;
/// Dependency ordering and cycle detection
pub mod resolver;

pub use graph_builder::GraphBuilder;
pub use identity_cache::IdentityCache;
pub use resolver::{DependencyResolver, TopologicalResolver};
