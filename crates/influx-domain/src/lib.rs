//! # Influx Domain Layer
//!
//! Core types of the build-time dependency-injection metadata compiler:
//! component identities and declarations, the dependency graph, and the
//! outcomes of validating and ordering components.
//!
//! This crate has no knowledge of scanning, emitting or configuration; those
//! live behind the ports declared in `influx-application`.
//!
//! ## Example
//!
//! ```
//! use influx_domain::entities::DependencyGraph;
//! use influx_domain::value_objects::ComponentIdentity;
//!
//! let service = ComponentIdentity::new("app.Service").unwrap();
//! let repo = ComponentIdentity::new("app.Repository").unwrap();
//!
//! let mut graph = DependencyGraph::new();
//! graph.declare_vertex(&service);
//! graph.add_edge(&service, &repo);
//!
//! assert_eq!(graph.len(), 2);
//! assert_eq!(graph.dependencies_of(&service), Some(vec![&repo]));
//! ```

pub mod constants;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
