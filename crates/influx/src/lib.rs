//! # Influx
//!
//! Build-time dependency injection metadata compiler.
//!
//! Influx reads singleton component declarations in incremental passes,
//! rejects components that cannot be instantiated with no arguments, builds
//! the `depends-on` graph, and emits registration artifacts plus a manifest
//! in an order where every dependency precedes its dependents. Dependency
//! cycles are reported with their full path.
//!
//! ## Architecture
//!
//! - `domain` - Identities, declarations, the dependency graph, errors
//! - `validate` - Declaration rules, violations and build reports
//! - `application` - Ports, identity cache, resolver and pass orchestration
//! - `infrastructure` - Configuration, logging and file adapters

/// Domain layer - identities, declarations and the dependency graph
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use influx_domain::*;
}

/// Validation layer - declaration rules, violations and reports
///
/// Re-exports from the validate crate for convenience
pub mod validate {
    pub use influx_validate::*;
}

/// Application layer - ports and pass orchestration
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use influx_application::*;
}

/// Infrastructure layer - configuration, logging and adapters
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use influx_infrastructure::*;
}

pub use influx_application::{BuildDriver, PassResult, PipelineOrchestrator};
pub use influx_domain::{Error, Result};
pub use influx_infrastructure::{AppConfig, ConfigLoader, run_build};
pub use influx_validate::{BuildReport, Reporter};
