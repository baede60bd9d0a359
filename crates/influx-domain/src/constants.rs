//! Domain layer constants
//!
//! Violation identifiers shared by the validator, the pipeline and the
//! reporters. Infrastructure-specific constants remain in
//! `influx_infrastructure::constants`.

// ============================================================================
// VIOLATION IDENTIFIERS
// ============================================================================

/// Component declared as an interface
pub const VIOLATION_ID_INTERFACE: &str = "DI001";

/// Component declared as abstract
pub const VIOLATION_ID_ABSTRACT: &str = "DI002";

/// Component without a zero-argument constructor
pub const VIOLATION_ID_NO_ARG_CONSTRUCTOR: &str = "DI003";

/// Dependency cycle between components
pub const VIOLATION_ID_DEPENDENCY_CYCLE: &str = "DI004";

// ============================================================================
// RENDERING
// ============================================================================

/// Separator used when rendering a dependency path
pub const DEPENDENCY_PATH_SEPARATOR: &str = " -> ";
