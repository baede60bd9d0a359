//! Validator Trait
//!
//! Seam between the pipeline and the rules it enforces on each declaration.

use crate::declaration::ValidationResult;
use influx_domain::value_objects::ComponentDeclaration;

/// A rule set applied to one declaration at a time
///
/// Implementations must be pure: the pipeline reports failures itself.
pub trait Validator: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Human-readable description of what is checked
    fn description(&self) -> &'static str;

    /// Validate one declaration, stopping at the first broken rule
    fn validate(&self, declaration: &ComponentDeclaration) -> ValidationResult;
}
