//! Domain Value Objects
//!
//! Immutable value objects that describe components and the outcomes of
//! validating and ordering them.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ComponentIdentity`] | Fully-qualified component key |
//! | [`ComponentDeclaration`] | One candidate component reported by the scanner |
//! | [`ComponentKind`] | Concrete, interface or abstract |
//! | [`SourceLocation`] | Declaring file and line |
//! | [`ViolationReason`] | Reason code for a rejected declaration |
//! | [`TopologicalOutcome`] | Ordered sequence or detected cycle |

/// Component declaration value objects
pub mod declaration;
/// Component identity value object
pub mod identity;
/// Validation and resolution outcomes
pub mod outcome;

// Re-export commonly used value objects
pub use declaration::{ComponentDeclaration, ComponentKind, SourceLocation};
pub use identity::ComponentIdentity;
pub use outcome::{TopologicalOutcome, ViolationReason, format_cycle};
