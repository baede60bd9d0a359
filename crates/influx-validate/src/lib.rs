//! Declaration Validation for Influx
//!
//! This crate provides:
//! - the structural rules every singleton component must satisfy
//!   ([`DeclarationValidator`])
//! - the [`Violation`] model shared by declaration problems and dependency
//!   cycles, with stable IDs and reason codes
//! - build reports in JSON and human-readable form ([`Reporter`])
//!
//! # Example
//!
//! ```
//! use influx_domain::value_objects::{ComponentDeclaration, ComponentIdentity, ComponentKind};
//! use influx_validate::{DeclarationValidator, Validator, Violation};
//!
//! let port = ComponentDeclaration::new(
//!     ComponentIdentity::new("app.UserPort").unwrap(),
//!     ComponentKind::Interface,
//!     false,
//! );
//!
//! let result = DeclarationValidator::new().validate(&port);
//! let violation = result.violation().unwrap();
//! assert_eq!(violation.reason_code(), "IsInterface");
//! assert_eq!(violation.id(), "DI001");
//! ```

pub mod cycle;
pub mod declaration;
pub mod reporter;
pub mod validator_trait;
pub mod violation_trait;

pub use cycle::CycleViolation;
pub use declaration::{DeclarationValidator, DeclarationViolation, ValidationResult};
pub use reporter::{BuildReport, BuildSummary, PassSummary, Reporter, ViolationEntry};
pub use validator_trait::Validator;
pub use violation_trait::{Severity, Violation, ViolationCategory};
