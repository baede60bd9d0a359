//! Declaration Validation
//!
//! Structural prerequisites for a singleton component: it must be concrete
//! and instantiable with no arguments. Rules run in a fixed order and stop at
//! the first violation:
//!
//! 1. interface -> `IsInterface`
//! 2. abstract -> `IsAbstract`
//! 3. no zero-argument constructor -> `MissingNoArgConstructor`

use crate::validator_trait::Validator;
use crate::violation_trait::{Severity, Violation, ViolationCategory};
use influx_domain::constants::{
    VIOLATION_ID_ABSTRACT, VIOLATION_ID_INTERFACE, VIOLATION_ID_NO_ARG_CONSTRUCTOR,
};
use influx_domain::value_objects::{
    ComponentDeclaration, ComponentIdentity, ComponentKind, SourceLocation, ViolationReason,
};
use serde::Serialize;
use tracing::trace;

/// Declaration Violations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DeclarationViolation {
    IsInterface {
        identity: ComponentIdentity,
        location: Option<SourceLocation>,
    },
    IsAbstract {
        identity: ComponentIdentity,
        location: Option<SourceLocation>,
    },
    MissingNoArgConstructor {
        identity: ComponentIdentity,
        location: Option<SourceLocation>,
    },
}

impl DeclarationViolation {
    /// Build the violation for a reason and declaration
    pub fn new(reason: ViolationReason, declaration: &ComponentDeclaration) -> Self {
        let identity = declaration.identity.clone();
        let location = declaration.location.clone();
        match reason {
            ViolationReason::IsInterface => Self::IsInterface { identity, location },
            ViolationReason::IsAbstract => Self::IsAbstract { identity, location },
            ViolationReason::MissingNoArgConstructor => {
                Self::MissingNoArgConstructor { identity, location }
            }
        }
    }

    /// Reason this declaration was rejected
    pub fn reason(&self) -> ViolationReason {
        match self {
            Self::IsInterface { .. } => ViolationReason::IsInterface,
            Self::IsAbstract { .. } => ViolationReason::IsAbstract,
            Self::MissingNoArgConstructor { .. } => ViolationReason::MissingNoArgConstructor,
        }
    }

    /// The violating identity
    pub fn identity(&self) -> &ComponentIdentity {
        match self {
            Self::IsInterface { identity, .. }
            | Self::IsAbstract { identity, .. }
            | Self::MissingNoArgConstructor { identity, .. } => identity,
        }
    }
}

impl std::fmt::Display for DeclarationViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IsInterface { identity, .. } => write!(
                f,
                "{identity} cannot be an interface because it is declared as a singleton component"
            ),
            Self::IsAbstract { identity, .. } => write!(
                f,
                "{identity} cannot be abstract because it is declared as a singleton component"
            ),
            Self::MissingNoArgConstructor { identity, .. } => write!(
                f,
                "{identity} must have a no-arg or default constructor because it is declared as a singleton component"
            ),
        }
    }
}

impl Violation for DeclarationViolation {
    fn id(&self) -> &str {
        match self {
            Self::IsInterface { .. } => VIOLATION_ID_INTERFACE,
            Self::IsAbstract { .. } => VIOLATION_ID_ABSTRACT,
            Self::MissingNoArgConstructor { .. } => VIOLATION_ID_NO_ARG_CONSTRUCTOR,
        }
    }

    fn reason_code(&self) -> &str {
        self.reason().code()
    }

    fn category(&self) -> ViolationCategory {
        ViolationCategory::Declaration
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn identities(&self) -> &[ComponentIdentity] {
        std::slice::from_ref(self.identity())
    }

    fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::IsInterface { location, .. }
            | Self::IsAbstract { location, .. }
            | Self::MissingNoArgConstructor { location, .. } => location.as_ref(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Self::IsInterface { identity, .. } => Some(format!(
                "Declare a concrete implementation of {} as the component instead",
                identity.simple_name()
            )),
            Self::IsAbstract { identity, .. } => Some(format!(
                "Make {} concrete or declare a concrete subtype",
                identity.simple_name()
            )),
            Self::MissingNoArgConstructor { identity, .. } => Some(format!(
                "Add a public zero-argument constructor to {}",
                identity.simple_name()
            )),
        }
    }
}

/// Outcome of validating a single declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(DeclarationViolation),
}

impl ValidationResult {
    /// Whether the declaration passed every rule
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The violation, if any
    pub fn violation(&self) -> Option<&DeclarationViolation> {
        match self {
            Self::Valid => None,
            Self::Invalid(violation) => Some(violation),
        }
    }

    /// Consume into the violation, if any
    pub fn into_violation(self) -> Option<DeclarationViolation> {
        match self {
            Self::Valid => None,
            Self::Invalid(violation) => Some(violation),
        }
    }
}

/// Declaration Validator
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclarationValidator;

impl DeclarationValidator {
    pub fn new() -> Self {
        Self
    }

    /// First rule the declaration breaks, in rule order
    fn first_violated_rule(declaration: &ComponentDeclaration) -> Option<ViolationReason> {
        match declaration.kind {
            ComponentKind::Interface => Some(ViolationReason::IsInterface),
            ComponentKind::Abstract => Some(ViolationReason::IsAbstract),
            ComponentKind::Concrete if !declaration.has_no_arg_constructor => {
                Some(ViolationReason::MissingNoArgConstructor)
            }
            ComponentKind::Concrete => None,
        }
    }

    /// Validate every declaration, collecting all violations
    pub fn validate_all<'a, I>(&self, declarations: I) -> Vec<DeclarationViolation>
    where
        I: IntoIterator<Item = &'a ComponentDeclaration>,
    {
        declarations
            .into_iter()
            .filter_map(|declaration| self.validate(declaration).into_violation())
            .collect()
    }
}

impl Validator for DeclarationValidator {
    fn name(&self) -> &'static str {
        "declaration"
    }

    fn description(&self) -> &'static str {
        "Validates that singleton components are concrete and have a no-arg constructor"
    }

    fn validate(&self, declaration: &ComponentDeclaration) -> ValidationResult {
        match Self::first_violated_rule(declaration) {
            None => ValidationResult::Valid,
            Some(reason) => {
                trace!(identity = %declaration.identity, reason = reason.code(), "Declaration rejected");
                ValidationResult::Invalid(DeclarationViolation::new(reason, declaration))
            }
        }
    }
}
