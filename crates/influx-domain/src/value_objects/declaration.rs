//! Component declaration value objects
//!
//! A declaration is what the scanner reports for one candidate component. The
//! core never mutates it.

use super::identity::ComponentIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Declared kind of a candidate component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Instantiable type
    #[serde(alias = "class", alias = "concrete-type")]
    Concrete,
    /// Interface / trait declaration
    Interface,
    /// Abstract type
    #[serde(alias = "abstract-type")]
    Abstract,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concrete => write!(f, "concrete"),
            Self::Interface => write!(f, "interface"),
            Self::Abstract => write!(f, "abstract"),
        }
    }
}

/// Where a declaration was found
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Declaring file
    pub file: PathBuf,
    /// 1-based line, when known
    pub line: Option<usize>,
}

impl SourceLocation {
    /// Location pointing at a whole file
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            line: None,
        }
    }

    /// Location pointing at a line of a file
    pub fn at_line(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file.display(), line),
            None => write!(f, "{}", self.file.display()),
        }
    }
}

/// One candidate component as reported by the declaration scanner
///
/// # Example
///
/// ```
/// use influx_domain::value_objects::{ComponentDeclaration, ComponentIdentity, ComponentKind};
///
/// let repo = ComponentIdentity::new("app.Repository").unwrap();
/// let service = ComponentDeclaration::concrete(ComponentIdentity::new("app.Service").unwrap())
///     .with_dependency(repo.clone());
///
/// assert_eq!(service.kind, ComponentKind::Concrete);
/// assert!(service.has_no_arg_constructor);
/// assert_eq!(service.dependencies, vec![repo]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDeclaration {
    /// Unique identity of the component
    pub identity: ComponentIdentity,
    /// Declared kind
    pub kind: ComponentKind,
    /// Whether a usable zero-argument constructor is exposed
    pub has_no_arg_constructor: bool,
    /// Identities this component depends on, in declared order
    #[serde(default)]
    pub dependencies: Vec<ComponentIdentity>,
    /// Declaring source, if the scanner knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl ComponentDeclaration {
    /// Create a declaration with explicit kind and constructor availability
    pub fn new(identity: ComponentIdentity, kind: ComponentKind, has_no_arg_constructor: bool) -> Self {
        Self {
            identity,
            kind,
            has_no_arg_constructor,
            dependencies: Vec::new(),
            location: None,
        }
    }

    /// A concrete component with a no-arg constructor and no dependencies
    pub fn concrete(identity: ComponentIdentity) -> Self {
        Self::new(identity, ComponentKind::Concrete, true)
    }

    /// Append a declared dependency
    pub fn with_dependency(mut self, dependency: ComponentIdentity) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Replace the declared dependencies
    pub fn with_dependencies<I>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = ComponentIdentity>,
    {
        self.dependencies = dependencies.into_iter().collect();
        self
    }

    /// Attach the declaring source location
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}
