//! Validation and resolution outcome value objects

use super::identity::ComponentIdentity;
use crate::constants::DEPENDENCY_PATH_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-distinguishable reason a declaration was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationReason {
    /// Declared kind is an interface
    IsInterface,
    /// Declared kind is abstract
    IsAbstract,
    /// No zero-argument constructor is exposed
    MissingNoArgConstructor,
}

impl ViolationReason {
    /// Stable reason code
    pub fn code(&self) -> &'static str {
        match self {
            Self::IsInterface => "IsInterface",
            Self::IsAbstract => "IsAbstract",
            Self::MissingNoArgConstructor => "MissingNoArgConstructor",
        }
    }
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of topologically sorting the dependency graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopologicalOutcome {
    /// Linear order where every dependency precedes its dependents
    Ordered(Vec<ComponentIdentity>),
    /// The first cycle found, starting and ending at the same identity
    CycleDetected(Vec<ComponentIdentity>),
}

impl TopologicalOutcome {
    /// Whether the graph could be ordered
    pub fn is_ordered(&self) -> bool {
        matches!(self, Self::Ordered(_))
    }

    /// The identities carried by the outcome (order or cycle)
    pub fn identities(&self) -> &[ComponentIdentity] {
        match self {
            Self::Ordered(order) => order,
            Self::CycleDetected(cycle) => cycle,
        }
    }
}

/// Render a cycle as `A -> B -> C -> A`
pub fn format_cycle(cycle: &[ComponentIdentity]) -> String {
    cycle
        .iter()
        .map(ComponentIdentity::as_str)
        .collect::<Vec<_>>()
        .join(DEPENDENCY_PATH_SEPARATOR)
}
