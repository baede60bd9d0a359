//! Shared helpers and test doubles

use influx_application::ports::{ArtifactEmitter, DiagnosticSink, EmitSummary};
use influx_application::{DependencyResolver, TopologicalResolver};
use influx_domain::entities::DependencyGraph;
use influx_domain::error::{Error, Result};
use influx_domain::value_objects::{
    ComponentDeclaration, ComponentIdentity, ComponentKind, TopologicalOutcome,
};
use influx_validate::Violation;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn id(name: &str) -> ComponentIdentity {
    ComponentIdentity::new(name).unwrap()
}

/// Concrete, constructible declaration depending on `deps`
pub fn decl(name: &str, deps: &[&str]) -> ComponentDeclaration {
    ComponentDeclaration::concrete(id(name)).with_dependencies(deps.iter().map(|d| id(d)))
}

pub fn interface(name: &str) -> ComponentDeclaration {
    ComponentDeclaration::new(id(name), ComponentKind::Interface, false)
}

pub fn ids(names: &[&str]) -> Vec<ComponentIdentity> {
    names.iter().map(|n| id(n)).collect()
}

/// Resolver wrapper counting calls
#[derive(Default)]
pub struct CountingResolver {
    inner: TopologicalResolver,
    calls: Arc<AtomicUsize>,
}

impl CountingResolver {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner: TopologicalResolver::new(),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl DependencyResolver for CountingResolver {
    fn resolve(&self, graph: &DependencyGraph) -> TopologicalOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(graph)
    }
}

/// Emitter recording every order it receives
#[derive(Default)]
pub struct RecordingEmitter {
    pub orders: Mutex<Vec<Vec<ComponentIdentity>>>,
    pub fail: bool,
}

impl RecordingEmitter {
    pub fn failing() -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.orders.lock().unwrap().len()
    }
}

impl ArtifactEmitter for RecordingEmitter {
    fn emit(&self, order: &[ComponentIdentity]) -> Result<EmitSummary> {
        if self.fail {
            return Err(Error::emit("disk full"));
        }
        self.orders.lock().unwrap().push(order.to_vec());
        Ok(EmitSummary {
            written: order.len(),
            skipped: 0,
        })
    }
}

/// Sink keeping `(id, identities)` for each report
#[derive(Default)]
pub struct RecordingSink {
    pub reports: Mutex<Vec<(String, Vec<ComponentIdentity>)>>,
}

impl RecordingSink {
    pub fn ids(&self) -> Vec<String> {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, violation: &dyn Violation) {
        self.reports
            .lock()
            .unwrap()
            .push((violation.id().to_string(), violation.identities().to_vec()));
    }
}
