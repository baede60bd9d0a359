//! Identity Cache
//!
//! Records which component identities have already been inserted into the
//! dependency graph during the current build. Passes consult it to skip
//! re-delivered declarations.

use dashmap::DashSet;
use influx_domain::value_objects::ComponentIdentity;

/// Seen-set for one build invocation
///
/// [`mark_seen`](Self::mark_seen) is an atomic check-and-set, so the cache
/// stays correct if declaration discovery is ever parallelized. State lives
/// only as long as the owning pipeline; call [`reset`](Self::reset) between
/// independent builds.
#[derive(Debug, Default)]
pub struct IdentityCache {
    seen: DashSet<ComponentIdentity>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the identity was already inserted
    pub fn has_seen(&self, identity: &ComponentIdentity) -> bool {
        self.seen.contains(identity)
    }

    /// Record the identity; true only on the first call for it
    pub fn mark_seen(&self, identity: &ComponentIdentity) -> bool {
        self.seen.insert(identity.clone())
    }

    /// Forget every identity
    pub fn reset(&self) {
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
