//! The checker contract and the external-dependency checker.

use crate::message::render_violation;
use crate::policy::PackagePolicy;
use crate::registry::DependencyRegistry;
use extguard_types::{ids, Reference, ReferenceOffense};

/// Operations every check exposes to the host runner.
///
/// Implementations are shared across worker threads, so they must be immutable after
/// construction.
pub trait Checker: Send + Sync {
    /// Identifier the host uses to tag and report violations.
    fn violation_type(&self) -> &'static str;

    fn is_invalid(&self, reference: &Reference) -> bool;

    /// Whether an already-listed offense must fail even when it is recorded as accepted.
    fn strict_mode_violation(&self, offense: &ReferenceOffense) -> bool;

    /// Diagnostic text. Only called for references where `is_invalid` holds.
    fn render(&self, reference: &Reference) -> String;
}

/// Flags references to registered external dependencies that the referencing package has
/// not declared.
#[derive(Clone, Debug)]
pub struct ExternalDependencyChecker {
    registry: DependencyRegistry,
}

impl ExternalDependencyChecker {
    pub fn new(registry: DependencyRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &DependencyRegistry {
        &self.registry
    }

    /// The dependency key the referenced constant is registered under, if any.
    pub fn dependency_key(&self, reference: &Reference) -> Option<&str> {
        self.registry.lookup_key(&reference.constant.name)
    }
}

impl Checker for ExternalDependencyChecker {
    fn violation_type(&self) -> &'static str {
        ids::VIOLATION_EXTERNAL_DEPENDENCY
    }

    fn is_invalid(&self, reference: &Reference) -> bool {
        let Some(key) = self.dependency_key(reference) else {
            return false;
        };

        // The referencing package's policy, not the defining package's.
        PackagePolicy::resolve(&reference.source_package.config).forbids(key)
    }

    fn strict_mode_violation(&self, _offense: &ReferenceOffense) -> bool {
        false
    }

    fn render(&self, reference: &Reference) -> String {
        render_violation(reference)
    }
}
