use crate::registry::CollisionPolicy;
use extguard_types::{PackageConfig, Severity};
use std::collections::BTreeSet;

/// A package's external-dependency policy, projected from its configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackagePolicy {
    pub enforce: bool,
    pub allowed: BTreeSet<String>,
}

impl PackagePolicy {
    /// Missing fields default to enforcement off and an empty allow-list.
    ///
    /// Allow-list entries are kept verbatim; keys the registry does not know simply never match.
    pub fn resolve(config: &PackageConfig) -> Self {
        Self {
            enforce: config.enforcement_enabled(),
            allowed: config
                .external_dependencies
                .iter()
                .flatten()
                .cloned()
                .collect(),
        }
    }

    pub fn allows(&self, key: &str) -> bool {
        self.allowed.contains(key)
    }

    /// Enforcement is checked before membership.
    pub fn forbids(&self, key: &str) -> bool {
        self.enforce && !self.allows(key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

/// Run-level settings for batch evaluation.
#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub severity: Severity,
    pub fail_on: FailOn,
    pub max_findings: usize,
    pub on_duplicate_constant: CollisionPolicy,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            severity: Severity::Error,
            fail_on: FailOn::Error,
            max_findings: 200,
            on_duplicate_constant: CollisionPolicy::LastWins,
        }
    }
}
