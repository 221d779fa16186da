//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after package configuration examples.
    pub examples: ExamplePair,
}

/// Before and after configuration examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Configuration that would let a finding through.
    pub before: &'static str,
    /// Configuration that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id, code, or violation type.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_BOUNDARY_EXTERNAL_DEPENDENCY | ids::VIOLATION_EXTERNAL_DEPENDENCY => {
            Some(explain_external_dependency())
        }
        ids::CODE_UNDECLARED_EXTERNAL_DEPENDENCY => Some(explain_undeclared_external_dependency()),
        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_BOUNDARY_EXTERNAL_DEPENDENCY]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_UNDECLARED_EXTERNAL_DEPENDENCY]
}

fn explain_external_dependency() -> Explanation {
    Explanation {
        title: "External Dependency Boundaries",
        description: "\
Detects references to registered external dependencies from packages that have not
declared them.

The workspace config maps short dependency keys to fully qualified constants:

    [external_dependencies]
    kv = \"Redis\"

A package that sets `enforce_external_dependencies` (to `true` or a mode string such as
`\"strict\"`) may only reference the constants whose keys appear in its own
`external_dependencies` list. Constants that are not registered are never flagged, and
packages without enforcement are never flagged.",
        remediation: "\
Either route the call through a package that already owns the dependency, or declare
the dependency key in the referencing package's configuration:

    enforce_external_dependencies = true
    external_dependencies = [\"kv\"]

Unknown keys in `external_dependencies` are accepted but never match anything, so check
the spelling against the workspace registry.",
        examples: ExamplePair {
            before: r#"# packs/checkout/package.toml
enforce_external_dependencies = true
external_dependencies = ["caching"]"#,
            after: r#"# packs/checkout/package.toml
enforce_external_dependencies = true
external_dependencies = ["caching", "kv"]"#,
        },
    }
}

fn explain_undeclared_external_dependency() -> Explanation {
    let mut exp = explain_external_dependency();
    exp.title = "Undeclared External Dependency";
    exp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_check_id_and_violation_type() {
        assert!(lookup_explanation(ids::CHECK_BOUNDARY_EXTERNAL_DEPENDENCY).is_some());
        assert!(lookup_explanation(ids::VIOLATION_EXTERNAL_DEPENDENCY).is_some());
    }

    #[test]
    fn code_explanation_has_its_own_title() {
        let exp = lookup_explanation(ids::CODE_UNDECLARED_EXTERNAL_DEPENDENCY).expect("code");
        assert_eq!(exp.title, "Undeclared External Dependency");
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_explanation("unknown.check").is_none());
        assert!(lookup_explanation("unknown_code").is_none());
    }

    #[test]
    fn all_ids_are_registered() {
        for id in all_check_ids().iter().chain(all_codes()) {
            assert!(
                lookup_explanation(id).is_some(),
                "{} should be in registry",
                id
            );
        }
    }
}
