//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify the decision invariants:
//! - unregistered constants and disabled enforcement never violate
//! - under enforcement, the verdict is exactly allow-list non-membership
//! - the strict-mode hook is inert
//! - rendering and batch evaluation are deterministic

use crate::checker::{Checker, ExternalDependencyChecker};
use crate::engine::evaluate;
use crate::policy::EffectiveConfig;
use crate::registry::DependencyRegistry;
use extguard_types::{
    ConstantRef, EnforcementFlag, Location, PackageConfig, PackageRef, Reference,
    ReferenceOffense,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,11}").unwrap()
}

fn arb_constant() -> impl Strategy<Value = String> {
    prop::string::string_regex("(::)?[A-Z][A-Za-z0-9]{0,9}(::[A-Z][A-Za-z0-9]{0,9}){0,2}")
        .unwrap()
}

fn arb_package_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("packs/[a-z][a-z0-9_]{0,11}").unwrap()
}

fn arb_registry() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(arb_key(), arb_constant(), 0..8)
}

fn arb_enabled_flag() -> impl Strategy<Value = EnforcementFlag> {
    prop_oneof![
        Just(EnforcementFlag::Bool(true)),
        "[a-z]{0,8}".prop_map(EnforcementFlag::Mode),
    ]
}

fn arb_flag() -> impl Strategy<Value = EnforcementFlag> {
    prop_oneof![Just(EnforcementFlag::Bool(false)), arb_enabled_flag()]
}

fn arb_package_config() -> impl Strategy<Value = PackageConfig> {
    (
        prop::option::of(arb_flag()),
        prop::option::of(prop::collection::vec(arb_key(), 0..5)),
    )
        .prop_map(|(enforce, allowed)| PackageConfig {
            enforce_external_dependencies: enforce,
            external_dependencies: allowed,
        })
}

fn make_reference(constant: &str, owner: &str, source: &str, cfg: PackageConfig) -> Reference {
    Reference {
        source_package: PackageRef::new(source, cfg),
        constant: ConstantRef {
            name: constant.to_string(),
            package: owner.to_string(),
            location: Location::line(format!("{owner}/lib/constant.rb"), 1),
        },
    }
}

// ============================================================================
// Decision invariants
// ============================================================================

proptest! {
    #[test]
    fn unregistered_constants_never_violate(
        entries in arb_registry(),
        constant in arb_constant(),
        source in arb_package_name(),
        cfg in arb_package_config(),
    ) {
        let registry = DependencyRegistry::from_entries(entries);
        prop_assume!(registry.lookup_key(&constant).is_none());

        let checker = ExternalDependencyChecker::new(registry);
        let r = make_reference(&constant, "packs/owner", &source, cfg);
        prop_assert!(!checker.is_invalid(&r));
    }

    #[test]
    fn disabled_enforcement_never_violates(
        entries in arb_registry(),
        pick in any::<prop::sample::Index>(),
        allowed in prop::option::of(prop::collection::vec(arb_key(), 0..5)),
        explicit_false in any::<bool>(),
    ) {
        prop_assume!(!entries.is_empty());
        let constants: Vec<String> = entries.values().cloned().collect();
        let constant = pick.get(&constants).clone();

        let cfg = PackageConfig {
            enforce_external_dependencies: if explicit_false { Some(false.into()) } else { None },
            external_dependencies: allowed,
        };
        let checker = ExternalDependencyChecker::new(DependencyRegistry::from_entries(entries));
        let r = make_reference(&constant, "packs/owner", "packs/source", cfg);
        prop_assert!(!checker.is_invalid(&r));
    }

    #[test]
    fn enforced_verdict_is_allow_list_non_membership(
        entries in arb_registry(),
        pick in any::<prop::sample::Index>(),
        allowed in prop::collection::vec(arb_key(), 0..5),
        flag in arb_enabled_flag(),
    ) {
        prop_assume!(!entries.is_empty());
        let constants: Vec<String> = entries.values().cloned().collect();
        let constant = pick.get(&constants).clone();

        let checker = ExternalDependencyChecker::new(DependencyRegistry::from_entries(entries));
        let key = checker.registry().lookup_key(&constant).map(str::to_string);
        prop_assert!(key.is_some());
        let key = key.unwrap_or_default();

        let cfg = PackageConfig {
            enforce_external_dependencies: Some(flag.clone()),
            external_dependencies: Some(allowed.clone()),
        };
        let r = make_reference(&constant, "packs/owner", "packs/source", cfg);
        prop_assert_eq!(checker.is_invalid(&r), !allowed.contains(&key));

        let mut with_key = allowed;
        with_key.push(key);
        let cfg = PackageConfig {
            enforce_external_dependencies: Some(flag),
            external_dependencies: Some(with_key),
        };
        let r = make_reference(&constant, "packs/owner", "packs/source", cfg);
        prop_assert!(!checker.is_invalid(&r));
    }

    #[test]
    fn strict_mode_is_always_false(
        constant in arb_constant(),
        source in arb_package_name(),
        cfg in arb_package_config(),
        message in ".{0,40}",
    ) {
        let checker = ExternalDependencyChecker::new(DependencyRegistry::default());
        let offense = ReferenceOffense {
            reference: make_reference(&constant, "packs/owner", &source, cfg),
            violation_type: checker.violation_type().to_string(),
            message,
        };
        prop_assert!(!checker.strict_mode_violation(&offense));
    }

    #[test]
    fn render_is_pure(
        constant in arb_constant(),
        owner in arb_package_name(),
        source in arb_package_name(),
        cfg in arb_package_config(),
    ) {
        let checker = ExternalDependencyChecker::new(DependencyRegistry::default());
        let a = make_reference(&constant, &owner, &source, cfg.clone());
        let b = make_reference(&constant, &owner, &source, cfg);

        let rendered = checker.render(&a);
        prop_assert_eq!(&rendered, &checker.render(&b));
        prop_assert_eq!(rendered.trim_end(), rendered.as_str());
        let quoted_constant = format!("'{}'", constant);
        prop_assert!(rendered.contains(&quoted_constant));
    }

    #[test]
    fn evaluation_is_order_independent(
        entries in arb_registry(),
        refs in prop::collection::vec(
            (arb_constant(), arb_package_name(), arb_package_config()),
            0..20,
        ),
    ) {
        let checker = ExternalDependencyChecker::new(DependencyRegistry::from_entries(entries));
        let forward: Vec<Reference> = refs
            .iter()
            .map(|(c, s, cfg)| make_reference(c, "packs/owner", s, cfg.clone()))
            .collect();
        let mut backward = forward.clone();
        backward.reverse();

        let cfg = EffectiveConfig::default();
        let a = evaluate(&forward, &checker, checker.registry(), &cfg);
        let b = evaluate(&backward, &checker, checker.registry(), &cfg);
        prop_assert_eq!(a.findings, b.findings);
        prop_assert_eq!(a.verdict, b.verdict);
        prop_assert_eq!(a.data, b.data);
    }
}
