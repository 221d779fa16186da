use crate::checker::ExternalDependencyChecker;
use crate::policy::EffectiveConfig;
use crate::registry::DependencyRegistry;
use extguard_types::{ConstantRef, Location, PackageConfig, PackageRef, Reference, Severity};

pub fn sample_registry() -> DependencyRegistry {
    DependencyRegistry::from_entries([
        ("database1", "::ApplicationRecord::Database1"),
        ("kv", "Redis"),
        ("caching", "Memcached"),
    ])
}

pub fn sample_checker() -> ExternalDependencyChecker {
    ExternalDependencyChecker::new(sample_registry())
}

pub fn reference(
    constant: &str,
    owner: &str,
    source: &str,
    source_config: PackageConfig,
) -> Reference {
    let file = constant.trim_start_matches("::").replace("::", "/").to_lowercase();
    reference_at(
        constant,
        owner,
        source,
        source_config,
        Location::file(format!("{owner}/lib/{file}.rb")),
    )
}

pub fn reference_at(
    constant: &str,
    owner: &str,
    source: &str,
    source_config: PackageConfig,
    location: Location,
) -> Reference {
    Reference {
        source_package: PackageRef::new(source, source_config),
        constant: ConstantRef {
            name: constant.to_string(),
            package: owner.to_string(),
            location,
        },
    }
}

pub fn config_with_severity(severity: Severity) -> EffectiveConfig {
    EffectiveConfig {
        severity,
        ..EffectiveConfig::default()
    }
}
