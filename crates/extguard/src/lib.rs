//! External-dependency boundary checks.
//!
//! Decides whether a single reference from one package reaches a constant registered as an
//! external dependency that the package has not declared, and renders the diagnostic.
//!
//! ```
//! use extguard::{Checker, DependencyRegistry, ExternalDependencyChecker};
//! use extguard::types::{ConstantRef, Location, PackageConfig, PackageRef, Reference};
//!
//! let registry = DependencyRegistry::from_entries([("kv", "Redis")]);
//! let checker = ExternalDependencyChecker::new(registry);
//!
//! let reference = Reference {
//!     source_package: PackageRef::new("packs/checkout", PackageConfig::enforced(&[])),
//!     constant: ConstantRef {
//!         name: "Redis".to_string(),
//!         package: "gems".to_string(),
//!         location: Location::file("vendor/redis.rb"),
//!     },
//! };
//!
//! assert!(checker.is_invalid(&reference));
//! assert_eq!(checker.violation_type(), "external_dependency");
//! ```

#![forbid(unsafe_code)]

pub use extguard_domain::{
    evaluate, render_violation, Checker, CollisionPolicy, DependencyRegistry, DuplicateConstant,
    EffectiveConfig, Evaluation, ExternalDependencyChecker, FailOn, PackagePolicy, RegistryError,
};

pub use extguard_types as types;
