//! Pure policy evaluation (no IO).
//!
//! Input: a dependency registry and references produced elsewhere.
//! Output: per-reference verdicts, rendered diagnostics, and a batch report.

#![forbid(unsafe_code)]

pub mod checker;
pub mod policy;
pub mod registry;

mod engine;
mod fingerprint;
mod message;

pub use checker::{Checker, ExternalDependencyChecker};
pub use engine::{evaluate, Evaluation};
pub use message::render_violation;
pub use policy::{EffectiveConfig, FailOn, PackagePolicy};
pub use registry::{CollisionPolicy, DependencyRegistry, DuplicateConstant, RegistryError};

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod proptest;
