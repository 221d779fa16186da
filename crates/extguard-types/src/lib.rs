//! Stable DTOs and IDs used across the extguard workspace.
//!
//! This crate is intentionally boring:
//! - reference facts handed over by the reference-graph builder
//! - per-package configuration as seen by the check
//! - data types for the emitted report
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod package;
pub mod path;
pub mod receipt;
pub mod reference;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use package::{EnforcementFlag, PackageConfig, PackageRef};
pub use path::RepoPath;
pub use receipt::{
    ExtguardData, ExtguardReport, Finding, Location, ReportEnvelope, Severity, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
pub use reference::{ConstantRef, Reference, ReferenceOffense};
