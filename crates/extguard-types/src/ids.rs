//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

/// Violation type reported to the host checker runner.
pub const VIOLATION_EXTERNAL_DEPENDENCY: &str = "external_dependency";

// Checks
pub const CHECK_BOUNDARY_EXTERNAL_DEPENDENCY: &str = "boundary.external_dependency";

// Codes: boundary.external_dependency
pub const CODE_UNDECLARED_EXTERNAL_DEPENDENCY: &str = "undeclared_external_dependency";

/// Where the rendered diagnostic points users for help.
pub const TROUBLESHOOT_URL: &str =
    "https://github.com/EffortlessMetrics/extguard/blob/main/TROUBLESHOOT.md#troubleshooting-violations";
