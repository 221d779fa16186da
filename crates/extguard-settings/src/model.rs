use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `extguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExtguardConfigV1 {
    /// Optional schema string for tooling (`extguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Map of dependency key -> fully qualified constant name.
    #[serde(default)]
    pub external_dependencies: BTreeMap<String, String>,

    #[serde(default)]
    pub check: CheckConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Severity of emitted findings: `info`, `warning`, `error` (default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// When to fail the check: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Two keys naming the same constant: `last-wins` (default) or `reject`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_duplicate_constant: Option<String>,
}
