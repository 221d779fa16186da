use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of `enforce_external_dependencies`.
///
/// Hosts write either a boolean or a mode string such as `"strict"`. Only `false` turns the
/// check off; any string turns it on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum EnforcementFlag {
    Bool(bool),
    Mode(String),
}

impl EnforcementFlag {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, EnforcementFlag::Bool(false))
    }
}

impl From<bool> for EnforcementFlag {
    fn from(value: bool) -> Self {
        EnforcementFlag::Bool(value)
    }
}

/// The slice of a package's own configuration that the external-dependency check reads.
///
/// The full package configuration belongs to the host and carries settings for other checks,
/// so unknown fields are ignored. `null` and a missing field both deserialize to `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PackageConfig {
    /// Turn the check on for references originating in this package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_external_dependencies: Option<EnforcementFlag>,

    /// Dependency keys this package may reference while enforcement is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_dependencies: Option<Vec<String>>,
}

impl PackageConfig {
    pub fn enforced(allowed: &[&str]) -> Self {
        Self {
            enforce_external_dependencies: Some(EnforcementFlag::Bool(true)),
            external_dependencies: Some(allowed.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// `false`, `null` and a missing flag mean off. Every other value means on.
    pub fn enforcement_enabled(&self) -> bool {
        self.enforce_external_dependencies
            .as_ref()
            .is_some_and(EnforcementFlag::is_enabled)
    }
}

/// A named package together with its configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PackageRef {
    pub name: String,
    #[serde(default)]
    pub config: PackageConfig,
}

impl PackageRef {
    pub fn new(name: impl Into<String>, config: PackageConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
