use crate::package::PackageRef;
use crate::receipt::Location;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The referenced symbol, as resolved by the reference-graph builder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConstantRef {
    /// Fully qualified constant name, e.g. `::ApplicationRecord::Database1`.
    pub name: String,
    /// Name of the package that defines the constant.
    pub package: String,
    /// Where the constant is defined.
    pub location: Location,
}

/// One observed usage of a constant by code belonging to `source_package`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Reference {
    pub source_package: PackageRef,
    pub constant: ConstantRef,
}

/// A reference that a checker has already reported, as a host runner lists it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReferenceOffense {
    pub reference: Reference,
    pub violation_type: String,
    pub message: String,
}
